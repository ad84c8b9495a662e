// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column allocation.
//!
//! A layout pass starts by deriving the column lattice from the container
//! width and configuration: how many columns fit, how wide each one is, and
//! how far the whole lattice is shifted right to center it. Columns are
//! transient — they are recreated from scratch on every pass and never
//! persist between passes.

use alloc::vec::Vec;

use crate::config::GridConfig;

/// A vertical lane that accumulates stacked items during one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// 0-based column index, counted from the left.
    pub index: usize,
    /// Accumulated stacked content height in pixels.
    pub height: f64,
    /// Gap to apply before the next item placed in this column: zero for
    /// the first item, the configured gap thereafter.
    pub pending_gap: f64,
}

/// The column lattice for one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnPlan {
    /// Columns, left to right, all starting empty.
    pub columns: Vec<Column>,
    /// Effective column width in pixels: the capped item width plus the gap.
    /// This is the horizontal quantum for counting columns and computing
    /// left offsets.
    pub column_width: f64,
    /// Horizontal shift in pixels that centers the lattice when the columns
    /// do not exactly fill the container. May be negative when a single
    /// forced column is wider than the container.
    pub horizontal_offset: f64,
}

impl ColumnPlan {
    /// Returns the number of columns in the plan.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the height of the tallest column.
    ///
    /// After placement this is the container's total content height.
    #[must_use]
    pub fn tallest(&self) -> f64 {
        let mut max = 0.0_f64;
        for col in &self.columns {
            if col.height > max {
                max = col.height;
            }
        }
        max
    }
}

/// Derives the column lattice for a container of `container_width` pixels.
///
/// `sample_item_width` is the rendered width of the first item; the column
/// width is `min(sample_item_width, max_column_width) + gap`. The column
/// count is `floor(container_width / column_width)`, floored at 1 so a
/// zero-width container or item can never produce a division fault, and
/// clamped to `max_columns` when configured.
///
/// The caller guarantees a non-empty item list; with no items there is no
/// sample width and no layout pass at all.
#[must_use]
pub fn plan_columns(
    container_width: f64,
    sample_item_width: f64,
    config: &GridConfig,
) -> ColumnPlan {
    let column_width = sample_item_width.min(config.max_column_width) + config.gap;

    let raw = if column_width > 0.0 {
        libm::floor(container_width / column_width)
    } else {
        0.0
    };
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "raw is a non-negative floor result well below usize::MAX"
    )]
    let mut count = if raw >= 1.0 { raw as usize } else { 1 };
    if let Some(max) = config.max_columns {
        count = count.min(max.max(1));
    }

    let mut columns = Vec::with_capacity(count);
    for index in 0..count {
        columns.push(Column {
            index,
            height: 0.0,
            pending_gap: 0.0,
        });
    }

    // The trailing gap of the last column does not consume container space,
    // so it is handed back before centering.
    #[expect(
        clippy::cast_precision_loss,
        reason = "column counts are far below f64's integer range"
    )]
    let leftover = container_width - count as f64 * column_width + config.gap;
    let horizontal_offset = libm::floor(leftover / 2.0);

    ColumnPlan {
        columns,
        column_width,
        horizontal_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::new()
    }

    #[test]
    fn scenario_a_three_columns() {
        // container 964, item 280, gap 32 → column width 312, 3 columns.
        let plan = plan_columns(964.0, 280.0, &config());
        assert_eq!(plan.column_width, 312.0);
        assert_eq!(plan.column_count(), 3);
    }

    #[test]
    fn columns_start_empty_and_indexed() {
        let plan = plan_columns(964.0, 280.0, &config());
        for (i, col) in plan.columns.iter().enumerate() {
            assert_eq!(col.index, i);
            assert_eq!(col.height, 0.0);
            assert_eq!(col.pending_gap, 0.0);
        }
    }

    #[test]
    fn count_is_clamped_to_max_columns() {
        let mut cfg = config();
        cfg.max_columns = Some(2);
        let plan = plan_columns(964.0, 280.0, &cfg);
        assert_eq!(plan.column_count(), 2);
    }

    #[test]
    fn unbounded_when_max_columns_is_none() {
        let mut cfg = config();
        cfg.max_columns = None;
        let plan = plan_columns(3120.0, 280.0, &cfg);
        assert_eq!(plan.column_count(), 10);
    }

    #[test]
    fn zero_width_container_still_yields_one_column() {
        let plan = plan_columns(0.0, 280.0, &config());
        assert_eq!(plan.column_count(), 1);
    }

    #[test]
    fn zero_width_item_and_zero_gap_yield_one_column() {
        let mut cfg = config();
        cfg.gap = 0.0;
        let plan = plan_columns(964.0, 0.0, &cfg);
        assert_eq!(plan.column_count(), 1);
    }

    #[test]
    fn narrow_container_forces_one_column() {
        // Column width 312 does not fit in 100px; the count floors at 1 and
        // the offset goes negative to keep the lattice centered.
        let plan = plan_columns(100.0, 280.0, &config());
        assert_eq!(plan.column_count(), 1);
        assert_eq!(plan.horizontal_offset, -90.0);
    }

    #[test]
    fn item_width_is_capped_by_max_column_width() {
        // A 600px item still produces 280 + 32 = 312px columns.
        let plan = plan_columns(964.0, 600.0, &config());
        assert_eq!(plan.column_width, 312.0);
        assert_eq!(plan.column_count(), 3);
    }

    #[test]
    fn lattice_is_centered() {
        // 964 - 3*312 + 32 = 60 → offset 30; the offset plus columns plus
        // offset spans the container up to floor rounding of gap/2.
        let cfg = config();
        let plan = plan_columns(964.0, 280.0, &cfg);
        assert_eq!(plan.horizontal_offset, 30.0);
        #[expect(
            clippy::cast_precision_loss,
            reason = "small column count"
        )]
        let spanned =
            2.0 * plan.horizontal_offset + plan.column_count() as f64 * plan.column_width;
        assert!(
            (spanned - 964.0).abs() <= cfg.gap,
            "centered span {spanned} should be within one gap of the container width"
        );
    }

    #[test]
    fn max_columns_zero_is_treated_as_one() {
        // A zero cap would violate the count >= 1 invariant.
        let mut cfg = config();
        cfg.max_columns = Some(0);
        let plan = plan_columns(964.0, 280.0, &cfg);
        assert_eq!(plan.column_count(), 1);
    }
}
