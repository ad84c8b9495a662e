// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item placement.
//!
//! Walks the item list in order, assigns each item to a column according to
//! the configured [`FillPolicy`], and accumulates column heights. Placement
//! is pure: it reads a [`ColumnPlan`] and item sizes and produces a
//! [`LayoutSolution`] without touching the visual layer. Applying the
//! solution is the style applier's job.
//!
//! The per-column update rule after placing an item is:
//!
//! ```text
//! top     = column.height + column.pending_gap
//! height += column.pending_gap + item.height
//! pending_gap = gap
//! ```
//!
//! so the first item in a column sits at its top and every later item gets
//! exactly one gap above it.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::column::{Column, ColumnPlan};
use crate::config::FillPolicy;

/// Where one item landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the column the item was assigned to.
    pub column: usize,
    /// Top-left corner of the item in pixels, relative to the container
    /// origin.
    pub origin: Point,
}

/// The result of placing every item for one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSolution {
    /// One placement per item, in item-list order.
    pub placements: Vec<Placement>,
    /// Final container height in pixels: the height of the tallest column.
    pub container_height: f64,
}

/// Places `items` into the columns of `plan`, mutating the plan's column
/// heights as it goes.
///
/// Items are processed strictly in list order, so the result is
/// deterministic for a fixed input list and configuration. Horizontal
/// positions depend only on the column index, column width, and centering
/// offset — never on item heights.
#[must_use]
pub fn place_items(
    plan: &mut ColumnPlan,
    items: &[Size],
    fill: FillPolicy,
    gap: f64,
) -> LayoutSolution {
    let mut placements = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let chosen = match fill {
            FillPolicy::RoundRobin => i % plan.columns.len(),
            FillPolicy::ShortestColumn => shortest_column(&plan.columns),
        };
        let col = &mut plan.columns[chosen];

        #[expect(
            clippy::cast_precision_loss,
            reason = "column indices are far below f64's integer range"
        )]
        let left = col.index as f64 * plan.column_width + plan.horizontal_offset;
        let top = col.height + col.pending_gap;

        col.height += col.pending_gap + item.height;
        col.pending_gap = gap;

        placements.push(Placement {
            column: chosen,
            origin: Point::new(left, top),
        });
    }

    LayoutSolution {
        placements,
        container_height: plan.tallest(),
    }
}

/// Returns the index of the column with the smallest height, preferring the
/// lowest index on ties (strict `<` during a left-to-right scan).
fn shortest_column(columns: &[Column]) -> usize {
    let mut min = 0;
    for col in columns {
        if col.height < columns[min].height {
            min = col.index;
        }
    }
    min
}
