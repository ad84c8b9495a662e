// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration.
//!
//! [`GridConfig`] is immutable per grid instance: it is set once at
//! construction and never mutated by the engine. Out-of-range values (e.g. a
//! negative gap) are not validated; the arithmetic produces whatever it
//! produces, and the caller owns the consequences.

use crate::time::Duration;

/// How items are assigned to columns during placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillPolicy {
    /// Item at list index `i` goes to column `i mod column_count`.
    ///
    /// Deterministic and O(1) per item, but ignores current column heights,
    /// so columns can end up uneven.
    #[default]
    RoundRobin,
    /// Each item goes to the column with the smallest current height, ties
    /// broken by lowest column index.
    ///
    /// Produces more balanced columns at O(columns) per item.
    ShortestColumn,
}

/// Configuration for a [`Grid`](crate::grid::Grid).
///
/// All pixel values are CSS pixels as reported by the host's geometry
/// source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Spacing in pixels, applied both between columns and between stacked
    /// items within a column.
    pub gap: f64,
    /// Upper bound on the column count. `None` means unbounded.
    pub max_columns: Option<usize>,
    /// Width cap applied to each item when computing the column width, and
    /// written to items as a `max-width` style.
    ///
    /// A cap smaller than an item's natural width affects column math only;
    /// the engine does not shrink the rendered item.
    pub max_column_width: f64,
    /// Whether position changes are visually transitioned.
    pub animate: bool,
    /// Column selection policy.
    pub fill: FillPolicy,
    /// How often the readiness probe checks for the container and items.
    pub poll_interval: Duration,
    /// Maximum number of readiness polls before giving up. `None` polls
    /// forever.
    pub max_poll_attempts: Option<u32>,
    /// Quiet period for collapsing resize/scroll bursts into a single
    /// relayout.
    pub debounce_interval: Duration,
}

impl GridConfig {
    /// The default configuration: 32px gap, at most 5 columns of up to
    /// 280px, animated, round-robin fill, 100ms poll and debounce intervals,
    /// unbounded polling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gap: 32.0,
            max_columns: Some(5),
            max_column_width: 280.0,
            animate: true,
            fill: FillPolicy::RoundRobin,
            poll_interval: Duration::from_millis(100),
            max_poll_attempts: None,
            debounce_interval: Duration::from_millis(100),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
