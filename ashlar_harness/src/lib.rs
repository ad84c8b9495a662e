// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic test doubles and layout auditing for Ashlar.
//!
//! [`ScriptedSource`] and [`RecordingApplier`] implement the host contract
//! with plain in-memory state, and [`ManualClock`] stands in for the host
//! timer, so the whole engine loop runs in ordinary unit tests.
//! [`audit`] checks a [`LayoutSolution`] for structural violations that no
//! correct pass should produce.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use ashlar_core::backend::{GeometrySource, StyleApplier};
use ashlar_core::place::LayoutSolution;
use ashlar_core::time::{Duration, HostTime};
use kurbo::{Point, Size};

/// A [`GeometrySource`] whose readings are set by the test script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    attached: bool,
    width: f64,
    items: Vec<Size>,
}

impl ScriptedSource {
    /// Creates a detached source with no items, mimicking a host that has
    /// not rendered yet.
    #[must_use]
    pub const fn unrendered() -> Self {
        Self {
            attached: false,
            width: 0.0,
            items: Vec::new(),
        }
    }

    /// Creates an attached source with the given container width and item
    /// sizes.
    #[must_use]
    pub const fn rendered(width: f64, items: Vec<Size>) -> Self {
        Self {
            attached: true,
            width,
            items,
        }
    }

    /// Attaches or detaches the container.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Changes the container width, simulating a window resize.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Replaces the item list, simulating items being added or removed.
    pub fn set_items(&mut self, items: Vec<Size>) {
        self.items = items;
    }

    /// Appends one item.
    pub fn push_item(&mut self, size: Size) {
        self.items.push(size);
    }
}

impl GeometrySource for ScriptedSource {
    fn container_attached(&self) -> bool {
        self.attached
    }

    fn container_width(&self) -> f64 {
        self.width
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_size(&self, index: usize) -> Size {
        self.items[index]
    }
}

/// One recorded style write, in call order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOp {
    /// `set_container_positioning` was called.
    ContainerPositioning,
    /// `set_container_height` was called.
    ContainerHeight(f64),
    /// `set_item_positioning` was called for the item.
    ItemPositioning(usize),
    /// `set_item_position` was called for the item.
    ItemPosition(usize, Point),
    /// `set_item_max_width` was called for the item.
    ItemMaxWidth(usize, f64),
    /// `set_item_transition` was called for the item.
    ItemTransition(usize, bool),
}

/// A [`StyleApplier`] that records every write.
///
/// The full call sequence is kept in [`ops`](Self::ops) for ordering
/// assertions; the latest value per item is also indexed for point queries.
#[derive(Clone, Debug, Default)]
pub struct RecordingApplier {
    /// Every style write, in call order.
    pub ops: Vec<StyleOp>,
    positions: BTreeMap<usize, Point>,
    max_widths: BTreeMap<usize, f64>,
    transitions: BTreeMap<usize, bool>,
    container_height: Option<f64>,
    container_positioned: u32,
}

impl RecordingApplier {
    /// Creates an applier with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last position written for the item, if any.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(&index).copied()
    }

    /// Returns the last max-width written for the item, if any.
    #[must_use]
    pub fn max_width(&self, index: usize) -> Option<f64> {
        self.max_widths.get(&index).copied()
    }

    /// Returns the last transition flag written for the item, if any.
    #[must_use]
    pub fn transition(&self, index: usize) -> Option<bool> {
        self.transitions.get(&index).copied()
    }

    /// Returns the last container height written, if any.
    #[must_use]
    pub const fn container_height(&self) -> Option<f64> {
        self.container_height
    }

    /// Returns how many times the container positioning was written.
    #[must_use]
    pub const fn container_positioned(&self) -> u32 {
        self.container_positioned
    }

    /// Returns how many distinct items have a recorded position.
    #[must_use]
    pub fn positioned_item_count(&self) -> usize {
        self.positions.len()
    }
}

impl StyleApplier for RecordingApplier {
    fn set_container_positioning(&mut self) {
        self.container_positioned += 1;
        self.ops.push(StyleOp::ContainerPositioning);
    }

    fn set_container_height(&mut self, height: f64) {
        self.container_height = Some(height);
        self.ops.push(StyleOp::ContainerHeight(height));
    }

    fn set_item_positioning(&mut self, index: usize) {
        self.ops.push(StyleOp::ItemPositioning(index));
    }

    fn set_item_position(&mut self, index: usize, origin: Point) {
        self.positions.insert(index, origin);
        self.ops.push(StyleOp::ItemPosition(index, origin));
    }

    fn set_item_max_width(&mut self, index: usize, width: f64) {
        self.max_widths.insert(index, width);
        self.ops.push(StyleOp::ItemMaxWidth(index, width));
    }

    fn set_item_transition(&mut self, index: usize, enabled: bool) {
        self.transitions.insert(index, enabled);
        self.ops.push(StyleOp::ItemTransition(index, enabled));
    }
}

/// A clock advanced explicitly by the test script.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now: HostTime,
}

impl ManualClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now: HostTime(0) }
    }

    /// Returns the current time.
    #[must_use]
    pub const fn now(&self) -> HostTime {
        self.now
    }

    /// Advances the clock and returns the new time.
    pub fn advance(&mut self, by: Duration) -> HostTime {
        self.now = self.now.saturating_add(by);
        self.now
    }
}

/// A structural violation found by [`audit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// The solution does not contain one placement per item.
    PlacementCountMismatch {
        /// Number of placements in the solution.
        placements: usize,
        /// Number of items audited against.
        items: usize,
    },
    /// Two items in the same column overlap vertically.
    VerticalOverlap {
        /// Item index of the upper item.
        upper: usize,
        /// Item index of the lower item.
        lower: usize,
        /// The shared column.
        column: usize,
    },
    /// An item's bottom edge extends past the reported container height.
    ExceedsContainerHeight {
        /// The offending item.
        index: usize,
        /// The item's bottom edge in pixels.
        bottom: f64,
    },
    /// Two items in the same column are closer than the configured gap.
    GapViolation {
        /// Item index of the upper item.
        upper: usize,
        /// Item index of the lower item.
        lower: usize,
        /// Measured vertical spacing in pixels.
        spacing: f64,
    },
}

/// The outcome of auditing one solution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuditReport {
    /// All violations found, in detection order.
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// Returns whether the solution passed every check.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks a solution against the item sizes it was computed from.
///
/// Verifies one placement per item, no vertical overlap within a column, at
/// least `gap` pixels between stacked items, and no item extending below the
/// reported container height.
#[must_use]
pub fn audit(solution: &LayoutSolution, items: &[Size], gap: f64) -> AuditReport {
    let mut report = AuditReport::default();

    if solution.placements.len() != items.len() {
        report.violations.push(Violation::PlacementCountMismatch {
            placements: solution.placements.len(),
            items: items.len(),
        });
        return report;
    }

    for (i, a) in solution.placements.iter().enumerate() {
        let bottom = a.origin.y + items[i].height;
        if bottom > solution.container_height {
            report
                .violations
                .push(Violation::ExceedsContainerHeight { index: i, bottom });
        }

        for (j, b) in solution.placements.iter().enumerate().skip(i + 1) {
            if a.column != b.column {
                continue;
            }
            // Placement preserves item order within a column, so the later
            // index is the lower item.
            let spacing = b.origin.y - bottom;
            if spacing < 0.0 {
                report.violations.push(Violation::VerticalOverlap {
                    upper: i,
                    lower: j,
                    column: a.column,
                });
            } else if spacing < gap {
                report.violations.push(Violation::GapViolation {
                    upper: i,
                    lower: j,
                    spacing,
                });
            }
        }
    }
    report
}
