// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! Ashlar splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Tick source** — Drives [`Grid::tick`] on a regular cadence via a
//!   platform timer (e.g. `setInterval` on the web, a frame callback on
//!   native hosts). This is backend-specific and not abstracted by a trait
//!   because timer setup and lifecycle differ fundamentally across
//!   platforms.
//!
//! - **Time** — A `now() -> HostTime` free function reading the platform's
//!   monotonic clock in milliseconds.
//!
//! - **Geometry source** — Implements [`GeometrySource`] to report the
//!   container's width and each item's rendered size, read fresh on demand.
//!
//! - **Style applier** — Implements [`StyleApplier`] to write computed
//!   positions and the container height to the platform's visual layer
//!   (e.g. CSS `left`/`top` px strings on DOM elements).
//!
//! - **Event subscriptions** — Forward window resize/scroll and item-set
//!   changes to [`Grid::notify`] as [`RelayoutTrigger`]s, through disposable
//!   handles tied to the grid's lifecycle.
//!
//! # Crate boundaries
//!
//! `ashlar_core` owns the layout math, readiness, scheduling, and this
//! contract module. Backend crates depend on `ashlar_core` and provide
//! platform glue. Application code depends on both and wires them together
//! in a tick loop.
//!
//! [`Grid::tick`]: crate::grid::Grid::tick
//! [`Grid::notify`]: crate::grid::Grid::notify
//! [`RelayoutTrigger`]: crate::schedule::RelayoutTrigger

use kurbo::{Point, Size};

/// Reads container and item geometry from the host's visual layer.
///
/// The engine calls these fresh on every pass; implementations must not
/// cache stale geometry across passes. Items are addressed by their index in
/// the host's ordered child list, which is also their stable identity.
pub trait GeometrySource {
    /// Returns whether the container element exists and is attached to the
    /// visual tree.
    fn container_attached(&self) -> bool;

    /// Returns the container's current width in pixels.
    fn container_width(&self) -> f64;

    /// Returns the number of items currently in the container.
    fn item_count(&self) -> usize;

    /// Returns the rendered size of the item at `index` in pixels.
    fn item_size(&self, index: usize) -> Size;
}

/// Applies computed layout to the host's visual layer.
///
/// Both DOM-based appliers and test doubles implement this trait, enabling
/// generic tick loops and recorded assertions.
///
/// # Tick loop pseudocode
///
/// A typical host timer callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_tick(now: HostTime) {
///     let report = grid.tick(now, &source, &mut applier, &mut tracer);
///     if report.became_ready {
///         // Attach resize/scroll subscriptions exactly once.
///         listeners = WindowEvents::new(|trigger| grid.notify(trigger, now()));
///     }
/// }
/// ```
pub trait StyleApplier {
    /// Marks the container as the positioning origin for absolutely placed
    /// items (CSS `position: relative` on the DOM).
    fn set_container_positioning(&mut self);

    /// Writes the container's computed height in pixels.
    fn set_container_height(&mut self, height: f64);

    /// Marks the item at `index` as absolutely positioned within the
    /// container.
    fn set_item_positioning(&mut self, index: usize);

    /// Writes the item's computed position: `origin.x` is the left offset,
    /// `origin.y` the top offset, both in pixels from the container origin.
    fn set_item_position(&mut self, index: usize, origin: Point);

    /// Writes the item's width cap in pixels.
    fn set_item_max_width(&mut self, index: usize, width: f64);

    /// Enables or disables a position transition on the item.
    fn set_item_transition(&mut self, index: usize, enabled: bool);
}
