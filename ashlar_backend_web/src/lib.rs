// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for Ashlar.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomGeometrySource`] / [`DomStyleApplier`]: the host contract over a
//!   container `HtmlElement` and its children
//! - [`IntervalTicker`]: `setInterval` tick source driving
//!   [`Grid::tick`](ashlar_core::grid::Grid::tick)
//! - [`WindowEvents`]: window `resize`/`scroll` subscriptions feeding
//!   [`Grid::notify`](ashlar_core::grid::Grid::notify)
//! - [`now`]: `performance.now()` as millisecond [`HostTime`]

#![no_std]

extern crate alloc;

mod dom;
mod events;

pub use dom::{DomGeometrySource, DomStyleApplier};
pub use events::{IntervalTicker, WindowEvents};

use ashlar_core::time::HostTime;

/// Returns the current host time from `performance.now()`, truncated to
/// whole milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = events::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns a small positive f64; ms fits in u64"
    )]
    HostTime(ms as u64)
}
