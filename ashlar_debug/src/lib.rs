// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for Ashlar layouts.
//!
//! - [`pretty`] — a [`TraceSink`](ashlar_core::trace::TraceSink) that writes
//!   one human-readable line per engine event.
//! - [`render`] — ASCII rendering of a [`LayoutSolution`]
//!   for eyeballing column balance in a terminal.
//! - [`export`] — JSON export of solutions for external tooling.
//!
//! [`LayoutSolution`]: ashlar_core::place::LayoutSolution

pub mod export;
pub mod pretty;
pub mod render;
