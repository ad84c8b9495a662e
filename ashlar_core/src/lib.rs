// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-agnostic masonry layout engine.
//!
//! Ashlar arranges variable-height items into equal-width columns: every
//! item keeps its natural height, columns are derived from the container
//! width, and the lattice is centered horizontally. The engine is pure
//! state plus math; platform backends feed it geometry and apply its
//! solutions.
//!
//! # Control flow
//!
//! ```text
//!  host timer ──► Grid::tick ──► ReadinessProbe ──► setup (once)
//!                     │                                 │
//!  resize/scroll ──► Grid::notify ──► RelayoutScheduler │
//!                     │                    │            ▼
//!                     └────────────────────┴──► plan_columns + place_items
//!                                                       │
//!                                                       ▼
//!                                                  StyleApplier
//! ```
//!
//! Every layout pass recomputes from scratch: columns never persist between
//! passes, so there is no incremental state to invalidate.
//!
//! # Modules
//!
//! - [`config`] — [`GridConfig`](config::GridConfig) and the fill policy.
//! - [`backend`] — the [`GeometrySource`](backend::GeometrySource) /
//!   [`StyleApplier`](backend::StyleApplier) host contract.
//! - [`column`] — column lattice derivation.
//! - [`place`] — item placement and the layout solution.
//! - [`ready`] — rate-limited readiness probing.
//! - [`schedule`] — debounced relayout scheduling.
//! - [`grid`] — the [`Grid`](grid::Grid) engine tying it all together.
//! - [`time`] — millisecond host time and durations.
//! - [`trace`] — optional trace events (behind the `trace` feature).
//!
//! # Features
//!
//! - `std` — forwards to `kurbo/std`; the crate itself stays `no_std`.
//! - `trace` — enables [`Tracer`](trace::Tracer) dispatch; without it all
//!   tracing compiles away.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod column;
pub mod config;
pub mod grid;
pub mod place;
pub mod ready;
pub mod schedule;
pub mod time;
pub mod trace;
