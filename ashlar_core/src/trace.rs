// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the layout loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the grid calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use crate::schedule::RelayoutTrigger;
use crate::time::HostTime;

/// Why a layout pass was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The container is not attached to the visual tree.
    NotAttached,
    /// The item list is empty.
    NoItems,
}

/// Emitted when a readiness check runs.
#[derive(Clone, Copy, Debug)]
pub struct ReadyPollEvent {
    /// How many checks have run, including this one.
    pub attempts: u32,
    /// Whether the host reported ready.
    pub ready: bool,
}

/// Emitted after one-time setup has styled the container and items.
#[derive(Clone, Copy, Debug)]
pub struct SetupEvent {
    /// Number of items that received baseline styling.
    pub item_count: usize,
}

/// Emitted when a trigger (re-)arms the relayout deadline.
#[derive(Clone, Copy, Debug)]
pub struct RelayoutRequestEvent {
    /// The trigger that arrived.
    pub trigger: RelayoutTrigger,
    /// The deadline it armed.
    pub deadline: HostTime,
}

/// Emitted at the start of a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutBeginEvent {
    /// Container width sampled for this pass.
    pub container_width: f64,
    /// Number of items in this pass.
    pub item_count: usize,
}

/// Emitted at the end of a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEndEvent {
    /// Number of columns the pass used.
    pub column_count: usize,
    /// Final container height in pixels.
    pub container_height: f64,
}

/// Emitted when a layout pass was requested but skipped.
#[derive(Clone, Copy, Debug)]
pub struct LayoutSkipEvent {
    /// Why the pass did not run.
    pub reason: SkipReason,
}

/// Receives trace events from the layout loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a readiness check runs.
    fn on_ready_poll(&mut self, e: &ReadyPollEvent) {
        _ = e;
    }

    /// Called after one-time setup.
    fn on_setup(&mut self, e: &SetupEvent) {
        _ = e;
    }

    /// Called when a relayout trigger arms the deadline.
    fn on_relayout_request(&mut self, e: &RelayoutRequestEvent) {
        _ = e;
    }

    /// Called at the start of a layout pass.
    fn on_layout_begin(&mut self, e: &LayoutBeginEvent) {
        _ = e;
    }

    /// Called at the end of a layout pass.
    fn on_layout_end(&mut self, e: &LayoutEndEvent) {
        _ = e;
    }

    /// Called when a layout pass was skipped.
    fn on_layout_skip(&mut self, e: &LayoutSkipEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ReadyPollEvent`].
    #[inline]
    pub fn ready_poll(&mut self, e: &ReadyPollEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ready_poll(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SetupEvent`].
    #[inline]
    pub fn setup(&mut self, e: &SetupEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_setup(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RelayoutRequestEvent`].
    #[inline]
    pub fn relayout_request(&mut self, e: &RelayoutRequestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_relayout_request(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutBeginEvent`].
    #[inline]
    pub fn layout_begin(&mut self, e: &LayoutBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEndEvent`].
    #[inline]
    pub fn layout_end(&mut self, e: &LayoutEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutSkipEvent`].
    #[inline]
    pub fn layout_skip(&mut self, e: &LayoutSkipEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_skip(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
