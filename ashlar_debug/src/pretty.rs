// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! engine event to a [`Write`](std::io::Write) destination (default:
//! stderr).

use std::io::Write;

use ashlar_core::trace::{
    LayoutBeginEvent, LayoutEndEvent, LayoutSkipEvent, ReadyPollEvent, RelayoutRequestEvent,
    SetupEvent, SkipReason, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn skip_name(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NotAttached => "not-attached",
        SkipReason::NoItems => "no-items",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_ready_poll(&mut self, e: &ReadyPollEvent) {
        let _ = writeln!(
            self.writer,
            "[ready] attempt={} ready={}",
            e.attempts, e.ready,
        );
    }

    fn on_setup(&mut self, e: &SetupEvent) {
        let _ = writeln!(self.writer, "[setup] items={}", e.item_count);
    }

    fn on_relayout_request(&mut self, e: &RelayoutRequestEvent) {
        let _ = writeln!(
            self.writer,
            "[request] trigger={:?} deadline={}ms",
            e.trigger,
            e.deadline.millis(),
        );
    }

    fn on_layout_begin(&mut self, e: &LayoutBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[layout:begin] width={:.1} items={}",
            e.container_width, e.item_count,
        );
    }

    fn on_layout_end(&mut self, e: &LayoutEndEvent) {
        let _ = writeln!(
            self.writer,
            "[layout:end] cols={} height={:.1}",
            e.column_count, e.container_height,
        );
    }

    fn on_layout_skip(&mut self, e: &LayoutSkipEvent) {
        let _ = writeln!(self.writer, "[layout:skip] reason={}", skip_name(e.reason));
    }
}

#[cfg(test)]
mod tests {
    use ashlar_core::schedule::RelayoutTrigger;
    use ashlar_core::time::HostTime;

    use super::*;

    fn capture(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.writer).expect("trace lines are UTF-8")
    }

    #[test]
    fn events_print_one_line_each() {
        let out = capture(|sink| {
            sink.on_ready_poll(&ReadyPollEvent {
                attempts: 2,
                ready: true,
            });
            sink.on_setup(&SetupEvent { item_count: 12 });
            sink.on_relayout_request(&RelayoutRequestEvent {
                trigger: RelayoutTrigger::Resize,
                deadline: HostTime(350),
            });
            sink.on_layout_begin(&LayoutBeginEvent {
                container_width: 964.0,
                item_count: 12,
            });
            sink.on_layout_end(&LayoutEndEvent {
                column_count: 3,
                container_height: 1240.0,
            });
            sink.on_layout_skip(&LayoutSkipEvent {
                reason: SkipReason::NoItems,
            });
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "[ready] attempt=2 ready=true",
                "[setup] items=12",
                "[request] trigger=Resize deadline=350ms",
                "[layout:begin] width=964.0 items=12",
                "[layout:end] cols=3 height=1240.0",
                "[layout:skip] reason=no-items",
            ]
        );
    }
}
