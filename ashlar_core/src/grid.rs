// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid engine.
//!
//! [`Grid`] ties the pure pieces together: a [`ReadinessProbe`] that waits
//! for the host to render the container and items, a one-time setup that
//! writes baseline styles, a [`RelayoutScheduler`] that debounces
//! geometry-invalidating events, and the layout pass itself
//! ([`plan_columns`] + [`place_items`]) whose solution is written out through
//! a [`StyleApplier`].
//!
//! The engine is driven entirely by the host: a backend timer calls
//! [`Grid::tick`] on a regular cadence, and event subscriptions call
//! [`Grid::notify`]. The grid holds no timers, callbacks, or platform
//! handles of its own, which keeps it `no_std` and directly testable with
//! fake geometry.

use alloc::vec::Vec;

use kurbo::Size;

use crate::backend::{GeometrySource, StyleApplier};
use crate::column::plan_columns;
use crate::config::GridConfig;
use crate::place::place_items;
use crate::ready::{ReadinessProbe, ReadyPoll};
use crate::schedule::{RelayoutScheduler, RelayoutTrigger};
use crate::time::HostTime;
use crate::trace::{
    LayoutBeginEvent, LayoutEndEvent, LayoutSkipEvent, ReadyPollEvent, RelayoutRequestEvent,
    SetupEvent, SkipReason, Tracer,
};

/// What one completed layout pass produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSummary {
    /// Number of columns the pass used.
    pub column_count: usize,
    /// Number of items placed.
    pub item_count: usize,
    /// Final container height in pixels.
    pub container_height: f64,
}

/// What happened during one [`Grid::tick`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// The grid became ready on this tick: setup ran and the first layout
    /// pass was attempted. Reported exactly once per grid.
    pub became_ready: bool,
    /// The readiness probe exhausted its attempt budget on this tick. The
    /// grid will never lay out.
    pub gave_up: bool,
    /// A layout pass completed on this tick.
    pub laid_out: Option<LayoutSummary>,
}

/// A masonry grid engine for one container.
///
/// See the [crate docs](crate) for the overall control flow.
#[derive(Debug)]
pub struct Grid {
    config: GridConfig,
    probe: ReadinessProbe,
    scheduler: RelayoutScheduler,
    started: bool,
}

impl Grid {
    /// Creates an engine with the given configuration. No host interaction
    /// happens until the first [`tick`](Self::tick).
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config,
            probe: ReadinessProbe::new(config.poll_interval, config.max_poll_attempts),
            scheduler: RelayoutScheduler::new(config.debounce_interval),
            started: false,
        }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns whether setup has run and the grid is laying out.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// Records a geometry-invalidating event.
    ///
    /// Ignored until the grid has started; events arriving before the first
    /// layout are covered by the initial pass anyway.
    pub fn notify(&mut self, trigger: RelayoutTrigger, now: HostTime, tracer: &mut Tracer<'_>) {
        if !self.started {
            return;
        }
        self.scheduler.request(trigger, now);
        if let Some(deadline) = self.scheduler.deadline() {
            tracer.relayout_request(&RelayoutRequestEvent { trigger, deadline });
        }
    }

    /// Advances the engine by one host tick.
    ///
    /// Before the grid starts, this drives the readiness probe; once ready it
    /// performs setup and the initial layout pass. Afterwards it fires any
    /// due debounced relayout. The caller samples `now` from the host clock.
    pub fn tick<G, S>(
        &mut self,
        now: HostTime,
        source: &G,
        applier: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> TickReport
    where
        G: GeometrySource,
        S: StyleApplier,
    {
        let mut report = TickReport::default();

        if !self.started {
            let ready = source.container_attached() && source.item_count() > 0;
            match self.probe.poll(now, ready) {
                ReadyPoll::NotDue => {}
                ReadyPoll::StillWaiting => {
                    tracer.ready_poll(&ReadyPollEvent {
                        attempts: self.probe.attempts(),
                        ready: false,
                    });
                }
                ReadyPoll::GaveUp => {
                    tracer.ready_poll(&ReadyPollEvent {
                        attempts: self.probe.attempts(),
                        ready: false,
                    });
                    report.gave_up = true;
                }
                ReadyPoll::Ready => {
                    tracer.ready_poll(&ReadyPollEvent {
                        attempts: self.probe.attempts(),
                        ready: true,
                    });
                    self.started = true;
                    self.setup(source, applier, tracer);
                    report.became_ready = true;
                    report.laid_out = self.reflow(source, applier, tracer);
                }
            }
            return report;
        }

        if self.scheduler.poll(now).is_some() {
            report.laid_out = self.reflow(source, applier, tracer);
        }
        report
    }

    /// One-time baseline styling: the container becomes the positioning
    /// origin. Per-item styles are written by every pass instead, so items
    /// added after setup are covered automatically.
    fn setup<G, S>(&self, source: &G, applier: &mut S, tracer: &mut Tracer<'_>)
    where
        G: GeometrySource,
        S: StyleApplier,
    {
        applier.set_container_positioning();
        tracer.setup(&SetupEvent {
            item_count: source.item_count(),
        });
    }

    /// Runs a full layout pass and writes the solution out.
    ///
    /// Every pass recomputes from scratch: fresh geometry, fresh columns,
    /// fresh placements. Returns `None` (and traces the reason) when the
    /// container is detached or empty; previously applied styles are left
    /// untouched in that case.
    ///
    /// [`tick`](Self::tick) calls this when a scheduled relayout is due;
    /// hosts can also call it directly to force an immediate recompute.
    pub fn reflow<G, S>(
        &self,
        source: &G,
        applier: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<LayoutSummary>
    where
        G: GeometrySource,
        S: StyleApplier,
    {
        if !source.container_attached() {
            tracer.layout_skip(&LayoutSkipEvent {
                reason: SkipReason::NotAttached,
            });
            return None;
        }
        let item_count = source.item_count();
        if item_count == 0 {
            tracer.layout_skip(&LayoutSkipEvent {
                reason: SkipReason::NoItems,
            });
            return None;
        }

        let container_width = source.container_width();
        tracer.layout_begin(&LayoutBeginEvent {
            container_width,
            item_count,
        });

        // Snapshot all sizes up front so the pass works from one consistent
        // reading even if the host mutates mid-pass.
        let sizes: Vec<Size> = (0..item_count).map(|i| source.item_size(i)).collect();

        let mut plan = plan_columns(container_width, sizes[0].width, &self.config);
        let solution = place_items(&mut plan, &sizes, self.config.fill, self.config.gap);

        for (index, placement) in solution.placements.iter().enumerate() {
            applier.set_item_positioning(index);
            applier.set_item_max_width(index, self.config.max_column_width);
            applier.set_item_transition(index, self.config.animate);
            applier.set_item_position(index, placement.origin);
        }
        applier.set_container_height(solution.container_height);

        let summary = LayoutSummary {
            column_count: plan.column_count(),
            item_count,
            container_height: solution.container_height,
        };
        tracer.layout_end(&LayoutEndEvent {
            column_count: summary.column_count,
            container_height: summary.container_height,
        });
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::*;
    use crate::config::FillPolicy;

    struct FakeSource {
        attached: bool,
        width: f64,
        items: Vec<Size>,
    }

    impl FakeSource {
        fn new(width: f64, heights: &[f64]) -> Self {
            Self {
                attached: true,
                width,
                items: heights.iter().map(|&h| Size::new(280.0, h)).collect(),
            }
        }

        fn detached() -> Self {
            Self {
                attached: false,
                width: 0.0,
                items: Vec::new(),
            }
        }
    }

    impl GeometrySource for FakeSource {
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

    #[derive(Default)]
    struct RecordingApplier {
        container_positioned: u32,
        container_height: Option<f64>,
        positioned_items: Vec<usize>,
        positions: Vec<(usize, Point)>,
        max_widths: Vec<(usize, f64)>,
        transitions: Vec<(usize, bool)>,
    }

    impl StyleApplier for RecordingApplier {
        fn set_container_positioning(&mut self) {
            self.container_positioned += 1;
        }

        fn set_container_height(&mut self, height: f64) {
            self.container_height = Some(height);
        }

        fn set_item_positioning(&mut self, index: usize) {
            self.positioned_items.push(index);
        }

        fn set_item_position(&mut self, index: usize, origin: Point) {
            self.positions.push((index, origin));
        }

        fn set_item_max_width(&mut self, index: usize, width: f64) {
            self.max_widths.push((index, width));
        }

        fn set_item_transition(&mut self, index: usize, enabled: bool) {
            self.transitions.push((index, enabled));
        }
    }

    fn grid() -> Grid {
        Grid::new(GridConfig::new())
    }

    #[test]
    fn waits_until_the_host_is_ready() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();

        let empty = FakeSource::detached();
        let report = grid.tick(HostTime(0), &empty, &mut applier, &mut tracer);
        assert!(!report.became_ready);
        assert!(!grid.started());

        // Host renders between ticks; the next due poll starts the grid.
        let rendered = FakeSource::new(964.0, &[100.0, 50.0, 80.0]);
        let report = grid.tick(HostTime(100), &rendered, &mut applier, &mut tracer);
        assert!(report.became_ready);
        assert!(grid.started());
        let summary = report.laid_out.expect("initial layout runs on readiness");
        assert_eq!(summary.column_count, 3);
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn becomes_ready_exactly_once() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0]);

        let first = grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        assert!(first.became_ready);
        let second = grid.tick(HostTime(200), &source, &mut applier, &mut tracer);
        assert!(!second.became_ready);
        assert_eq!(applier.container_positioned, 1, "setup must not repeat");
    }

    #[test]
    fn setup_styles_container_and_items() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0, 50.0]);

        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        assert_eq!(applier.container_positioned, 1);
        assert_eq!(applier.positioned_items, vec![0, 1]);
        assert_eq!(applier.max_widths, vec![(0, 280.0), (1, 280.0)]);
        assert_eq!(applier.transitions, vec![(0, true), (1, true)]);
    }

    #[test]
    fn initial_layout_writes_positions_and_height() {
        let mut cfg = GridConfig::new();
        cfg.max_columns = Some(1);
        cfg.gap = 10.0;
        let mut grid = Grid::new(cfg);
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0, 50.0, 80.0]);

        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        let tops: Vec<f64> = applier.positions.iter().map(|&(_, p)| p.y).collect();
        assert_eq!(tops, vec![0.0, 110.0, 170.0]);
        assert_eq!(applier.container_height, Some(250.0));
    }

    #[test]
    fn resize_relayout_is_debounced() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0, 50.0, 80.0]);
        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);

        grid.notify(RelayoutTrigger::Resize, HostTime(200), &mut tracer);
        grid.notify(RelayoutTrigger::Resize, HostTime(250), &mut tracer);

        // Narrower container after the resize.
        let narrow = FakeSource::new(640.0, &[100.0, 50.0, 80.0]);
        let mid = grid.tick(HostTime(300), &narrow, &mut applier, &mut tracer);
        assert_eq!(mid.laid_out, None, "still inside the quiet period");

        let report = grid.tick(HostTime(350), &narrow, &mut applier, &mut tracer);
        let summary = report.laid_out.expect("debounce elapsed");
        assert_eq!(summary.column_count, 2);
    }

    #[test]
    fn items_changed_relays_out_on_the_next_tick() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0]);
        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);

        let grown = FakeSource::new(964.0, &[100.0, 60.0]);
        grid.notify(RelayoutTrigger::ItemsChanged, HostTime(40), &mut tracer);
        let report = grid.tick(HostTime(40), &grown, &mut applier, &mut tracer);
        let summary = report.laid_out.expect("item-set change skips the debounce");
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn triggers_before_start_are_ignored() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        grid.notify(RelayoutTrigger::Resize, HostTime(0), &mut tracer);

        let source = FakeSource::new(964.0, &[100.0]);
        let report = grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        assert!(report.became_ready);
        // Nothing pending from the pre-start notify.
        let later = grid.tick(HostTime(200), &source, &mut applier, &mut tracer);
        assert_eq!(later.laid_out, None);
    }

    #[test]
    fn gives_up_when_the_attempt_budget_runs_out() {
        let mut cfg = GridConfig::new();
        cfg.max_poll_attempts = Some(2);
        let mut grid = Grid::new(cfg);
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::detached();

        let first = grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        assert!(!first.gave_up);
        let second = grid.tick(HostTime(100), &source, &mut applier, &mut tracer);
        assert!(second.gave_up);
        assert!(!grid.started());

        // Permanently quiet afterwards, even if the host renders late.
        let rendered = FakeSource::new(964.0, &[100.0]);
        let late = grid.tick(HostTime(500), &rendered, &mut applier, &mut tracer);
        assert_eq!(late, TickReport::default());
    }

    #[test]
    fn relayout_on_emptied_container_leaves_styles_untouched() {
        let mut grid = grid();
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0, 50.0]);
        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        let height_before = applier.container_height;

        let emptied = FakeSource::new(964.0, &[]);
        grid.notify(RelayoutTrigger::ItemsChanged, HostTime(50), &mut tracer);
        let report = grid.tick(HostTime(50), &emptied, &mut applier, &mut tracer);
        assert_eq!(report.laid_out, None);
        assert_eq!(applier.container_height, height_before);
    }

    #[test]
    fn repeated_reflow_is_idempotent() {
        let mut grid = grid();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(964.0, &[100.0, 50.0, 80.0, 120.0]);

        let mut first = RecordingApplier::default();
        let mut second = RecordingApplier::default();
        grid.reflow(&source, &mut first, &mut tracer)
            .expect("pass runs");
        grid.reflow(&source, &mut second, &mut tracer)
            .expect("pass runs");
        assert_eq!(first.positions, second.positions);
        assert_eq!(first.container_height, second.container_height);
    }

    #[test]
    fn shortest_column_fill_is_honored() {
        let mut cfg = GridConfig::new();
        cfg.fill = FillPolicy::ShortestColumn;
        cfg.gap = 10.0;
        cfg.max_columns = Some(2);
        let mut grid = Grid::new(cfg);
        let mut applier = RecordingApplier::default();
        let mut tracer = Tracer::none();
        let source = FakeSource::new(624.0, &[50.0, 20.0, 10.0]);

        grid.tick(HostTime(0), &source, &mut applier, &mut tracer);
        assert_eq!(applier.container_height, Some(50.0));
        let tops: Vec<f64> = applier.positions.iter().map(|&(_, p)| p.y).collect();
        assert_eq!(tops, vec![0.0, 0.0, 30.0]);
    }
}
