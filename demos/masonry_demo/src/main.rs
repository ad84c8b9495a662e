// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated grid lifecycle that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a [`Grid`] with a manual clock and scripted geometry through the
//! full lifecycle — readiness polling, setup, the initial layout, a
//! debounced resize burst, and an item-set change — printing a trace line
//! per event, then renders the final layout as ASCII and JSON and audits it
//! for structural violations.

use ashlar_core::column::plan_columns;
use ashlar_core::config::{FillPolicy, GridConfig};
use ashlar_core::grid::Grid;
use ashlar_core::place::place_items;
use ashlar_core::schedule::RelayoutTrigger;
use ashlar_core::time::Duration;
use ashlar_core::trace::Tracer;
use kurbo::Size;

use ashlar_debug::export::write_json;
use ashlar_debug::pretty::PrettyPrintSink;
use ashlar_debug::render::render_ascii;
use ashlar_harness::{ManualClock, RecordingApplier, ScriptedSource, audit};

const TICK: Duration = Duration::from_millis(50);
const CARD: f64 = 280.0;

fn main() {
    let mut config = GridConfig::new();
    config.fill = FillPolicy::ShortestColumn;
    let mut grid = Grid::new(config);

    let mut source = ScriptedSource::unrendered();
    let mut applier = RecordingApplier::new();
    let mut clock = ManualClock::new();

    let mut sink = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut tracer = Tracer::new(&mut sink);

    // -- readiness ---------------------------------------------------------
    // The host renders 250ms in; the probe finds the grid on its next due
    // poll.
    println!("== waiting for the host ==");
    for _ in 0..10 {
        let now = clock.now();
        if now.millis() == 250 {
            source.set_attached(true);
            source.set_width(964.0);
            source.set_items(heights(&[140.0, 90.0, 210.0, 60.0, 120.0, 180.0]));
        }
        let report = grid.tick(now, &source, &mut applier, &mut tracer);
        if report.became_ready {
            println!("ready at {}ms", now.millis());
        }
        clock.advance(TICK);
    }
    assert!(grid.started(), "grid should have started by 500ms");

    // -- resize burst ------------------------------------------------------
    // Three resizes inside 100ms collapse into one relayout.
    println!("== resize burst ==");
    source.set_width(640.0);
    for _ in 0..3 {
        grid.notify(RelayoutTrigger::Resize, clock.now(), &mut tracer);
        clock.advance(TICK);
    }
    run_until_layout(&mut grid, &mut clock, &source, &mut applier, &mut tracer);

    // -- item-set change ---------------------------------------------------
    // A new card relays out on the next tick, no debounce.
    println!("== item added ==");
    source.push_item(Size::new(CARD, 75.0));
    grid.notify(RelayoutTrigger::ItemsChanged, clock.now(), &mut tracer);
    run_until_layout(&mut grid, &mut clock, &source, &mut applier, &mut tracer);
    drop(tracer);

    // -- diagnostics -------------------------------------------------------
    // Recompute the final solution through the pure API for rendering.
    let items = heights(&[140.0, 90.0, 210.0, 60.0, 120.0, 180.0, 75.0]);
    let mut plan = plan_columns(640.0, CARD, &config);
    let solution = place_items(&mut plan, &items, config.fill, config.gap);

    println!("== final layout ==");
    print!("{}", render_ascii(&solution, &items, 40.0));

    let report = audit(&solution, &items, config.gap);
    assert!(report.is_clean(), "layout has violations: {report:?}");
    println!("audit: clean");

    println!("== json export ==");
    let stdout = std::io::stdout();
    write_json(stdout.lock(), &solution, &items).expect("stdout write failed");
    println!();
}

fn heights(values: &[f64]) -> Vec<Size> {
    values.iter().map(|&h| Size::new(CARD, h)).collect()
}

fn run_until_layout(
    grid: &mut Grid,
    clock: &mut ManualClock,
    source: &ScriptedSource,
    applier: &mut RecordingApplier,
    tracer: &mut Tracer<'_>,
) {
    for _ in 0..10 {
        let report = grid.tick(clock.now(), source, applier, tracer);
        clock.advance(TICK);
        if let Some(summary) = report.laid_out {
            println!(
                "laid out: {} items in {} columns, height {:.0}px",
                summary.item_count, summary.column_count, summary.container_height,
            );
            return;
        }
    }
    panic!("no layout within 500ms");
}
