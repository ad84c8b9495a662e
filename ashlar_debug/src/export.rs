// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of layout solutions.
//!
//! Produces a stable, self-describing document for external tooling (layout
//! diffing, visual regression dashboards). Positions are emitted per item
//! alongside the size the pass read, so a consumer can reconstruct the full
//! geometry without access to the host.

use ashlar_core::place::LayoutSolution;
use kurbo::Size;
use serde_json::{Value, json};

/// Converts a solution and the item sizes it was computed from into a JSON
/// value.
#[must_use]
pub fn solution_to_json(solution: &LayoutSolution, items: &[Size]) -> Value {
    let placements: Vec<Value> = solution
        .placements
        .iter()
        .zip(items)
        .enumerate()
        .map(|(index, (placement, size))| {
            json!({
                "index": index,
                "column": placement.column,
                "left": placement.origin.x,
                "top": placement.origin.y,
                "width": size.width,
                "height": size.height,
            })
        })
        .collect();

    json!({
        "container_height": solution.container_height,
        "items": placements,
    })
}

/// Serializes a solution as pretty-printed JSON.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_json<W: std::io::Write>(
    writer: W,
    solution: &LayoutSolution,
    items: &[Size],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &solution_to_json(solution, items))
}
