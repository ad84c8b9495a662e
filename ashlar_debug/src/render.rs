// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII rendering of layout solutions.
//!
//! Draws each column as a fixed-width lane and each item as a block of `#`
//! rows scaled down from pixels, with the item's index in its top row.
//! Useful for eyeballing column balance in a terminal without a browser.

use ashlar_core::place::LayoutSolution;
use kurbo::Size;

/// Renders `solution` as ASCII art, `px_per_row` pixels per text row.
///
/// Lanes are ordered by column index and separated by a single space; the
/// trailing line reports the container height. Items shorter than one row
/// still get one row so nothing disappears.
#[must_use]
pub fn render_ascii(solution: &LayoutSolution, items: &[Size], px_per_row: f64) -> String {
    const LANE_WIDTH: usize = 7;

    let columns = solution
        .placements
        .iter()
        .map(|p| p.column)
        .max()
        .map_or(0, |max| max + 1);
    if columns == 0 || px_per_row <= 0.0 {
        return String::from("(empty)\n");
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "row counts are small non-negative ceil results"
    )]
    let rows = (solution.container_height / px_per_row).ceil().max(1.0) as usize;
    let mut canvas = vec![vec![' '; columns * (LANE_WIDTH + 1)]; rows];

    for (index, placement) in solution.placements.iter().enumerate() {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "tops are non-negative and far below usize::MAX"
        )]
        let first = (placement.origin.y / px_per_row).floor() as usize;
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "row spans are small non-negative ceil results"
        )]
        let span = (items[index].height / px_per_row).ceil().max(1.0) as usize;
        let lane = placement.column * (LANE_WIDTH + 1);

        for (i, row) in canvas
            .iter_mut()
            .enumerate()
            .skip(first)
            .take(span.min(rows.saturating_sub(first)))
        {
            let cells = &mut row[lane..lane + LANE_WIDTH];
            if i == first {
                let label = format!("#{index}");
                for (cell, ch) in cells.iter_mut().zip(label.chars().chain("######".chars())) {
                    *cell = ch;
                }
            } else {
                cells.fill('#');
            }
        }
    }

    let mut out = String::new();
    for row in &canvas {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!("height: {:.0}px\n", solution.container_height));
    out
}
