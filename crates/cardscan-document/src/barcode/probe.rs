// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Checking that a candidate interval is a full-height bar.

use super::model::Interval;
use crate::raster::grid::PixelGrid;

/// Result of probing one interval below a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Every pixel of the interval is ink for the full bar height.
    Solid,
    /// A background pixel sits `rows_down - 1` rows below the probed row.
    /// Scanning can resume `rows_down` rows further on.
    GapAt { rows_down: u32 },
}

impl ProbeOutcome {
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// Probe the `interval.start..=interval.end` by `expected_height` rectangle
/// whose top edge is `row_y`.
///
/// Columns are walked left to right and each column top to bottom; the first
/// background pixel met decides the skip hint. Rows below the grid's bottom
/// edge count as background.
pub fn probe<G: PixelGrid>(
    interval: Interval,
    expected_height: u32,
    row_y: u32,
    grid: &G,
    background: G::Pixel,
) -> ProbeOutcome {
    let grid_height = grid.height();
    for x in interval.start..=interval.end {
        for dy in 0..expected_height {
            let y = row_y.saturating_add(dy);
            if y >= grid_height || grid.pixel_at(x, y) == background {
                return ProbeOutcome::GapAt { rows_down: dy + 1 };
            }
        }
    }
    ProbeOutcome::Solid
}
