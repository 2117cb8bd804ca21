// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barcode geometry: intervals of ink on a row and the located barcode.

use serde::Serialize;

/// Inclusive `[start, end]` x-range of one run of dark pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "interval start {start} past end {end}");
        Self { start, end }
    }

    /// `end - start`, the measure bar validation uses.
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Shift the interval left so that `origin` becomes 0.
    pub fn rebased(&self, origin: u32) -> Self {
        Self::new(self.start - origin, self.end - origin)
    }
}

/// A located barcode.
///
/// `bars` are relative to the barcode's own leftmost pixel, so the first bar
/// always starts at 0. Nothing here points back into the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarCode {
    height: u32,
    width: u32,
    bars: Vec<Interval>,
}

impl BarCode {
    pub(crate) fn new(height: u32, width: u32, bars: Vec<Interval>) -> Self {
        Self { height, width, bars }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn bars(&self) -> &[Interval] {
        &self.bars
    }

    /// Geometric acceptance: exactly `expected_bar_count` bars, none narrower
    /// than `min_bar_width`. Says nothing about what the bars encode.
    pub fn is_valid(&self, min_bar_width: u32, expected_bar_count: usize) -> bool {
        self.bars.len() == expected_bar_count
            && self.bars.iter().all(|bar| bar.width() >= min_bar_width)
    }
}
