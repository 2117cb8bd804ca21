// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barcode locator — greedy top-down row scan for a block of equally tall,
// vertical bars spanning a known width.

use cardscan_core::error::CardScanError;
use tracing::{debug, info, instrument, warn};

use super::interval::divide;
use super::model::{BarCode, Interval};
use super::probe::{ProbeOutcome, probe};
use crate::raster::grid::PixelGrid;

/// Finds the first barcode of a given size on a page.
///
/// The scan assumes bars are perfectly vertical, uniformly tall, and that
/// nothing else on the barcode's top row shares its ink span. It walks rows
/// top to bottom; when a candidate bar breaks off early it jumps past the row
/// where the break was seen instead of re-probing the same region.
///
/// Worst-case cost is `width * height * expected_height` pixel reads, so
/// large pages can be bounded with [`BarcodeLocator::with_max_rows`].
///
/// ```ignore
/// let page = RasterPage::open("card.png")?.to_rgb();
/// let code = BarcodeLocator::new(&page, WHITE).locate(58, 731)?;
/// ```
pub struct BarcodeLocator<'a, G: PixelGrid> {
    grid: &'a G,
    background: G::Pixel,
    max_rows: Option<u32>,
}

impl<'a, G: PixelGrid> BarcodeLocator<'a, G> {
    pub fn new(grid: &'a G, background: G::Pixel) -> Self {
        Self {
            grid,
            background,
            max_rows: None,
        }
    }

    /// Give up (as "not found") after scanning this many rows.
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Ascending x-coordinates of every non-background pixel on row `y`.
    pub fn dark_columns(&self, y: u32) -> Vec<u32> {
        (0..self.grid.width())
            .filter(|&x| self.grid.pixel_at(x, y) != self.background)
            .collect()
    }

    /// Locate a barcode whose bars are `expected_height` rows tall and whose
    /// bars together span `expected_width` columns.
    ///
    /// `Ok(None)` means the page was scanned (or the row budget ran out)
    /// without finding one.
    #[instrument(skip(self))]
    pub fn locate(
        &self,
        expected_height: u32,
        expected_width: u32,
    ) -> Result<Option<BarCode>, CardScanError> {
        self.check_parameters(expected_height, expected_width)?;

        let height = self.grid.height();
        let mut y = 0u32;
        let mut rows_scanned = 0u32;

        while y < height {
            if let Some(limit) = self.max_rows
                && rows_scanned >= limit
            {
                warn!(limit, row = y, "Row budget exhausted before a barcode was found");
                return Ok(None);
            }
            rows_scanned += 1;

            let intervals = divide(&self.dark_columns(y), expected_width);
            if intervals.is_empty() {
                y += 1;
                continue;
            }

            match self.first_gap(&intervals, expected_height, y) {
                Some(rows_down) => {
                    debug!(row = y, candidates = intervals.len(), rows_down, "Row rejected");
                    y = y.saturating_add(rows_down);
                }
                None => {
                    let origin = intervals[0].start;
                    let bars = intervals.iter().map(|bar| bar.rebased(origin)).collect();
                    info!(
                        row = y,
                        x = origin,
                        bars = intervals.len(),
                        rows_scanned,
                        "Barcode located"
                    );
                    return Ok(Some(BarCode::new(expected_height, expected_width, bars)));
                }
            }
        }

        debug!(rows_scanned, "No barcode on page");
        Ok(None)
    }

    // -- Helpers --------------------------------------------------------------

    fn check_parameters(
        &self,
        expected_height: u32,
        expected_width: u32,
    ) -> Result<(), CardScanError> {
        if expected_height == 0 || expected_width == 0 {
            return Err(CardScanError::InvalidParameters(format!(
                "barcode size must be non-zero, got height {} and width {}",
                expected_height, expected_width
            )));
        }
        if self.grid.width() == 0 || self.grid.height() == 0 {
            return Err(CardScanError::InvalidParameters(format!(
                "cannot scan an empty {}x{} page",
                self.grid.width(),
                self.grid.height()
            )));
        }
        Ok(())
    }

    /// Skip distance from the first interval that is not a solid bar, or
    /// `None` when every interval is.
    fn first_gap(&self, intervals: &[Interval], expected_height: u32, y: u32) -> Option<u32> {
        intervals.iter().find_map(|&interval| {
            match probe(interval, expected_height, y, self.grid, self.background) {
                ProbeOutcome::Solid => None,
                ProbeOutcome::GapAt { rows_down } => Some(rows_down),
            }
        })
    }
}
