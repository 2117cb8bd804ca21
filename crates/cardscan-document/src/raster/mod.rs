// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — the pixel grid abstraction and decoded card pages.

pub mod grid;
pub mod page;

pub use grid::PixelGrid;
pub use page::{RasterPage, WHITE};
