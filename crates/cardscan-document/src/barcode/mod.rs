// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barcode module — locating a block of vertical bars on a page and checking
// its geometry. Bars are measured, never decoded.

pub mod interval;
pub mod locator;
pub mod model;
pub mod probe;

pub use interval::divide;
pub use locator::BarcodeLocator;
pub use model::{BarCode, Interval};
pub use probe::{ProbeOutcome, probe};
