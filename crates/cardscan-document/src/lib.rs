// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cardscan-document — Document processing for the card scanner.
//
// Provides PDF text extraction, page rasters behind a narrow pixel-grid trait,
// barcode location and geometric validation, and assembly of labelled card
// fields into a validated record.

pub mod barcode;
pub mod card;
pub mod pdf;
pub mod raster;

// Re-export the primary structs so callers can use `cardscan_document::BarcodeLocator` etc.
pub use barcode::{BarCode, BarcodeLocator, Interval, ProbeOutcome};
pub use card::{CardExtractor, CardRecord, FieldParser};
pub use pdf::reader::PdfReader;
pub use raster::{PixelGrid, RasterPage, WHITE};
