// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the card scanner.

use thiserror::Error;

/// Top-level error type for all card scanner operations.
#[derive(Debug, Error)]
pub enum CardScanError {
    // -- Document input --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Barcode location --
    #[error("invalid scan parameters: {0}")]
    InvalidParameters(String),

    #[error("barcode `{0}` not found on page")]
    BarcodeNotFound(String),

    #[error("barcode `{name}` failed validation: {bars} bars, expected {expected_bars} bars of at least {min_bar_width}px")]
    InvalidBarcode {
        name: String,
        bars: usize,
        expected_bars: usize,
        min_bar_width: u32,
    },

    // -- Card fields --
    #[error("field `{0}` not found in page text")]
    MissingField(String),

    #[error("field `{field}` has unparseable value `{value}`")]
    FieldParse { field: String, value: String },

    #[error("field order mismatch: expected {expected:?}, found {found:?}")]
    FieldOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CardScanError>;
