// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner configuration: barcode geometry per card slot and scan limits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardScanError, Result};

/// Expected geometry of one barcode on the card, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeProfile {
    /// Height every bar must reach.
    pub height: u32,
    /// Distance from the first bar's left edge to the last bar's right edge.
    pub width: u32,
    /// Narrowest acceptable bar (`end - start`).
    pub min_bar_width: u32,
    /// Number of bars the barcode must contain.
    pub bar_count: usize,
}

impl BarcodeProfile {
    /// Reject profiles the locator could never satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(CardScanError::Config(format!(
                "barcode profile needs non-zero height and width, got {}x{}",
                self.height, self.width
            )));
        }
        if self.bar_count == 0 {
            return Err(CardScanError::Config(
                "barcode profile needs at least one bar".into(),
            ));
        }
        Ok(())
    }
}

/// Scanner settings, usually loaded from `cardscan.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardScanConfig {
    /// Barcode printed across the top of the card.
    pub top_barcode: BarcodeProfile,
    /// Barcode in the "tagged by" box.
    pub tagged_barcode: BarcodeProfile,
    /// Stop looking for a barcode after this many rows (None = whole page).
    pub max_scan_rows: Option<u32>,
    /// Run Otsu binarization on the page before scanning.
    pub binarize: bool,
}

impl Default for CardScanConfig {
    fn default() -> Self {
        Self {
            top_barcode: BarcodeProfile {
                height: 58,
                width: 731,
                min_bar_width: 1,
                bar_count: 31,
            },
            tagged_barcode: BarcodeProfile {
                height: 83,
                width: 192,
                min_bar_width: 1,
                bar_count: 11,
            },
            max_scan_rows: None,
            binarize: false,
        }
    }
}

impl CardScanConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|err| match err {
            CardScanError::Config(msg) => {
                CardScanError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|err| CardScanError::Config(err.to_string()))?;
        config.top_barcode.validate()?;
        config.tagged_barcode.validate()?;
        Ok(config)
    }
}
