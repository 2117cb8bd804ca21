// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card assembly — text fields plus both barcodes, validated into a record.

use std::collections::BTreeMap;
use std::path::Path;

use cardscan_core::config::{BarcodeProfile, CardScanConfig};
use cardscan_core::error::{CardScanError, Result};
use cardscan_core::types::{FieldLayout, FieldValue};
use image::RgbImage;
use serde::Serialize;
use tracing::{info, instrument};

use super::fields::{FieldParser, card_label};
use crate::barcode::{BarCode, BarcodeLocator};
use crate::pdf::reader::PdfReader;
use crate::raster::page::{RasterPage, WHITE};

const TOP_BARCODE: &str = "top_barcode";
const TAGGED_BARCODE: &str = "tagged_by";

/// Everything read off one card.
#[derive(Debug, Clone, Serialize)]
pub struct CardRecord {
    /// First line of the card text.
    pub label: String,
    /// Parsed fields keyed by normalised label.
    pub fields: BTreeMap<String, FieldValue>,
    pub top_barcode: BarCode,
    pub tagged_by: BarCode,
}

impl CardRecord {
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

/// Turns a card's text layer and page raster into a validated [`CardRecord`].
pub struct CardExtractor {
    config: CardScanConfig,
    parser: FieldParser,
}

impl CardExtractor {
    pub fn new(config: CardScanConfig, layout: &FieldLayout) -> Result<Self> {
        config.top_barcode.validate()?;
        config.tagged_barcode.validate()?;
        Ok(Self {
            config,
            parser: FieldParser::new(layout)?,
        })
    }

    pub fn config(&self) -> &CardScanConfig {
        &self.config
    }

    /// Read the first page of `pdf_path` for text and `image_path` for the
    /// rasterized page.
    #[instrument(
        skip_all,
        fields(pdf = %pdf_path.as_ref().display(), image = %image_path.as_ref().display())
    )]
    pub fn extract_files(
        &self,
        pdf_path: impl AsRef<Path>,
        image_path: impl AsRef<Path>,
    ) -> Result<CardRecord> {
        let text = PdfReader::open(pdf_path.as_ref())?.extract_text(1)?;
        let page = RasterPage::open(image_path.as_ref())?;
        self.extract(&text, page)
    }

    /// Parse fields, check their order, then locate and validate both
    /// barcodes. Any failure rejects the whole card.
    #[instrument(
        skip_all,
        fields(text_len = text.len(), width = page.width(), height = page.height())
    )]
    pub fn extract(&self, text: &str, page: RasterPage) -> Result<CardRecord> {
        let fields = self.parser.parse(text)?;
        self.parser.check_order(text)?;

        let page = if self.config.binarize {
            page.binarize_otsu()
        } else {
            page
        };
        let grid = page.to_rgb();

        let top_barcode = self.find_barcode(TOP_BARCODE, &grid, &self.config.top_barcode)?;
        let tagged_by = self.find_barcode(TAGGED_BARCODE, &grid, &self.config.tagged_barcode)?;

        let record = CardRecord {
            label: card_label(text),
            fields,
            top_barcode,
            tagged_by,
        };
        info!(label = %record.label, fields = record.fields.len(), "Card extracted");
        Ok(record)
    }

    fn find_barcode(
        &self,
        name: &str,
        grid: &RgbImage,
        profile: &BarcodeProfile,
    ) -> Result<BarCode> {
        let mut locator = BarcodeLocator::new(grid, WHITE);
        if let Some(max_rows) = self.config.max_scan_rows {
            locator = locator.with_max_rows(max_rows);
        }

        let code = locator
            .locate(profile.height, profile.width)?
            .ok_or_else(|| CardScanError::BarcodeNotFound(name.to_string()))?;

        if !code.is_valid(profile.min_bar_width, profile.bar_count) {
            return Err(CardScanError::InvalidBarcode {
                name: name.to_string(),
                bars: code.bars().len(),
                expected_bars: profile.bar_count,
                min_bar_width: profile.min_bar_width,
            });
        }
        Ok(code)
    }
}
