// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasterized card page — decoding, optional binarization, and conversion to
// the RGB grid the barcode locator scans.

use cardscan_core::error::CardScanError;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::contrast::otsu_level;
use tracing::{debug, info, instrument};

/// Page background. Anything else counts as ink.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A single rasterized page of a card.
///
/// Rasterizing the PDF happens outside this crate; the page arrives here as
/// an encoded image (PNG, JPEG, TIFF, ...) or an already-decoded
/// `DynamicImage`.
pub struct RasterPage {
    image: DynamicImage,
}

impl RasterPage {
    // -- Construction ---------------------------------------------------------

    /// Load a page image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, CardScanError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            CardScanError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = img.width(), height = img.height(), "Page image loaded");
        Ok(Self { image: img })
    }

    /// Decode a page image from raw encoded bytes.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CardScanError> {
        let img = image::load_from_memory(data).map_err(|err| {
            CardScanError::ImageError(format!("failed to decode page image: {}", err))
        })?;
        debug!(width = img.width(), height = img.height(), "Page image decoded from bytes");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// RGB view of the page, scanned against [`WHITE`].
    pub fn to_rgb(&self) -> RgbImage {
        self.image.to_rgb8()
    }

    // -- Cleanup --------------------------------------------------------------

    /// Global Otsu binarization: pixels at or below the histogram threshold
    /// become black, everything else pure white.
    ///
    /// Scanned pages rarely have a pure-white background, so this is what makes
    /// background equality meaningful for photographed or lossy input.
    #[instrument(skip(self))]
    pub fn binarize_otsu(self) -> Self {
        let gray = self.image.to_luma8();
        let threshold = otsu_level(&gray);
        info!(threshold, "Applying Otsu binarization");

        let (width, height) = gray.dimensions();
        let mut output = GrayImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let val = gray.get_pixel(x, y).0[0];
                let binary = if val > threshold { 255u8 } else { 0u8 };
                output.put_pixel(x, y, Luma([binary]));
            }
        }

        Self {
            image: DynamicImage::ImageLuma8(output),
        }
    }
}
