// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open a card PDF and pull the text layer out of its pages
// using the `lopdf` crate.

use std::path::Path;

use cardscan_core::error::CardScanError;
use lopdf::Document;
use tracing::{debug, info, instrument};

/// Reads the text layer of an existing PDF.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CardScanError> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            CardScanError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path: Some(path_ref.display().to_string()),
        })
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CardScanError> {
        let document = Document::load_mem(data).map_err(|err| {
            CardScanError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self {
            document,
            source_path: None,
        })
    }

    /// Wrap an already-parsed lopdf document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source_path: None,
        }
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Return the source path if the reader was created via [`PdfReader::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    // -- Extraction -----------------------------------------------------------

    /// Extract the text of a single page (1-indexed).
    #[instrument(skip(self), fields(page_number))]
    pub fn extract_text(&self, page_number: u32) -> Result<String, CardScanError> {
        let pages = self.page_count();
        if page_number == 0 || page_number as usize > pages {
            return Err(CardScanError::PdfError(format!(
                "page {} out of range (document has {} pages)",
                page_number, pages
            )));
        }

        let text = self.document.extract_text(&[page_number]).map_err(|err| {
            CardScanError::PdfError(format!(
                "failed to extract text from page {}: {}",
                page_number, err
            ))
        })?;

        debug!(page_number, chars = text.len(), "Page text extracted");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a one-page PDF with each line in its own text object.
    fn single_page_pdf(lines: &[&str]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 780 - 14 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![50.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn extracts_page_text() {
        let reader = PdfReader::from_document(single_page_pdf(&["MATERIAL CARD", "Qty: 12"]));
        assert_eq!(reader.page_count(), 1);

        let text = reader.extract_text(1).expect("text extracted");
        assert!(text.contains("MATERIAL CARD"), "got {text:?}");
        assert!(text.contains("Qty: 12"), "got {text:?}");
    }

    #[test]
    fn round_trips_through_bytes() {
        let mut doc = single_page_pdf(&["hello"]);
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("PDF serialises");

        let reader = PdfReader::from_bytes(&bytes).expect("PDF loads");
        assert_eq!(reader.page_count(), 1);
        assert!(reader.source_path().is_none());
    }

    #[test]
    fn page_out_of_range_rejected() {
        let reader = PdfReader::from_document(single_page_pdf(&["x"]));
        assert!(matches!(reader.extract_text(0), Err(CardScanError::PdfError(_))));
        assert!(matches!(reader.extract_text(2), Err(CardScanError::PdfError(_))));
    }

    #[test]
    fn garbage_bytes_rejected() {
        assert!(matches!(
            PdfReader::from_bytes(b"%PDF-nope"),
            Err(CardScanError::PdfError(_))
        ));
    }
}
