//! PDF text extraction using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{PdfSource, Result};
use crate::error::PdfError;

/// Statement PDF backed by lopdf for structure and pdf-extract for text.
pub struct StatementPdf {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl StatementPdf {
    /// Create a new, empty extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Read and load a statement PDF from disk.
    pub fn open(path: &Path) -> crate::error::Result<Self> {
        let data = std::fs::read(path)?;
        let mut pdf = Self::new();
        pdf.load(&data)?;
        Ok(pdf)
    }
}

impl Default for StatementPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource for StatementPdf {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // E-statements are frequently encrypted with an empty password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn front_text(&self, max_pages: usize) -> Result<String> {
        let full_text = self.extract_text()?;
        let page_count = self.page_count() as usize;

        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        if max_pages == 0 || page_count <= max_pages {
            return Ok(full_text);
        }

        // pdf-extract returns one undifferentiated text stream; slice off the
        // leading pages by the same lines-per-page approximation used for
        // page-level access.
        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count;
        let end = (max_pages * lines_per_page).min(lines.len());

        Ok(lines[..end].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_pdf_new() {
        let pdf = StatementPdf::new();
        assert!(pdf.document.is_none());
        assert_eq!(pdf.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut pdf = StatementPdf::new();
        assert!(pdf.load(b"not a pdf").is_err());
    }

    #[test]
    fn test_extract_text_requires_load() {
        let pdf = StatementPdf::new();
        assert!(pdf.extract_text().is_err());
    }
}
