//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf, with pdf-extract as a fallback.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted text content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Pages in document order.
    pub pages: Vec<PdfPage>,
}

/// Text from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfContent {
    /// Page texts in order.
    pub fn page_texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.text.as_str())
    }

    /// Total characters of extracted text.
    pub fn text_len(&self) -> usize {
        self.pages.iter().map(|p| p.text.len()).sum()
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract the text of every page.
    ///
    /// Pages are read with lopdf. When lopdf fails on a page or returns only
    /// whitespace for it (fonts it cannot decode), the whole document is
    /// re-read with pdf-extract and returned as a single page. A document
    /// with no text from either reader is an error.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut complete = true;
        for number in page_numbers {
            match self.extract_page_text(number) {
                Ok(text) if !text.trim().is_empty() => pages.push(PdfPage { number, text }),
                Ok(_) => {
                    debug!("lopdf found no text on page {}", number);
                    complete = false;
                    break;
                }
                Err(e) => {
                    warn!("lopdf could not read page {}: {}", number, e);
                    complete = false;
                    break;
                }
            }
        }

        let content = if complete {
            PdfContent { pages }
        } else {
            debug!("Falling back to pdf-extract");
            self.extract_with_fallback()?
        };

        debug!(
            "PDF text extraction: {} pages, {} chars",
            content.pages.len(),
            content.text_len()
        );
        Ok(content)
    }

    fn extract_with_fallback(&self) -> Result<PdfContent> {
        let text = self.extract_text()?;
        if text.trim().is_empty() {
            return Err(PdfError::TextExtraction(
                "no text found in document".to_string(),
            ));
        }

        Ok(PdfContent {
            pages: vec![PdfPage { number: 1, text }],
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
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
        if self.raw_data.is_empty() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::TextExtraction(format!("page {} out of range", page)));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}
