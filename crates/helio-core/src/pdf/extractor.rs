//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor.
///
/// lopdf parses the document structure (and handles empty-password
/// encryption); pdf-extract decodes the page text.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    page_separator: String,
    try_empty_password: bool,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Page texts joined with the page separator.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
}

impl PdfContent {
    /// Number of pages that produced no text (image-only or empty pages).
    pub fn blank_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.text.trim().is_empty()).count()
    }
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            page_separator: "\n".to_string(),
            try_empty_password: true,
        }
    }

    /// Create an extractor from PDF configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new()
            .with_page_separator(config.page_separator.clone())
            .with_empty_password(config.try_empty_password)
    }

    /// Set the separator inserted between page texts.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Set whether encrypted PDFs are retried with an empty password.
    pub fn with_empty_password(mut self, enabled: bool) -> Self {
        self.try_empty_password = enabled;
        self
    }

    /// Extract every page and the flattened text in one pass.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let page_texts = self.extract_pages()?;
        let text = page_texts.join(&self.page_separator);

        let pages: Vec<PdfPage> = page_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PdfPage {
                number: i as u32 + 1,
                text,
            })
            .collect();

        debug!("PDF content: {} pages, {} chars text", pages.len(), text.len());

        Ok(PdfContent { text, pages })
    }

    fn loaded(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))
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

        if doc.is_encrypted() {
            if !self.try_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads from bytes, so hand it the decrypted document
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            warn!("PDF has no pages");
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

    fn extract_pages(&self) -> Result<Vec<String>> {
        let doc = self.loaded()?;
        if doc.get_pages().is_empty() {
            return Ok(Vec::new());
        }

        // pdf-extract panics on some malformed font and resource dictionaries
        let pages = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
        })) {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(PdfError::TextExtraction(e.to_string())),
            Err(panic_err) => {
                let reason = panic_message(panic_err.as_ref());
                warn!("Text decoding panicked: {}", reason);
                return Err(PdfError::TextExtraction(reason));
            }
        };

        debug!("Extracted text from {} pages", pages.len());
        Ok(pages)
    }

    fn extract_text(&self) -> Result<String> {
        Ok(self.extract_pages()?.join(&self.page_separator))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        self.extract_pages()?
            .into_iter()
            .nth((page - 1) as usize)
            .ok_or(PdfError::InvalidPage(page))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "text decoder panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_extract_before_load_fails() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_plain_text() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"Project Name  Acme Solar\nthis is not a PDF");
        assert!(matches!(result, Err(PdfError::Parse(_))));
        assert!(extractor.document.is_none());
    }

    #[test]
    fn test_load_rejects_empty_input() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(&[]).is_err());
    }

    #[test]
    fn test_invalid_page_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.extract_page_text(1),
            Err(PdfError::InvalidPage(1))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = PdfConfig {
            page_separator: "\n\n".to_string(),
            try_empty_password: false,
            min_text_length: 10,
        };
        let extractor = PdfExtractor::from_config(&config);
        assert_eq!(extractor.page_separator, "\n\n");
        assert!(!extractor.try_empty_password);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("Descendant fonts required");
        assert_eq!(panic_message(payload.as_ref()), "Descendant fonts required");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("deref"));
        assert_eq!(panic_message(payload.as_ref()), "deref");

        let payload: Box<dyn std::any::Any + Send> = Box::new(5_u8);
        assert_eq!(panic_message(payload.as_ref()), "text decoder panicked");
    }

    #[test]
    fn test_blank_pages() {
        let content = PdfContent {
            text: "a\n".to_string(),
            pages: vec![
                PdfPage { number: 1, text: "a".to_string() },
                PdfPage { number: 2, text: "  ".to_string() },
            ],
        };
        assert_eq!(content.blank_pages(), 1);
    }
}
