//! PDF text extraction using pdf-extract.

use tracing::debug;

use super::{LineSource, Result, split_lines};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Line source for text-based PDFs.
#[derive(Debug, Clone, Default)]
pub struct PdfLineSource {
    config: PdfConfig,
}

impl PdfLineSource {
    /// Create a new PDF line source.
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl LineSource for PdfLineSource {
    fn lines(&self, data: &[u8]) -> Result<Vec<String>> {
        if !data.starts_with(b"%PDF") {
            return Err(PdfError::Parse("missing %PDF header".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        let lines = split_lines(&text, &self.config);
        debug!("PDF flattened to {} lines ({} chars)", lines.len(), text.len());

        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(PdfError::NoText);
        }
        Ok(lines)
    }
}

/// Line source for documents that were already flattened to plain text.
#[derive(Debug, Clone, Default)]
pub struct TextLineSource {
    config: PdfConfig,
}

impl TextLineSource {
    /// Create a new text line source.
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl LineSource for TextLineSource {
    fn lines(&self, data: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(data)
            .map_err(|e| PdfError::TextExtraction(format!("invalid UTF-8: {}", e)))?;

        let lines = split_lines(text, &self.config);
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(PdfError::NoText);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source() {
        let source = TextLineSource::default();
        let lines = source.lines(b" To:\n\nContactperson: Jane \n").unwrap();
        assert_eq!(lines, vec!["To:", "", "Contactperson: Jane"]);
    }

    #[test]
    fn test_text_source_empty() {
        let source = TextLineSource::default();
        assert!(matches!(source.lines(b" \n\n"), Err(PdfError::NoText)));
    }

    #[test]
    fn test_pdf_source_rejects_non_pdf() {
        let source = PdfLineSource::default();
        assert!(matches!(source.lines(b"hello"), Err(PdfError::Parse(_))));
    }
}
