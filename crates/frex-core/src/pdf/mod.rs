//! Document-to-lines sources.
//!
//! Extractors operate on an ordered sequence of text lines. These sources
//! produce that sequence from raw document bytes.

mod extractor;

pub use extractor::{PdfLineSource, TextLineSource};

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning a document into lines.
pub trait LineSource {
    /// Convert raw document bytes into ordered text lines.
    fn lines(&self, data: &[u8]) -> Result<Vec<String>>;
}

/// Split flattened text into lines according to the configuration.
pub fn split_lines(text: &str, config: &PdfConfig) -> Vec<String> {
    text.lines()
        .map(|line| if config.trim_lines { line.trim() } else { line.trim_end_matches('\r') })
        .filter(|line| !config.skip_blank_lines || !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_skips_blank() {
        let text = "  Tournumber:  \r\n\n   \n**4711**\n";
        let config = PdfConfig {
            trim_lines: true,
            skip_blank_lines: true,
        };
        assert_eq!(split_lines(text, &config), vec!["Tournumber:", "**4711**"]);
        assert_eq!(
            split_lines(text, &PdfConfig::default()),
            vec!["Tournumber:", "", "", "**4711**"]
        );
    }

    #[test]
    fn test_split_lines_keeps_layout_when_disabled() {
        let config = PdfConfig {
            trim_lines: false,
            skip_blank_lines: false,
        };
        let lines = split_lines("a\r\n\n b", &config);
        assert_eq!(lines, vec!["a", "", " b"]);
    }
}
