//! Error types for the frex-core library.

use thiserror::Error;

/// Main error type for the frex library.
#[derive(Error, Debug)]
pub enum FrexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Order extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning a document into lines.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The document produced no text lines.
    #[error("document contains no text")]
    NoText,
}

/// Errors related to order extraction.
///
/// Missing anchors and unparseable values are not errors; they degrade to
/// absent fields. Only a document that is not the expected template is.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document does not match the extractor's template.
    #[error("document is not in the {extractor} format")]
    UnrecognizedFormat { extractor: String },

    /// The line sequence is empty.
    #[error("no lines to extract from")]
    NoLines,
}

/// Result type for the frex library.
pub type Result<T> = std::result::Result<T, FrexError>;
