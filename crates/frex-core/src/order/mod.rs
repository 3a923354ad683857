//! Transport order extraction module.

mod cargo;
pub mod collaborators;
pub mod lines;
mod locations;
mod parser;
pub mod rules;
pub mod window;

pub use cargo::CargoExtractor;
pub use collaborators::{
    CountryLookup, CountryTable, JsonOrderSink, LabelTranslator, OrderSink, TranslationTable,
};
pub use lines::{Anchor, LineSequence};
pub use locations::extract_locations;
pub use parser::{AccessLogisticParser, SENDER_LINE};
pub use window::{WINDOW_SIZE, WindowScanner};

use crate::error::ExtractionError;
use crate::models::order::OrderRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result of order extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted order data.
    pub order: OrderRecord,
    /// Fields that could not be located.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for format-specific order extractors.
pub trait OrderExtractor {
    /// Human-readable name of the document template.
    fn name(&self) -> &'static str;

    /// Check whether the lines come from this extractor's template.
    fn is_format(&self, lines: &[String]) -> bool;

    /// Like [`is_format`](Self::is_format), as an error for callers that
    /// must not extract from foreign documents.
    fn ensure_format(&self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Err(ExtractionError::NoLines);
        }
        if !self.is_format(lines) {
            return Err(ExtractionError::UnrecognizedFormat {
                extractor: self.name().to_string(),
            });
        }
        Ok(())
    }

    /// Build a best-effort order record. Missing fields never fail extraction.
    fn extract(&self, lines: &[String], attachment_filename: Option<&str>) -> ExtractionResult;

    /// Extract and hand the record to `sink`, returning its result unchanged.
    fn process_lines<S>(
        &self,
        lines: &[String],
        attachment_filename: Option<&str>,
        sink: &S,
    ) -> std::result::Result<S::Output, S::Error>
    where
        Self: Sized,
        S: OrderSink,
    {
        let result = self.extract(lines, attachment_filename);
        sink.create_order(result.order)
    }
}
