//! Core library for freight order extraction.
//!
//! This crate provides:
//! - Document-to-lines sources (PDF and pre-flattened text)
//! - Anchor lookup and bounded window scans over line sequences
//! - Address and date-range recognizers and parsers
//! - The Access Logistic transport order extractor
//! - Order data models ready for serialization

pub mod error;
pub mod models;
pub mod pdf;
pub mod order;

pub use error::{FrexError, Result};
pub use models::config::FrexConfig;
pub use models::order::{
    CargoItem, CompanyAddress, Customer, CustomerDetails, CustomerSide, Location, OrderRecord,
    PackageType, TimeWindow,
};
pub use pdf::{LineSource, PdfLineSource, TextLineSource};
pub use order::{
    AccessLogisticParser, CountryLookup, CountryTable, ExtractionResult, JsonOrderSink,
    LabelTranslator, OrderExtractor, OrderSink, TranslationTable,
};
