//! Error types for the recx-core library.

use thiserror::Error;

/// Errors related to receipt field extraction.
///
/// Per-field parse failures are recovered inside the engine (the segment is
/// dropped); these variants exist for the normalizers themselves and for
/// callers that treat an empty result set as a failure.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A field pattern matched but the captured value did not normalize.
    #[error("failed to parse {field}: {value}")]
    Parse { field: &'static str, value: String },

    /// No receipt data could be extracted from the document.
    #[error("no structured receipt data found")]
    NoData,
}

/// Result type for the recx library.
pub type Result<T> = std::result::Result<T, ExtractionError>;
