//! Core library for rule-based receipt extraction.
//!
//! This crate provides:
//! - Multi-receipt segmentation of a raw text blob
//! - Ordered-pattern field recognition (vendor, date, amount)
//! - Category and currency inference
//! - Validated receipt records ready for persistence by a caller
//!
//! The engine consumes already-decoded UTF-8 text; OCR, PDF handling,
//! storage and any HTTP surface belong to external callers.

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{ExtractionError, Result};
pub use models::receipt::{Currency, Receipt};
pub use receipt::parser::{extract_receipts, ReceiptParser};
pub use receipt::segmenter::segment;
