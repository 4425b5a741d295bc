//! Data models for extracted receipts.

pub mod receipt;

pub use receipt::{Currency, Receipt};
