//! Receipt extraction module: segmentation, field rules, record building.

pub mod parser;
pub mod rules;
pub mod segmenter;

pub use parser::{extract_receipts, ReceiptParser};
pub use segmenter::segment;
