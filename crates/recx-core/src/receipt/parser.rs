//! Receipt record builder orchestrating segmentation and field rules.

use tracing::{debug, info};

use crate::models::receipt::{Currency, Receipt, DEFAULT_CATEGORY};

use super::rules;
use super::segmenter::segment;

/// Why a segment produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RejectReason {
    MissingVendor,
    MissingDate,
    MissingAmount,
}

/// Per-segment resolution outcome. Only `Resolved` values reach the output
/// list; rejection is normal behavior for noisy OCR input, not a failure.
enum SegmentOutcome {
    Resolved(Receipt),
    Rejected(RejectReason),
}

/// Rule-based receipt parser.
///
/// Stateless across calls: the pattern tables are read-only statics and each
/// invocation operates only on its own input, so a single parser can be
/// shared freely between threads.
pub struct ReceiptParser {
    default_currency: Currency,
    default_category: String,
}

impl ReceiptParser {
    /// Create a parser with the standard defaults (INR, "Uncategorized").
    pub fn new() -> Self {
        Self {
            default_currency: Currency::Inr,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Set the currency applied when no symbol is detected in a segment.
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Set the category applied when no vendor keyword matches.
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Extract all receipts found in `raw_text`, in segment order.
    ///
    /// Segments missing a required field are dropped silently; one malformed
    /// segment never affects its siblings. The output length is at most the
    /// segment count and the call never fails.
    pub fn extract(&self, raw_text: &str) -> Vec<Receipt> {
        let segments = segment(raw_text);
        info!(
            "extracting receipts from {} segment(s), {} chars",
            segments.len(),
            raw_text.len()
        );

        let mut receipts = Vec::with_capacity(segments.len());
        for (index, seg) in segments.into_iter().enumerate() {
            match self.resolve_segment(seg) {
                SegmentOutcome::Resolved(receipt) => {
                    debug!(segment = index, vendor = %receipt.vendor, "segment resolved");
                    receipts.push(receipt);
                }
                SegmentOutcome::Rejected(reason) => {
                    debug!(segment = index, ?reason, "segment dropped");
                }
            }
        }
        receipts
    }

    fn resolve_segment(&self, seg: &str) -> SegmentOutcome {
        let Some(vendor) = rules::vendor::recognize_vendor(seg) else {
            return SegmentOutcome::Rejected(RejectReason::MissingVendor);
        };

        let Some(transaction_date) = rules::dates::recognize_date(seg) else {
            return SegmentOutcome::Rejected(RejectReason::MissingDate);
        };

        // A normalization failure counts as "field not found" for this
        // segment only; it must not abort the rest of the batch.
        let total_amount = match rules::amounts::recognize_amount(seg) {
            Ok(Some(amount)) => amount,
            Ok(None) => return SegmentOutcome::Rejected(RejectReason::MissingAmount),
            Err(err) => {
                debug!(%err, "amount matched but failed to normalize");
                return SegmentOutcome::Rejected(RejectReason::MissingAmount);
            }
        };

        let category = rules::category::infer_category(&vendor)
            .map(str::to_string)
            .unwrap_or_else(|| self.default_category.clone());

        let currency = rules::currency::infer_currency(seg).unwrap_or(self.default_currency);

        SegmentOutcome::Resolved(Receipt {
            vendor,
            transaction_date,
            total_amount,
            currency,
            category,
            raw_text: seg.to_string(),
        })
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract receipts from raw text with a default parser.
pub fn extract_receipts(raw_text: &str) -> Vec<Receipt> {
    ReceiptParser::new().extract(raw_text)
}
