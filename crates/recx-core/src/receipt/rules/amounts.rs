//! Total amount recognition and normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ExtractionError, Result};

use super::first_capture;
use super::patterns::{AMOUNT_GRAND_TOTAL, AMOUNT_PAID, AMOUNT_TOTAL, AMOUNT_TOTAL_AMOUNT};

/// Recognize the total amount inside a segment.
///
/// Returns `Ok(None)` when no amount pattern matches, and
/// [`ExtractionError::Parse`] when a pattern matched but the captured text
/// did not normalize to a decimal. The record builder treats both as
/// "field not found" for the segment at hand.
pub fn recognize_amount(segment: &str) -> Result<Option<Decimal>> {
    match first_capture(
        &[
            &*AMOUNT_TOTAL_AMOUNT,
            &*AMOUNT_TOTAL,
            &*AMOUNT_GRAND_TOTAL,
            &*AMOUNT_PAID,
        ],
        segment,
    ) {
        Some(raw) => clean_amount(raw).map(Some),
        None => Ok(None),
    }
}

/// Strip the rupee sign and comma separators, then parse as a decimal.
pub fn clean_amount(raw: &str) -> Result<Decimal> {
    let cleaned = raw.replace(['₹', ','], "");
    Decimal::from_str(cleaned.trim()).map_err(|_| ExtractionError::Parse {
        field: "amount",
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_with_rupee_and_separators() {
        let amount = recognize_amount("Total: ₹1,234.56").unwrap();
        assert_eq!(amount, Some(dec("1234.56")));
    }

    #[test]
    fn test_grand_total_plain() {
        let amount = recognize_amount("Grand Total: 999.00").unwrap();
        assert_eq!(amount, Some(dec("999.00")));
    }

    #[test]
    fn test_amount_paid_label() {
        let amount = recognize_amount("Amount Paid: ₹72.50").unwrap();
        assert_eq!(amount, Some(dec("72.50")));
    }

    #[test]
    fn test_total_amount_label_takes_priority() {
        let text = "Total Amount: 100.00\nTotal: 200.00";
        assert_eq!(recognize_amount(text).unwrap(), Some(dec("100.00")));
    }

    #[test]
    fn test_non_numeric_total_does_not_match() {
        assert_eq!(recognize_amount("Total: abc").unwrap(), None);
    }

    #[test]
    fn test_amount_requires_two_decimals() {
        assert_eq!(recognize_amount("Total: 450").unwrap(), None);
    }

    #[test]
    fn test_clean_amount_strips_symbols() {
        assert_eq!(clean_amount("₹1,234.56").unwrap(), dec("1234.56"));
        assert_eq!(clean_amount("12,34,567.00").unwrap(), dec("1234567.00"));
    }

    #[test]
    fn test_clean_amount_rejects_garbage() {
        assert!(matches!(
            clean_amount("12.34.56"),
            Err(ExtractionError::Parse { field: "amount", .. })
        ));
    }
}
