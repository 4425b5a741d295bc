//! Compiled regex tables for receipt field recognition.
//!
//! Per-field pattern lists are ordered: the recognizers try them top to
//! bottom and stop at the first match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Receipt boundary: a line made solely of 3+ dashes or 3+ equals signs.
    // A trailing \r is tolerated for CRLF input.
    pub static ref SEGMENT_SEPARATOR: Regex = Regex::new(
        r"(?m)^(?:-{3,}|={3,})\r?$"
    ).unwrap();

    // Vendor: a whole line of uppercase letters, spaces and '&'. Checked
    // before the ranked vendor list and short-circuits it when it hits.
    pub static ref VENDOR_ALL_CAPS_LINE: Regex = Regex::new(
        r"(?m)^([A-Z &]*[A-Z][A-Z &]*)\r?$"
    ).unwrap();

    // Vendor patterns, in priority order.
    pub static ref VENDOR_LABELED: Regex = Regex::new(
        r"(?i)(?:from|billed by|sold by|store):\s*([^\r\n]+)"
    ).unwrap();

    pub static ref VENDOR_LEADING_CAPS: Regex = Regex::new(
        r"^([A-Z][A-Z &]*)\r?\n"
    ).unwrap();

    pub static ref VENDOR_FIRST_LINE: Regex = Regex::new(
        r"^\s*([^\r\n]+)"
    ).unwrap();

    pub static ref VENDOR_STORE_LINE: Regex = Regex::new(
        r"(?i)store[^\r\n:]*:\s*([^\r\n]+)"
    ).unwrap();

    // Date patterns, in priority order.
    pub static ref DATE_LABELED_DMY: Regex = Regex::new(
        r"(?i)date:\s*(\d{2}[/-]\d{2}[/-]\d{4})"
    ).unwrap();

    // Bare DD-Mon-YYYY token, e.g. 20-Jul-2025.
    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)(\d{2}-[a-z]{3}-\d{4})"
    ).unwrap();

    pub static ref DATE_BILLED_ON: Regex = Regex::new(
        r"(?i)billed on:\s*(\d{2}\.\d{2}\.\d{4})"
    ).unwrap();

    // Amount patterns, in priority order. Each expects an optional rupee
    // sign and a value with comma separators and exactly two decimals.
    pub static ref AMOUNT_TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)total amount:\s+₹?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref AMOUNT_TOTAL: Regex = Regex::new(
        r"(?i)total:\s*₹?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref AMOUNT_GRAND_TOTAL: Regex = Regex::new(
        r"(?i)grand total:\s*₹?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref AMOUNT_PAID: Regex = Regex::new(
        r"(?i)amount paid:\s*₹?([\d,]+\.\d{2})"
    ).unwrap();

    // Currency symbol (or literal Rs/Rs.) immediately followed by a number.
    pub static ref CURRENCY_SYMBOL_AMOUNT: Regex = Regex::new(
        r"(\$|€|£|¥|₹|Rs\.?)\s*[\d,]+(?:\.\d{2})?"
    ).unwrap();
}
