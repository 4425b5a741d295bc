//! Transaction date recognition.

use chrono::NaiveDate;

use super::first_capture;
use super::patterns::{DATE_BILLED_ON, DATE_DAY_MONTH_NAME, DATE_LABELED_DMY};

/// Formats tried in fixed order when parsing a matched date token.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d-%b-%Y", "%d.%m.%Y"];

/// Recognize and parse the transaction date inside a segment.
///
/// The first textual match across the ordered pattern list is taken; if it
/// then fails to parse in every supported format the date is simply absent
/// for this segment (the parser rejects the segment, nothing errors).
pub fn recognize_date(segment: &str) -> Option<NaiveDate> {
    let raw = first_capture(
        &[&*DATE_LABELED_DMY, &*DATE_DAY_MONTH_NAME, &*DATE_BILLED_ON],
        segment,
    )?;
    parse_date(raw.trim())
}

/// Parse a date string by attempting the supported formats in order.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
