//! Rule-based field recognizers for receipt segments.
//!
//! Each field module owns its ordered pattern list and normalizer. All
//! recognizers are pure functions over a segment string and the static
//! tables in [`patterns`].

pub mod amounts;
pub mod category;
pub mod currency;
pub mod dates;
pub mod patterns;
pub mod vendor;

pub use amounts::{clean_amount, recognize_amount};
pub use category::infer_category;
pub use currency::infer_currency;
pub use dates::{parse_date, recognize_date};
pub use vendor::recognize_vendor;

use regex::Regex;

/// Try an ordered pattern list against `text`; the first pattern whose
/// capture group matches wins and later patterns are never consulted.
pub(crate) fn first_capture<'t>(patterns: &[&Regex], text: &'t str) -> Option<&'t str> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}
