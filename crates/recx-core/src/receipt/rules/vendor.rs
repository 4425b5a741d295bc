//! Vendor name recognition.

use super::first_capture;
use super::patterns::{
    VENDOR_ALL_CAPS_LINE, VENDOR_FIRST_LINE, VENDOR_LABELED, VENDOR_LEADING_CAPS,
    VENDOR_STORE_LINE,
};

/// Recognize the vendor name inside a segment.
///
/// A line consisting solely of uppercase letters, spaces and `&` anywhere in
/// the segment wins outright and short-circuits the ranked list. The
/// precedence is deliberate even when a labeled vendor line is also present;
/// changing it would alter extraction on ambiguous input.
pub fn recognize_vendor(segment: &str) -> Option<String> {
    if let Some(caps) = VENDOR_ALL_CAPS_LINE.captures(segment) {
        return Some(caps[1].trim().to_string());
    }

    first_capture(
        &[
            &*VENDOR_LABELED,
            &*VENDOR_LEADING_CAPS,
            &*VENDOR_FIRST_LINE,
            &*VENDOR_STORE_LINE,
        ],
        segment,
    )
    .map(|raw| raw.trim().to_string())
}
