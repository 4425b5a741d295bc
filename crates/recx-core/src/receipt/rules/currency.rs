//! Currency inference from symbol-amount pairs.

use crate::models::receipt::Currency;

use super::patterns::CURRENCY_SYMBOL_AMOUNT;

/// Infer the segment's currency from the first symbol-amount pair found.
///
/// Known limitation, kept on purpose: the scan is not tied to the line the
/// total was recognized on, so multi-currency text attributes the whole
/// segment to whichever symbol appears first.
pub fn infer_currency(segment: &str) -> Option<Currency> {
    let caps = CURRENCY_SYMBOL_AMOUNT.captures(segment)?;
    let symbol = &caps[1];

    let currency = match symbol {
        "$" => Currency::Usd,
        "€" => Currency::Eur,
        "£" => Currency::Gbp,
        "¥" => Currency::Jpy,
        // ₹, Rs and Rs. all denote rupees.
        _ => Currency::Inr,
    };
    Some(currency)
}
