//! Receipt record produced by the extraction engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category label applied when no vendor keyword matches.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One structured receipt extracted from a text segment.
///
/// A record is only constructed when vendor, transaction date and total
/// amount were all recognized in the same segment; segments missing any of
/// them are dropped by the parser. Records are immutable once built and
/// ownership passes to the caller (typically a persistence layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Vendor / merchant name.
    pub vendor: String,

    /// Transaction date (no time component).
    pub transaction_date: NaiveDate,

    /// Total amount paid.
    pub total_amount: Decimal,

    /// Detected currency (default: INR).
    #[serde(default)]
    pub currency: Currency,

    /// Spending category inferred from the vendor name.
    #[serde(default = "default_category")]
    pub category: String,

    /// The raw segment text the record was extracted from, kept for
    /// audit and debugging.
    pub raw_text: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Supported currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian rupee (the default when no symbol is detected).
    #[default]
    Inr,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Japanese yen.
    Jpy,
}

impl Currency {
    /// ISO 4217 code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
