//! Category inference from vendor keywords.

/// Vendor keyword to category table, checked in order; first hit wins.
const VENDOR_CATEGORIES: [(&str, &str); 7] = [
    ("zomato", "Food"),
    ("swiggy", "Food"),
    ("bescom", "Utilities"),
    ("reliance fresh", "Groceries"),
    ("more", "Groceries"),
    ("jio", "Internet"),
    ("act fibernet", "Internet"),
];

/// Infer a spending category from the vendor name.
///
/// The vendor string is lower-cased and tested for each keyword as a
/// substring. No match leaves the category to the caller's default.
pub fn infer_category(vendor: &str) -> Option<&'static str> {
    let vendor = vendor.to_lowercase();

    for (keyword, category) in VENDOR_CATEGORIES {
        if vendor.contains(keyword) {
            return Some(category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(infer_category("ZOMATO LTD"), Some("Food"));
        assert_eq!(infer_category("Swiggy Instamart"), Some("Food"));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(infer_category("Reliance Fresh Koramangala"), Some("Groceries"));
        assert_eq!(infer_category("ACT Fibernet"), Some("Internet"));
    }

    #[test]
    fn test_utilities_and_internet() {
        assert_eq!(infer_category("BESCOM"), Some("Utilities"));
        assert_eq!(infer_category("Jio Prepaid"), Some("Internet"));
    }

    #[test]
    fn test_unknown_vendor_has_no_category() {
        assert_eq!(infer_category("Unknown Shop"), None);
    }

    #[test]
    fn test_table_order_decides_on_overlap() {
        // "more" is a bare substring, so a vendor like "Zomato More" hits
        // the earlier "zomato" entry first.
        assert_eq!(infer_category("Zomato More"), Some("Food"));
        assert_eq!(infer_category("More Megastore"), Some("Groceries"));
    }
}
