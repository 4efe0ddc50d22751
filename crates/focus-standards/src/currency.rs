//! ISO 4217 currency code membership.
//!
//! A static table of active alphabetic codes; membership is an exact match,
//! so lowercase or padded input is rejected. FOCUS requires BillingCurrency
//! to carry the code exactly as published.

/// Active ISO 4217 alphabetic codes, sorted for binary search.
pub const CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", //
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", //
    "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF", "CLP", "CNY", //
    "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", //
    "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", //
    "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR", //
    "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", //
    "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", //
    "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", //
    "MVR", "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", //
    "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", //
    "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", //
    "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", //
    "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", //
    "USD", "UYU", "UZS", "VES", "VND", "VUV", "WST", "XAF", "XCD", "XOF", //
    "XPF", "YER", "ZAR", "ZMW", "ZWG",
];

/// Exact-match ISO 4217 membership test. Case-sensitive: "usd" is invalid.
pub fn is_valid_currency(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_deduplicated() {
        for window in CURRENCY_CODES.windows(2) {
            assert!(window[0] < window[1], "{} >= {}", window[0], window[1]);
        }
    }

    #[test]
    fn common_codes_are_valid() {
        for code in ["USD", "EUR", "GBP", "JPY", "INR", "BRL"] {
            assert!(is_valid_currency(code), "{code} should be valid");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(!is_valid_currency("usd"));
        assert!(!is_valid_currency("Usd"));
        assert!(!is_valid_currency(" USD"));
        assert!(!is_valid_currency(""));
    }

    #[test]
    fn retired_codes_are_rejected() {
        // SLL and HRK were withdrawn; ZWL was replaced by ZWG.
        assert!(!is_valid_currency("SLL"));
        assert!(!is_valid_currency("HRK"));
        assert!(!is_valid_currency("ZWL"));
    }
}
