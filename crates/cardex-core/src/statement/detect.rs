//! Issuer detection from raw statement text.

use tracing::debug;

use crate::models::statement::Bank;

/// Detection priority. Issuer names can show up in another bank's
/// disclaimers or co-brand copy; a document containing tokens of several
/// issuers always resolves to the earliest entry in this list.
pub const DETECTION_ORDER: [Bank; 5] = [Bank::Hdfc, Bank::Chase, Bank::Sbi, Bank::Amex, Bank::Citi];

/// Identifying substrings per issuer, matched case-insensitively.
fn markers(bank: Bank) -> &'static [&'static str] {
    match bank {
        Bank::Hdfc => &["hdfc", "h.d.f.c"],
        Bank::Chase => &["chase", "jpmorgan"],
        Bank::Sbi => &["sbi card", "state bank of india"],
        Bank::Amex => &["american express", "amex"],
        Bank::Citi => &["citibank", "citi"],
        Bank::Unknown => &[],
    }
}

/// Determine which issuer produced the statement text.
///
/// Empty input and text without any known marker both yield
/// [`Bank::Unknown`]; detection never fails.
pub fn detect(text: &str) -> Bank {
    if text.trim().is_empty() {
        return Bank::Unknown;
    }

    let haystack = text.to_lowercase();
    for bank in DETECTION_ORDER {
        if markers(bank).iter().any(|m| haystack.contains(m)) {
            debug!("Detected issuer {:?}", bank);
            return bank;
        }
    }

    Bank::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_each_supported_issuer() {
        assert_eq!(detect("HDFC Bank Credit Card Statement"), Bank::Hdfc);
        assert_eq!(detect("H.D.F.C. Bank Ltd."), Bank::Hdfc);
        assert_eq!(detect("CHASE Sapphire statement"), Bank::Chase);
        assert_eq!(detect("JPMorgan Chase Bank, N.A."), Bank::Chase);
        assert_eq!(detect("SBI Card monthly statement"), Bank::Sbi);
        assert_eq!(detect("State Bank of India credit card"), Bank::Sbi);
        assert_eq!(detect("American Express Platinum"), Bank::Amex);
        assert_eq!(detect("AMEX membership rewards"), Bank::Amex);
        assert_eq!(detect("Citibank Online statement"), Bank::Citi);
        assert_eq!(detect("Citi Double Cash"), Bank::Citi);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect("hdfc bank"), Bank::Hdfc);
        assert_eq!(detect("ChAsE"), Bank::Chase);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Citi mentioned in an HDFC statement's co-brand copy
        assert_eq!(detect("HDFC Bank in partnership with Citibank"), Bank::Hdfc);
        // Chase before Amex
        assert_eq!(detect("Chase accepts American Express transfers"), Bank::Chase);
    }

    #[test]
    fn test_unrelated_text_is_unknown() {
        assert_eq!(detect("GROCERY MART\nMilk 3.49\nBread 2.99\nTotal 6.48"), Bank::Unknown);
    }

    #[test]
    fn test_empty_input_is_unknown() {
        assert_eq!(detect(""), Bank::Unknown);
        assert_eq!(detect("   \n\t  "), Bank::Unknown);
    }
}
