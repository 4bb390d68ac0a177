//! Fixed-fee brokerage schedule and rupee display formatting.

use crate::constants::{BROKERAGE_PREMIUM_FEE, BROKERAGE_RENT_THRESHOLD, BROKERAGE_STANDARD_FEE};

/// Fixed brokerage fee for a monthly rent.
///
/// Two tiers only: rents strictly above the threshold pay the premium fee,
/// everything else (the threshold itself included) pays the standard fee.
/// There is no percentage component and no one-month-rent fallback.
pub fn brokerage_for_rent(rent: i64) -> i64 {
    if rent > BROKERAGE_RENT_THRESHOLD {
        BROKERAGE_PREMIUM_FEE
    } else {
        BROKERAGE_STANDARD_FEE
    }
}

/// Format an amount as Indian rupees with en-IN digit grouping and no
/// decimal places: the last three digits form one group, the remaining
/// digits pair up (`₹12,499`, `₹14,50,000`).
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (lead, pair) = rest.split_at(rest.len() - 2);
            parts.push(pair);
            rest = lead;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fee_below_threshold() {
        assert_eq!(brokerage_for_rent(25_000), 12_499);
        assert_eq!(brokerage_for_rent(49_999), 12_499);
    }

    #[test]
    fn test_premium_fee_above_threshold() {
        assert_eq!(brokerage_for_rent(50_001), 16_999);
        assert_eq!(brokerage_for_rent(85_000), 16_999);
        assert_eq!(brokerage_for_rent(1_000_000), 16_999);
    }

    #[test]
    fn test_threshold_itself_pays_standard_fee() {
        // "above 50,000" is strict: exactly 50,000 stays on the standard tier
        assert_eq!(brokerage_for_rent(50_000), 12_499);
    }

    #[test]
    fn test_format_small_amounts_ungrouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn test_format_en_in_grouping() {
        assert_eq!(format_inr(12_499), "₹12,499");
        assert_eq!(format_inr(85_000), "₹85,000");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(1_450_000), "₹14,50,000");
        assert_eq!(format_inr(123_456_789), "₹12,34,56,789");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_inr(-12_499), "-₹12,499");
    }
}
