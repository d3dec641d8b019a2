//! Display formatting for listing prices.

/// Format a price with a K or M suffix.
///
/// Three fixed tiers:
/// - `$X.XM` (one decimal) for prices of at least 1,000,000
/// - `$XK` (no decimals) for prices of at least 1,000
/// - `$X` (no decimals) below that
#[must_use]
pub fn format_price(price: f64) -> String {
    if price >= 1_000_000.0 {
        format!("${:.1}M", price / 1_000_000.0)
    } else if price >= 1_000.0 {
        format!("${:.0}K", price / 1_000.0)
    } else {
        format!("${price:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions_keep_one_decimal() {
        assert_eq!(format_price(2_500_000.0), "$2.5M");
        assert_eq!(format_price(1_000_000.0), "$1.0M");
        assert_eq!(format_price(12_345_678.0), "$12.3M");
    }

    #[test]
    fn test_thousands_are_rounded() {
        assert_eq!(format_price(45_000.0), "$45K");
        assert_eq!(format_price(1_000.0), "$1K");
        assert_eq!(format_price(649_900.0), "$650K");
    }

    #[test]
    fn test_below_one_thousand() {
        assert_eq!(format_price(850.0), "$850");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn test_just_under_tier_boundaries() {
        // Rounding happens after the tier is chosen, so values just under a
        // boundary can render as the boundary itself.
        assert_eq!(format_price(999_999.0), "$1000K");
        assert_eq!(format_price(999.99), "$1000");
    }
}
