//! Slug generation utilities for human-readable resource identifiers.
//!
//! ## Summary
//! Generates stable, URL-safe slugs from resource names. Slugs are lowercase,
//! alphanumeric with hyphens, and don't change even if the resource name changes.

/// Generate a URL-safe slug from a name.
///
/// Converts to lowercase, replaces spaces and special characters with hyphens,
/// collapses multiple hyphens, and trims edge hyphens.
///
/// Examples:
/// - "Downtown Homes" -> "downtown-homes"
/// - "Lakefront & Marina" -> "lakefront-marina"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(generate_slug("downtown"), "downtown");
    }

    #[test]
    fn test_with_spaces() {
        assert_eq!(generate_slug("Downtown Homes"), "downtown-homes");
    }

    #[test]
    fn test_with_special_chars() {
        assert_eq!(generate_slug("Nikita's Picks"), "nikita-s-picks");
    }

    #[test]
    fn test_multiple_spaces() {
        assert_eq!(generate_slug("Downtown  Homes"), "downtown-homes");
    }

    #[test]
    fn test_leading_trailing() {
        assert_eq!(generate_slug("  rentals  "), "rentals");
    }

    #[test]
    fn test_complex() {
        assert_eq!(
            generate_slug("Lakefront & Marina @ South"),
            "lakefront-marina-south"
        );
    }
}
