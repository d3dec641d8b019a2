//! Small text helpers for display formatting.

/// Capitalize a word: first character uppercased, the rest lowercased.
///
/// Examples:
/// - "selling" -> "Selling"
/// - "RENTING" -> "Renting"
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_word() {
        assert_eq!(capitalize("selling"), "Selling");
    }

    #[test]
    fn test_uppercase_word() {
        assert_eq!(capitalize("RENTING"), "Renting");
    }

    #[test]
    fn test_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_single_char() {
        assert_eq!(capitalize("b"), "B");
    }
}
