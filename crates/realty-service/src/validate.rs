//! Field-level validation mirroring the persistence constraints.
//!
//! Nothing here goes beyond required/optional, max length, and email-shaped
//! checks; richer validation is deliberately absent.

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Requires a non-empty value, bounded by the column's max length.
///
/// ## Errors
/// Returns a validation error when the value is empty or too long.
pub fn require(field: &str, value: &str, max_len: usize) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::ValidationError(format!(
            "{field} is required"
        )));
    }
    max_length(field, value, max_len)
}

/// ## Summary
/// Bounds an optional value by the column's max length.
///
/// ## Errors
/// Returns a validation error when the value exceeds the limit.
pub fn max_length(field: &str, value: &str, max_len: usize) -> ServiceResult<()> {
    if value.chars().count() > max_len {
        return Err(ServiceError::ValidationError(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// ## Summary
/// Requires an email-shaped value: non-empty, bounded, with a local part and
/// a domain around a single separator.
///
/// ## Errors
/// Returns a validation error when the value is not email-shaped.
pub fn require_email(value: &str) -> ServiceResult<()> {
    require("email", value, 254)?;

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ServiceError::ValidationError(
            "email must be a valid address".to_owned(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty_and_whitespace() {
        assert!(require("name", "", 200).is_err());
        assert!(require("name", "   ", 200).is_err());
        assert!(require("name", "Ana", 200).is_ok());
    }

    #[test]
    fn test_max_length_counts_characters() {
        assert!(max_length("phone", "12345678901234567890", 20).is_ok());
        assert!(max_length("phone", "123456789012345678901", 20).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(require_email("ana@example.com").is_ok());
        assert!(require_email("ana").is_err());
        assert!(require_email("@example.com").is_err());
        assert!(require_email("ana@nodot").is_err());
        assert!(require_email("").is_err());
    }
}
