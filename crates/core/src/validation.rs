//! Field validation helpers for write paths.
//!
//! Handlers validate before touching the store; every error names the
//! offending field so the admin UI can surface it directly.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Pragmatic email shape check: one `@`, a non-empty local part, and a domain
/// with at least one dot.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
    })
}

/// Require a non-empty (after trimming) string value.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must not be empty"
        )));
    }
    Ok(())
}

/// Require a plausible email address.
pub fn validate_email(field: &str, value: &str) -> Result<(), CoreError> {
    require_non_empty(field, value)?;
    if !email_regex().is_match(value) {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be a valid email address"
        )));
    }
    Ok(())
}

/// Require a non-negative integer (counters, statistics).
pub fn validate_non_negative(field: &str, value: i64) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be non-negative, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_require_non_empty_rejects_whitespace() {
        assert_matches!(require_non_empty("name", "   "), Err(CoreError::Validation(m)) => {
            assert!(m.contains("name"));
        });
        assert!(require_non_empty("name", "Ali Veli").is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "ali@x.com").is_ok());
        assert!(validate_email("email", "a.b@firma.com.tr").is_ok());
        assert_matches!(validate_email("email", "not-an-email"), Err(CoreError::Validation(_)));
        assert_matches!(validate_email("email", "a@b"), Err(CoreError::Validation(_)));
        assert_matches!(validate_email("email", ""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("team_size", 0).is_ok());
        assert!(validate_non_negative("team_size", 42).is_ok());
        assert_matches!(
            validate_non_negative("team_size", -1),
            Err(CoreError::Validation(m)) => assert!(m.contains("team_size"))
        );
    }
}
