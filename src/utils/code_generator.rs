//! Short code generation and validation.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Length of generated short codes, in characters.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Upper bound for code length escalation after repeated collisions.
pub const MAX_CODE_LENGTH: usize = 10;

/// Minimum length of a caller-chosen code.
pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;

/// Maximum length of a caller-chosen code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 20;

/// Codes that would shadow service routes.
const RESERVED_CODES: &[&str] = &["shorten", "health"];

/// Generates a random code of `length` characters drawn from the
/// 62-symbol alphabet `[a-zA-Z0-9]`.
///
/// Each call takes a fresh handle to the thread-local CSPRNG, so codes
/// are unpredictable across calls and threads. Uniqueness is not
/// guaranteed here; the caller relies on the storage layer's unique
/// constraint and retries on collision.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Checks a caller-chosen short code before it is reserved.
///
/// Accepts 3-20 characters from `[a-zA-Z0-9_-]`, except names a route
/// already answers on.
///
/// # Errors
///
/// Returns [`AppError::Validation`] describing the first violated rule.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !(MIN_CUSTOM_CODE_LENGTH..=MAX_CUSTOM_CODE_LENGTH).contains(&code.len()) {
        return Err(AppError::bad_request(
            "Custom code must be 3-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(MAX_CODE_LENGTH).len(), 10);
    }

    #[test]
    fn test_generated_code_alphabet() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_codes_do_not_repeat() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(DEFAULT_CODE_LENGTH)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_accepts_length_boundaries() {
        assert!(validate_custom_code("abc").is_ok());
        assert!(validate_custom_code(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn test_accepts_hyphens_underscores_and_mixed_case() {
        assert!(validate_custom_code("my-cool_link").is_ok());
        assert!(validate_custom_code("MyCode123").is_ok());
    }

    #[test]
    fn test_rejects_too_short() {
        let err = validate_custom_code("ab").unwrap_err();
        assert!(err.to_string().contains("3-20 characters"));
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(validate_custom_code(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        assert!(validate_custom_code("my@code").is_err());
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("code/path").is_err());
    }

    #[test]
    fn test_rejects_every_reserved_code() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "'{reserved}' should be rejected"
            );
        }
    }
}
