//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of a generated short code.
pub const GENERATED_CODE_LENGTH: usize = 5;

/// Maximum length accepted for a user-supplied short code.
pub const MAX_CODE_LENGTH: usize = 10;

/// Generates a random short code.
///
/// Draws exactly [`GENERATED_CODE_LENGTH`] characters uniformly from the
/// 62-symbol alphabet `[a-zA-Z0-9]`. Pure over the thread RNG; uniqueness
/// against the store is the caller's concern.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-supplied custom short code.
///
/// The only rule is the length bound; the trimmed code must fit within
/// [`MAX_CODE_LENGTH`] characters. Collision with an existing record is
/// checked separately against the store.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the `short_code` field.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.chars().count() > MAX_CODE_LENGTH {
        return Err(AppError::validation(
            "short_code",
            format!("Custom short code must be at most {MAX_CODE_LENGTH} characters."),
        ));
    }

    Ok(())
}
