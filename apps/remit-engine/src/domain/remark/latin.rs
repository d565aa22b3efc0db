//! Latin-script validation for manually entered remarks.

use crate::domain::shared::ValidationError;

/// Punctuation accepted in payment references, in addition to Latin
/// letters, digits and spaces.
const ALLOWED_PUNCTUATION: &str = ".,/-()'+:?!\"%&*;<>=@#_";

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(c)
}

/// Validate free text destined for a bank payment remark.
///
/// Rejects strings exceeding `max_len` and strings containing characters
/// outside the allowed Latin set, reporting a human-readable reason for
/// the first violation found. Validation is pure: an unchanged valid
/// string always revalidates as valid.
pub fn validate_latin_text(value: &str, max_len: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > max_len {
        return Err(ValidationError::new(
            "transaction_remark",
            format!("exceeds maximum length of {max_len} characters ({length} entered)"),
        ));
    }

    if let Some(c) = value.chars().find(|c| !is_allowed_char(*c)) {
        return Err(ValidationError::new(
            "transaction_remark",
            format!("character '{c}' is not allowed; use Latin letters, digits and basic punctuation"),
        ));
    }

    Ok(())
}
