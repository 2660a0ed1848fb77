use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of reasons a number can fail validation.
///
/// `validate` raises exactly one of these per call; the first failing step of
/// the compact → length → format → component → checksum pipeline decides
/// which, so the reported kind is deterministic for any given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The number contains characters outside the scheme's alphabet, or its
    /// positional structure is wrong.
    #[error("the number has an invalid format")]
    InvalidFormat,

    /// The number's length is not among the scheme's permitted lengths.
    #[error("the number has an invalid length")]
    InvalidLength,

    /// A semantic sub-field is out of range (entity-class digit, embedded
    /// country code, embedded date, ...).
    #[error("the number contains an invalid component")]
    InvalidComponent,

    /// Structure is fine but the check digit(s) do not match.
    #[error("the number's check digits are invalid")]
    InvalidChecksum,
}

/// Shorthand for the result of every `validate` function in this crate.
pub type ValidationResult = Result<String, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ValidationError::InvalidChecksum.to_string(),
            "the number's check digits are invalid"
        );
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "the number has an invalid length"
        );
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            ValidationError::InvalidFormat,
            ValidationError::InvalidLength,
            ValidationError::InvalidComponent,
            ValidationError::InvalidChecksum,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
