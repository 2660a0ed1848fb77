//! BRIN (Basisregistratie Instellingen, Dutch school identifier).
//!
//! A 4-character code — two digits followed by two letters — optionally
//! extended with a two-digit location suffix. There is no check digit;
//! validation is purely structural.
//!
//! ```
//! use idnum::nl::brin;
//!
//! assert_eq!(brin::validate("05 KO").unwrap(), "05KO");
//! assert_eq!(brin::validate("05KO01").unwrap(), "05KO01");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::strings::clean;

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-']).to_uppercase()
}

/// Check that the number is a valid BRIN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 4 && number.chars().count() != 6 {
        return Err(ValidationError::InvalidLength);
    }
    let bytes = number.as_bytes();
    if !number.is_ascii()
        || !bytes[..2].iter().all(u8::is_ascii_digit)
        || !bytes[2..4].iter().all(u8::is_ascii_uppercase)
        || !bytes[4..].iter().all(u8::is_ascii_digit)
    {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(number)
}

/// True when the number is a valid BRIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The BRIN has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_brins() {
        assert_eq!(validate("05KO").unwrap(), "05KO");
        assert_eq!(validate("05ko").unwrap(), "05KO");
        assert_eq!(validate("11BW03").unwrap(), "11BW03");
    }

    #[test]
    fn structural_failures() {
        assert_eq!(validate("0K5O"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("05K1"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("05KOAA"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate("05K"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("05KO1"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("05KO011"), Err(ValidationError::InvalidLength));
    }
}
