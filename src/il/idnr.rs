//! Identity Number (Mispar Zehut, Israeli personal identifier).
//!
//! Up to 9 digits; official documents zero-pad to 9, and so does
//! [`compact`], so the canonical form is always the padded one. Leading
//! zeros do not change the Luhn sum.
//!
//! ```
//! use idnum::il::idnr;
//!
//! assert_eq!(idnr::validate("3993374-2").unwrap(), "039933742");
//! assert_eq!(idnr::validate("039933742").unwrap(), "039933742");
//! ```

use crate::checksum::luhn;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and zero-pad short all-digit forms to 9 digits.
pub fn compact(number: &str) -> String {
    let number = clean(number, &[' ', '-']);
    if number.len() < 9 && is_digits(&number) {
        format!("{number:0>9}")
    } else {
        number
    }
}

/// Check that the number is a valid identity number and return the
/// canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.is_empty() || number.len() > 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.bytes().all(|b| b == b'0') {
        // Luhn-clean but never issued.
        return Err(ValidationError::InvalidComponent);
    }
    luhn::validate(&number, "0123456789")?;
    Ok(number)
}

/// True when the number is a valid identity number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The identity number has no conventional grouping; `format` only
/// compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("039933742").unwrap(), "039933742");
    }

    #[test]
    fn short_forms_zero_pad() {
        assert_eq!(compact("3993374-2"), "039933742");
        assert_eq!(validate("3993374-2").unwrap(), "039933742");
        assert_eq!(validate("39933742").unwrap(), "039933742");
    }

    #[test]
    fn all_zero_rejected() {
        assert_eq!(validate("0"), Err(ValidationError::InvalidComponent));
        assert_eq!(
            validate("000-000-000"),
            Err(ValidationError::InvalidComponent)
        );
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(validate("039933743"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate(""), Err(ValidationError::InvalidLength));
        assert_eq!(validate("0399337421"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn bad_format() {
        assert_eq!(validate("03993374a"), Err(ValidationError::InvalidFormat));
    }
}
