//! Registrikood (Estonian company registration number).
//!
//! An 8-digit number from the Estonian business register. The leading digit
//! selects the register: 1 for companies, 7 for state agencies, 8 for
//! non-profits, 9 for foundations. The final digit is a check digit computed
//! with the same two-pass mod 11 rule as the personal identity code.
//!
//! ```
//! use idnum::ee::registrikood;
//!
//! assert_eq!(registrikood::validate("12345678").unwrap(), "12345678");
//! assert!(registrikood::validate("32345674").is_err()); // register 3 unknown
//! ```

use crate::ee::ik;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Leading digits naming a known register.
const VALID_REGISTERS: [char; 4] = ['1', '7', '8', '9'];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

/// Check that the number is a valid registrikood and return the canonical
/// form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 8 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let first = number.chars().next().unwrap_or('0');
    if !VALID_REGISTERS.contains(&first) {
        return Err(ValidationError::InvalidComponent);
    }
    if ik::calc_check_digit(&number[..7])? != number.chars().next_back().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid registrikood.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The registrikood has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("12345678").unwrap(), "12345678");
        assert_eq!(validate("10000018").unwrap(), "10000018");
    }

    #[test]
    fn unknown_register_digit() {
        assert_eq!(validate("32345674"), Err(ValidationError::InvalidComponent));
        assert_eq!(validate("22345678"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(validate("12345679"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn bad_length_and_format() {
        assert_eq!(validate("1234567"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("1234567a"), Err(ValidationError::InvalidFormat));
    }
}
