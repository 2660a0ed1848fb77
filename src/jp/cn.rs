//! CN (Corporate Number, 法人番号, hōjin bangō).
//!
//! A 13-digit number assigned by the National Tax Agency. Unusually, the
//! check digit comes first: over the remaining 12 digits, weights alternate
//! 1, 2 from the right and the check digit is `9 - sum mod 9`, so it is
//! always 1–9.
//!
//! ```
//! use idnum::jp::cn;
//!
//! assert_eq!(cn::validate("7000012050002").unwrap(), "7000012050002");
//! assert_eq!(cn::format("7000012050002"), "7-0000-1205-0002");
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

/// Compute the leading check digit for the 12-digit body.
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    let sum = weighted::weighted_sum_right(body, &[1, 2], 9)?;
    Ok(char::from(b'0' + (9 - sum) as u8))
}

/// Check that the number is a valid corporate number and return the
/// canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 13 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if calc_check_digit(&number[1..])? != number.chars().next().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid corporate number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `7-0000-1205-0002`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 13 && is_digits(&number) {
        format!(
            "{}-{}-{}-{}",
            &number[..1],
            &number[1..5],
            &number[5..9],
            &number[9..]
        )
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers() {
        assert_eq!(validate("7000012050002").unwrap(), "7000012050002");
        assert_eq!(validate("7-0000-1205-0002").unwrap(), "7000012050002");
    }

    #[test]
    fn bad_check_digit() {
        assert_eq!(
            validate("8000012050002"),
            Err(ValidationError::InvalidChecksum)
        );
        // A zero check digit can never occur.
        assert_eq!(
            validate("0000012050002"),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn bad_length_and_format() {
        assert_eq!(
            validate("700001205000"),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(
            validate("700001205000a"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn check_digit_round_trip() {
        let check = calc_check_digit("000012050002").unwrap();
        assert_eq!(check, '7');
    }
}
