//! CUSIP (North American security identification).
//!
//! Nine characters: a six-character issuer code, a two-character issue
//! code, and a check digit. The alphabet extends the digits and letters
//! with `*`, `@` and `#`, reserved for internal use. The check digit is a
//! Luhn-style sum over the character values (letters are 10 + alphabet
//! position), doubling every second value from the left of the body.
//!
//! ```
//! use idnum::cusip;
//!
//! assert_eq!(cusip::validate("91324PAE2").unwrap(), "91324PAE2");
//! assert_eq!(cusip::to_isin("91324PAE2").unwrap(), "US91324PAE25");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::isin;
use crate::strings::clean;

const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*@#";

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-']).to_uppercase()
}

/// Compute the check digit over the eight-character body.
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    let mut sum: u32 = 0;
    for (i, c) in body.chars().enumerate() {
        let mut value = ALPHABET
            .chars()
            .position(|a| a == c)
            .ok_or(ValidationError::InvalidFormat)? as u32;
        if i % 2 == 1 {
            value *= 2;
        }
        sum += value / 10 + value % 10;
    }
    Ok(char::from(b'0' + ((10 - sum % 10) % 10) as u8))
}

/// Check that the number is a valid CUSIP and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.chars().all(|c| ALPHABET.contains(c)) {
        return Err(ValidationError::InvalidFormat);
    }
    if calc_check_digit(&number[..8])? != number.chars().next_back().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid CUSIP.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The CUSIP has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

/// Convert a valid CUSIP to its US ISIN.
pub fn to_isin(number: &str) -> ValidationResult {
    let number = validate(number)?;
    isin::from_natid("US", &number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cusips() {
        assert_eq!(validate("91324PAE2").unwrap(), "91324PAE2");
        assert_eq!(validate("037833100").unwrap(), "037833100");
        assert_eq!(validate("91324pae2").unwrap(), "91324PAE2");
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(validate("91324PAE3"), Err(ValidationError::InvalidChecksum));
        // A letter where the check digit belongs never matches the
        // computed digit, which makes it a checksum failure, not a format
        // failure: the alphabet admits it.
        assert_eq!(validate("DUS0421CN"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn reserved_characters_accepted() {
        let check = calc_check_digit("12345*@#").unwrap();
        let number = format!("12345*@#{check}");
        assert!(is_valid(&number));
    }

    #[test]
    fn bad_format() {
        assert_eq!(validate("91324PAE!"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate("91324PAE"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn converts_to_isin() {
        assert_eq!(to_isin("91324PAE2").unwrap(), "US91324PAE25");
    }
}
