//! TVA (French VAT number, numéro de TVA intracommunautaire).
//!
//! The national part is 11 characters: a two-character key followed by the
//! company's 9-digit SIREN, which must itself validate (except for the
//! 000-prefixed numbers issued to Monaco entities). The key is usually
//! numeric and satisfies `key == (siren · 100 + 12) mod 97`; keys
//! containing letters (issued to foreign entities) use a positional formula
//! over an alphabet that excludes `I` and `O`.
//!
//! ```
//! use idnum::fr::tva;
//!
//! assert_eq!(tva::validate("FR 46 443 121 975").unwrap(), "46443121975");
//! assert_eq!(tva::format("46443121975"), "46 443 121 975");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::fr::siren;
use crate::strings::is_digits;

/// Characters allowed in the key; `I` and `O` are excluded to avoid
/// confusion with `1` and `0`.
const ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Strip separators, uppercase, and drop a leading `FR` country prefix.
pub fn compact(number: &str) -> String {
    let number: String = number
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match number.strip_prefix("FR") {
        Some(rest) => rest.to_string(),
        None => number,
    }
}

fn alphabet_index(c: char) -> Option<u64> {
    ALPHABET.chars().position(|a| a == c).map(|i| i as u64)
}

/// Check that the number is a valid French VAT number and return the
/// canonical form (without the `FR` prefix).
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.is_ascii() {
        return Err(ValidationError::InvalidFormat);
    }
    let key: Vec<char> = number[..2].chars().collect();
    if !key.iter().all(|&c| alphabet_index(c).is_some()) || !is_digits(&number[2..]) {
        return Err(ValidationError::InvalidFormat);
    }
    // Whatever the key shape, the embedded SIREN must be valid on its own,
    // except for the 000-prefixed numbers issued to Monaco entities.
    if &number[2..5] != "000" {
        siren::validate(&number[2..])?;
    }
    if key[0].is_ascii_digit() && key[1].is_ascii_digit() {
        let mut remainder: u32 = 0;
        for byte in number[2..].bytes().chain(*b"12") {
            remainder = (remainder * 10 + u32::from(byte - b'0')) % 97;
        }
        if number[..2].parse::<u32>().unwrap_or(98) != remainder {
            return Err(ValidationError::InvalidChecksum);
        }
    } else {
        // The position of each key character in the alphabet feeds a
        // combined check value compared against the body mod 11.
        let c1 = alphabet_index(key[0]).unwrap_or(0);
        let c2 = alphabet_index(key[1]).unwrap_or(0);
        let check = if key[0].is_ascii_digit() {
            c1 * 24 + c2 - 10
        } else {
            c1 * 34 + c2 - 100
        };
        let body: u64 = number[2..].parse().map_err(|_| ValidationError::InvalidFormat)?;
        if (body + 1 + check / 11) % 11 != check % 11 {
            return Err(ValidationError::InvalidChecksum);
        }
    }
    Ok(number)
}

/// True when the number is a valid French VAT number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `46 443 121 975`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 11 && number.chars().all(|c| c.is_ascii_alphanumeric()) {
        format!(
            "{} {} {} {}",
            &number[..2],
            &number[2..5],
            &number[5..8],
            &number[8..]
        )
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numeric_key() {
        assert_eq!(validate("46443121975").unwrap(), "46443121975");
        assert_eq!(validate("FR 40 303 265 045").unwrap(), "40303265045");
        assert_eq!(validate("83404833048").unwrap(), "83404833048");
    }

    #[test]
    fn valid_alphanumeric_keys() {
        // Digit-then-letter and letter-first keys exercise both branches.
        assert_eq!(validate("0F404833048").unwrap(), "0F404833048");
        assert_eq!(validate("A7404833048").unwrap(), "A7404833048");
    }

    #[test]
    fn monaco_prefix_skips_siren_check() {
        assert_eq!(validate("34000123456").unwrap(), "34000123456");
        // Also with an alphanumeric key.
        assert_eq!(validate("A6000123456").unwrap(), "A6000123456");
    }

    #[test]
    fn bad_key() {
        assert_eq!(validate("47443121975"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("0G404833048"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn alphanumeric_key_checks_embedded_siren() {
        // The key shape does not exempt the SIREN from its own Luhn test.
        assert_eq!(validate("0F404833047"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("A7123456789"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn bad_embedded_siren() {
        assert_eq!(validate("46443121976"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn excluded_letters_rejected() {
        assert_eq!(validate("O6443121975"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("I6443121975"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate("4644312197"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn formatting() {
        assert_eq!(format("FR46443121975"), "46 443 121 975");
    }
}
