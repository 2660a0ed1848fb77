//! SEDOL (Stock Exchange Daily Official List number).
//!
//! A 7-character code issued by the London Stock Exchange. The alphabet
//! excludes vowels; older codes are all digits, newer ones start with a
//! letter. Character values (digits as themselves, letters as 10 + position
//! in the Latin alphabet) weighted 1, 3, 1, 7, 3, 9, 1 must sum to a
//! multiple of 10.
//!
//! ```
//! use idnum::gb::sedol;
//!
//! assert_eq!(sedol::validate("B15KXQ8").unwrap(), "B15KXQ8");
//! assert_eq!(sedol::to_isin("B15KXQ8").unwrap(), "GB00B15KXQ89");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::isin;
use crate::strings::clean;

/// Permitted characters; vowels are excluded to avoid spelling words.
const ALPHABET: &str = "0123456789BCDFGHJKLMNPQRSTVWXYZ";

const WEIGHTS: [u32; 7] = [1, 3, 1, 7, 3, 9, 1];

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-']).to_uppercase()
}

fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        _ => c as u32 - 'A' as u32 + 10,
    }
}

/// Check that the number is a valid SEDOL and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 7 {
        return Err(ValidationError::InvalidLength);
    }
    if !number.chars().all(|c| ALPHABET.contains(c)) {
        return Err(ValidationError::InvalidFormat);
    }
    let sum: u32 = number
        .chars()
        .zip(WEIGHTS)
        .map(|(c, w)| char_value(c) * w)
        .sum();
    if sum % 10 != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid SEDOL.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The SEDOL has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

/// Convert a valid SEDOL to its UK ISIN (`GB00` prefix plus check digit).
pub fn to_isin(number: &str) -> ValidationResult {
    let number = validate(number)?;
    isin::from_natid("GB", &format!("00{number}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sedols() {
        assert_eq!(validate("B15KXQ8").unwrap(), "B15KXQ8");
        assert_eq!(validate("0263494").unwrap(), "0263494");
        assert_eq!(validate("b15kxq8").unwrap(), "B15KXQ8");
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(validate("B15KXQ7"), Err(ValidationError::InvalidChecksum));
        assert_eq!(validate("0263495"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn vowels_rejected() {
        assert_eq!(validate("BAAAAA8"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate("B15KXQ"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("B15KXQ89"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn converts_to_isin() {
        let converted = to_isin("B15KXQ8").unwrap();
        assert_eq!(converted, "GB00B15KXQ89");
        assert!(isin::is_valid(&converted));
    }
}
