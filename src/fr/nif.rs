//! NIF (French tax identification number, numéro fiscal de référence).
//!
//! A 13-digit number assigned to individuals by the DGFiP. There is no
//! public check digit; validation is structural plus the leading digit,
//! which must be 0–3.
//!
//! ```
//! use idnum::fr::nif;
//!
//! assert_eq!(nif::validate("0701987765432").unwrap(), "0701987765432");
//! assert!(nif::validate("9701987765432").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

/// Check that the number is a plausible NIF and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 13 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if !matches!(number.as_bytes()[0], b'0'..=b'3') {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(number)
}

/// True when the number is a plausible NIF.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `07 01 987 765 432`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 13 && is_digits(&number) {
        format!(
            "{} {} {} {} {}",
            &number[..2],
            &number[2..4],
            &number[4..7],
            &number[7..10],
            &number[10..]
        )
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_nifs() {
        assert_eq!(validate("0701987765432").unwrap(), "0701987765432");
        assert_eq!(validate("30 23 217 600 011").unwrap(), "3023217600011");
    }

    #[test]
    fn bad_leading_digit() {
        assert_eq!(
            validate("9701987765432"),
            Err(ValidationError::InvalidComponent)
        );
        assert_eq!(
            validate("4701987765432"),
            Err(ValidationError::InvalidComponent)
        );
    }

    #[test]
    fn length_is_checked_before_format() {
        // A 12-digit all-numeric input reports the length problem.
        assert_eq!(
            validate("070198776543"),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(
            validate("07019877654321"),
            Err(ValidationError::InvalidLength)
        );
    }

    #[test]
    fn bad_format() {
        assert_eq!(
            validate("070198776543a"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(format("0701987765432"), "07 01 987 765 432");
    }
}
