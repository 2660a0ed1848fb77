//! BIC (Business Identifier Code, ISO 9362).
//!
//! Eight or eleven characters: a four-letter institution code, a two-letter
//! country code, a two-character location code, and an optional
//! three-character branch code. There is no check digit; validation is
//! structural plus the country component.
//!
//! ```
//! use idnum::bic;
//!
//! assert_eq!(bic::validate("COBA DEFF XXX").unwrap(), "COBADEFFXXX");
//! assert_eq!(bic::branch("COBADEFFXXX"), Some("XXX".to_string()));
//! ```

use crate::countries;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::clean;

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-']).to_uppercase()
}

/// Check that the number is a valid BIC and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 8 && number.chars().count() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    let bytes = number.as_bytes();
    if !number.is_ascii()
        || !bytes[..6].iter().all(u8::is_ascii_uppercase)
        || !bytes[6..]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(ValidationError::InvalidFormat);
    }
    if !countries::is_iso_3166(&number[4..6]) {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(number)
}

/// True when the number is a valid BIC.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The BIC has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

/// Return the branch code of an 11-character BIC, if present.
pub fn branch(number: &str) -> Option<String> {
    let number = validate(number).ok()?;
    if number.len() == 11 {
        Some(number[8..].to_string())
    } else {
        None
    }
}

/// True for BICs whose location code marks a test connection (ends in 0).
pub fn is_test_bic(number: &str) -> bool {
    matches!(validate(number), Ok(n) if n.as_bytes()[7] == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bics() {
        assert_eq!(validate("DEUTDEFF").unwrap(), "DEUTDEFF");
        assert_eq!(validate("COBADEFFXXX").unwrap(), "COBADEFFXXX");
        assert_eq!(validate("nwbk gb 2l").unwrap(), "NWBKGB2L");
    }

    #[test]
    fn unknown_country() {
        assert_eq!(validate("DEUTXQFF"), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn structural_failures() {
        assert_eq!(validate("DEU1DEFF"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("DEUTDEF!"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn bad_length() {
        assert_eq!(validate("DEUTDEFFXX"), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn branch_and_test_codes() {
        assert_eq!(branch("COBADEFFXXX"), Some("XXX".to_string()));
        assert_eq!(branch("DEUTDEFF"), None);
        assert!(is_test_bic("DEUTDEF0"));
        assert!(!is_test_bic("DEUTDEFF"));
    }
}
