//! Company Number (Mispar Chevra, Israeli company registration).
//!
//! A 9-digit number from the Registrar of Companies. The leading digit
//! names the registration class — the registrar currently issues companies
//! in the 5 range, held here as data so the rule can widen without code
//! changes. The full number passes the Luhn test.
//!
//! ```
//! use idnum::il::hp;
//!
//! assert_eq!(hp::validate("512345679").unwrap(), "512345679");
//! assert!(hp::validate("412345675").is_err());
//! ```

use crate::checksum::luhn;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Registration-class digits the registrar issues.
const VALID_PREFIXES: [char; 1] = ['5'];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

/// Check that the number is a valid company number and return the
/// canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let first = number.chars().next().unwrap_or('0');
    if !VALID_PREFIXES.contains(&first) {
        return Err(ValidationError::InvalidComponent);
    }
    luhn::validate(&number, "0123456789")?;
    Ok(number)
}

/// True when the number is a valid company number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The company number has no conventional grouping; `format` only
/// compacts.
pub fn format(number: &str) -> String {
    compact(number)
}
