//! SIREN (French company identification number).
//!
//! A 9-digit number issued by INSEE identifying a legal entity. The whole
//! number, check digit included, must pass the Luhn test. A SIREN extends
//! to the company's VAT number by prepending a two-digit key, which
//! [`to_tva`] computes.
//!
//! ```
//! use idnum::fr::siren;
//!
//! assert_eq!(siren::validate("404 833 048").unwrap(), "404833048");
//! assert_eq!(siren::to_tva("443 121 975").unwrap(), "46 443 121 975");
//! ```

use crate::checksum::luhn;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

/// Check that the number is a valid SIREN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    luhn::validate(&number, "0123456789")?;
    Ok(number)
}

/// True when the number is a valid SIREN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `404 833 048`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 9 && is_digits(&number) {
        format!("{} {} {}", &number[..3], &number[3..6], &number[6..])
    } else {
        number
    }
}

/// Convert a valid SIREN to the French VAT number it implies.
///
/// The two-digit key satisfies `key == (siren * 100 + 12) mod 97`; the
/// returned string is the conventional presentation (`"46 443 121 975"`)
/// and passes [`tva::validate`](crate::fr::tva::validate).
pub fn to_tva(number: &str) -> ValidationResult {
    let number = validate(number)?;
    let mut remainder: u32 = 0;
    for byte in number.bytes().chain(*b"12") {
        remainder = (remainder * 10 + u32::from(byte - b'0')) % 97;
    }
    Ok(format!("{remainder:02} {}", format(&number)))
}
