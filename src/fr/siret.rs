//! SIRET (French establishment identification number).
//!
//! A 14-digit number identifying one establishment of a company: the
//! 9-digit SIREN followed by a 5-digit internal classification (NIC). Both
//! the embedded SIREN and the full number must pass the Luhn test, except
//! for La Poste establishments (prefix 356000000) where the plain digit sum
//! must be a multiple of 5.
//!
//! ```
//! use idnum::fr::siret;
//!
//! assert_eq!(siret::validate("404 833 048 00022").unwrap(), "40483304800022");
//! assert_eq!(siret::to_siren("40483304800022").unwrap(), "404833048");
//! ```

use crate::checksum::luhn;
use crate::error::{ValidationError, ValidationResult};
use crate::fr::siren;
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

/// Check that the number is a valid SIRET and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 14 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.starts_with("356000000") {
        // La Poste issues NICs that do not Luhn-validate; their rule is a
        // plain digit sum divisible by 5.
        let sum: u32 = number.bytes().map(|b| u32::from(b - b'0')).sum();
        if sum % 5 != 0 {
            return Err(ValidationError::InvalidChecksum);
        }
    } else {
        siren::validate(&number[..9])?;
        luhn::validate(&number, "0123456789")?;
    }
    Ok(number)
}

/// True when the number is a valid SIRET.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `404 833 048 00022`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 14 && is_digits(&number) {
        format!(
            "{} {} {} {}",
            &number[..3],
            &number[3..6],
            &number[6..9],
            &number[9..]
        )
    } else {
        number
    }
}

/// Return the SIREN of the company owning this establishment.
pub fn to_siren(number: &str) -> ValidationResult {
    let number = validate(number)?;
    Ok(number[..9].to_string())
}

/// Convert a valid SIRET to the company's French VAT number.
pub fn to_tva(number: &str) -> ValidationResult {
    let number = validate(number)?;
    siren::to_tva(&number[..9])
}
