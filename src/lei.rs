//! LEI (Legal Entity Identifier, ISO 17442).
//!
//! Twenty characters: a four-character LOU prefix, fourteen entity-specific
//! characters, and two check digits satisfying ISO 7064 MOD 97-10.
//!
//! ```
//! use idnum::lei;
//!
//! // The LEI of the Bank for International Settlements.
//! assert_eq!(lei::validate("5493006MHB84DD0ZWV18").unwrap(), "5493006MHB84DD0ZWV18");
//! ```

use crate::checksum::iso7064;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::clean;

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-']).to_uppercase()
}

/// Check that the number is a valid LEI and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 20 {
        return Err(ValidationError::InvalidLength);
    }
    let bytes = number.as_bytes();
    if !number.is_ascii()
        || !bytes[..18]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        || !bytes[18..].iter().all(u8::is_ascii_digit)
    {
        return Err(ValidationError::InvalidFormat);
    }
    iso7064::validate_mod_97_10(&number)?;
    Ok(number)
}

/// True when the number is a valid LEI.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The LEI has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}
