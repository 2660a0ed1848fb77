//! EAN (International Article Number) and friends.
//!
//! Covers EAN-13, EAN-8 and 14-digit GTINs, which includes the GS1 Global
//! Location Numbers used for Peppol routing. The last digit is the GS1
//! check digit: the body weighted 3, 1, 3, ... from the right, summed, and
//! the complement mod 10.
//!
//! ```
//! use idnum::ean;
//!
//! assert_eq!(ean::validate("4006381333931").unwrap(), "4006381333931");
//! assert_eq!(ean::validate("96385074").unwrap(), "96385074");
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

/// Compute the check digit for the body (the number without its last
/// digit).
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    weighted::gs1_check_digit(body)
}

/// Check that the number is a valid EAN/GTIN and return the canonical
/// form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if !matches!(number.len(), 8 | 13 | 14) {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if calc_check_digit(&number[..number.len() - 1])? != number.chars().next_back().unwrap_or('0')
    {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid EAN/GTIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The EAN has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}
