//! IMO number (International Maritime Organization ship identifier).
//!
//! Seven digits, usually written with an `IMO ` prefix. The first six
//! digits weighted 7 down to 2 are summed; the final digit of the sum is
//! the check digit.
//!
//! ```
//! use idnum::imo;
//!
//! assert_eq!(imo::validate("IMO 9319466").unwrap(), "9319466");
//! assert_eq!(imo::format("8814275"), "IMO 8814275");
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

const WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];

/// Strip separators and a leading `IMO` prefix.
pub fn compact(number: &str) -> String {
    let number = clean(number, &[' ', '.', '-']).to_uppercase();
    match number.strip_prefix("IMO") {
        Some(rest) => rest.to_string(),
        None => number,
    }
}

/// Check that the number is a valid IMO number and return the canonical
/// form (digits only).
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 7 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let sum = weighted::weighted_sum(&number[..6], &WEIGHTS, 10)?;
    if char::from(b'0' + sum as u8) != number.chars().next_back().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid IMO number.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number with its conventional `IMO ` prefix.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 7 && is_digits(&number) {
        format!("IMO {number}")
    } else {
        number
    }
}
