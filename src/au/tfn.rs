//! TFN (Australian Tax File Number).
//!
//! A personal or entity tax reference of 8 or 9 digits (8-digit numbers
//! were issued to individuals until 1989). The whole number, weighted
//! 1, 4, 3, 7, 5, 8, 6, 9, 10 from the left, must sum to a multiple of 11.
//!
//! ```
//! use idnum::au::tfn;
//!
//! assert_eq!(tfn::validate("123 456 782").unwrap(), "123456782");
//! assert_eq!(tfn::format("123456782"), "123 456 782");
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

const WEIGHTS: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

/// Check that the number is a valid TFN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 8 && number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    // An 8-digit number simply uses the first eight weights.
    if weighted::weighted_sum(&number, &WEIGHTS, 11)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid TFN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number into groups of three digits from the left.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if !is_digits(&number) {
        return number;
    }
    let mut out = String::with_capacity(number.len() + number.len() / 3);
    for (i, c) in number.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
