//! ABN (Australian Business Number).
//!
//! The ABN is an 11-digit identifier issued by the Australian Business
//! Register. The first two digits are check digits over the last nine: the
//! first digit is reduced by one, the digits are multiplied by the weights
//! 10, 1, 3, 5, ... 19, and the sum must be divisible by 89.
//!
//! ```
//! use idnum::au::abn;
//!
//! assert_eq!(abn::validate("83 914 571 673").unwrap(), "83914571673");
//! assert_eq!(abn::format("51824753556"), "51 824 753 556");
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

const WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

fn checksum(number: &str) -> Result<u32, ValidationError> {
    // The first digit is reduced by one before weighting, which is the same
    // as subtracting its weight from the plain weighted sum.
    let sum = weighted::weighted_sum(number, &WEIGHTS, 89)?;
    Ok((sum + 89 - 10) % 89)
}

/// Compute the two leading check digits for the 9-digit body.
///
/// This is the inverse of the validation rule: with `S` the weighted sum of
/// the body, the prefix is the unique two-digit value making the full
/// weighted sum divisible by 89.
pub fn calc_check_digits(body: &str) -> Result<String, ValidationError> {
    if body.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    let sum = weighted::weighted_sum(body, &WEIGHTS[2..], 89)?;
    Ok(format!("{:02}", (89 - sum) % 89 + 10))
}

/// Check that the number is a valid ABN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if checksum(&number)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid ABN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `83 914 571 673`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 11 && is_digits(&number) {
        format!(
            "{} {} {} {}",
            &number[..2],
            &number[2..5],
            &number[5..8],
            &number[8..]
        )
    } else {
        number
    }
}
