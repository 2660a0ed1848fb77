//! Isikukood (Estonian personal identity code).
//!
//! An 11-digit code of the form GYYMMDDSSSC: G encodes century and gender
//! (1–8), YYMMDD is the birth date, SSS a birth-order serial and C the check
//! digit. The check digit is a two-pass weighted sum mod 11: weights
//! 1–9, 1 on the first pass; if that yields 10, weights 3–9, 1–3 on a second
//! pass; a second 10 becomes 0.
//!
//! ```
//! use idnum::ee::ik;
//!
//! assert_eq!(ik::validate("36805280109").unwrap(), "36805280109");
//! assert!(ik::validate("36813280109").is_err()); // month 13
//! ```

use chrono::NaiveDate;

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

const WEIGHTS_PASS1: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const WEIGHTS_PASS2: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

/// Compute the check digit over the body (all digits except the last).
///
/// Shorter bodies simply use a prefix of the weight vectors; the Estonian
/// company registration number reuses this rule over 7 digits.
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    let mut check = weighted::weighted_sum(body, &WEIGHTS_PASS1, 11)?;
    if check == 10 {
        check = weighted::weighted_sum(body, &WEIGHTS_PASS2, 11)?;
    }
    if check == 10 {
        check = 0;
    }
    Ok(char::from(b'0' + check as u8))
}

/// Extract the birth date, if the code carries a plausible one.
pub fn birth_date(number: &str) -> Option<NaiveDate> {
    let number = compact(number);
    if number.len() != 11 || !is_digits(&number) {
        return None;
    }
    let century_digit: u32 = number[..1].parse().ok()?;
    if !(1..=8).contains(&century_digit) {
        return None;
    }
    let century = 1800 + (century_digit - 1) / 2 * 100;
    let year: u32 = number[1..3].parse().ok()?;
    let month: u32 = number[3..5].parse().ok()?;
    let day: u32 = number[5..7].parse().ok()?;
    NaiveDate::from_ymd_opt((century + year) as i32, month, day)
}

/// Check that the number is a valid isikukood and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if birth_date(&number).is_none() {
        return Err(ValidationError::InvalidComponent);
    }
    if calc_check_digit(&number[..10])? != number.chars().next_back().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid isikukood.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The isikukood has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}
