//! CBU (Clave Bancaria Uniforme, Argentine bank account key).
//!
//! A 22-digit number in two blocks: 8 digits of bank and branch codes and
//! 14 digits of account number, each block ending in its own check digit.
//! Both check digits use the same rule: the preceding digits weighted
//! 3, 1, 7, 9 cycling from the right, summed, and the complement mod 10.
//!
//! ```
//! use idnum::ar::cbu;
//!
//! assert_eq!(
//!     cbu::validate("2850590940090418135201").unwrap(),
//!     "2850590940090418135201"
//! );
//! assert_eq!(
//!     cbu::format("2850590940090418135201"),
//!     "28505909 40090418135201"
//! );
//! ```

use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-'])
}

fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    let sum = weighted::weighted_sum_right(body, &[3, 1, 7, 9], 10)?;
    Ok(char::from(b'0' + ((10 - sum) % 10) as u8))
}

/// Check that the number is a valid CBU and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 22 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let bytes = number.as_bytes();
    if calc_check_digit(&number[..7])? != char::from(bytes[7])
        || calc_check_digit(&number[8..21])? != char::from(bytes[21])
    {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid CBU.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number with the conventional space between the two blocks.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 22 && is_digits(&number) {
        format!("{} {}", &number[..8], &number[8..])
    } else {
        number
    }
}
