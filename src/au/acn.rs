//! ACN (Australian Company Number).
//!
//! A 9-digit identifier issued by ASIC. The last digit is a check digit:
//! the first eight digits weighted 8 down to 1, summed, and the complement
//! of the sum mod 10 must equal it. Appending ABN check digits to an ACN
//! yields the company's ABN, which [`to_abn`] computes.
//!
//! ```
//! use idnum::au::acn;
//!
//! assert_eq!(acn::validate("004 085 616").unwrap(), "004085616");
//! assert_eq!(acn::to_abn("002 724 334").unwrap(), "43002724334");
//! ```

use crate::au::abn;
use crate::checksum::weighted;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::{clean, is_digits};

const WEIGHTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Strip separators and surrounding whitespace.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-'])
}

/// Compute the check digit for the first eight digits.
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    let sum = weighted::weighted_sum(body, &WEIGHTS, 10)?;
    Ok(char::from(b'0' + ((10 - sum) % 10) as u8))
}

/// Check that the number is a valid ACN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if calc_check_digit(&number[..8])? != number.chars().next_back().unwrap_or('0') {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// True when the number is a valid ACN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number to the standard presentation: `004 085 616`.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if number.len() == 9 && is_digits(&number) {
        format!("{} {} {}", &number[..3], &number[3..6], &number[6..])
    } else {
        number
    }
}

/// Convert a valid ACN to the corresponding ABN.
///
/// The two ABN check digits are computed over the ACN body and prepended;
/// the result passes [`abn::validate`].
pub fn to_abn(number: &str) -> ValidationResult {
    let number = validate(number)?;
    let prefix = abn::calc_check_digits(&number)?;
    Ok(format!("{prefix}{number}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_acns() {
        assert_eq!(validate("004 085 616").unwrap(), "004085616");
        assert_eq!(validate("002724334").unwrap(), "002724334");
        assert_eq!(validate("010499966").unwrap(), "010499966");
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(validate("004085617"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn bad_length_and_format() {
        assert_eq!(validate("00408561"), Err(ValidationError::InvalidLength));
        assert_eq!(validate("00408561a"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn converts_to_abn() {
        let converted = to_abn("002 724 334").unwrap();
        assert_eq!(converted, "43002724334");
        assert!(abn::is_valid(&converted));
    }

    #[test]
    fn to_abn_rejects_invalid_acn() {
        assert_eq!(to_abn("002724335"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn formatting() {
        assert_eq!(format("004085616"), "004 085 616");
    }
}
