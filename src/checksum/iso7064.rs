//! ISO 7064 check-character algorithms.
//!
//! Two family members are implemented: MOD 11-2 (one check character, `0`–`9`
//! or `X`) and MOD 97-10 (two check digits, the IBAN/LEI family). MOD 97-10
//! never materializes the big integer the standard describes; the remainder
//! is folded left-to-right with machine-word arithmetic, expanding each
//! letter to its two-digit value on the fly.

use crate::error::ValidationError;

/// Compute the MOD 97-10 remainder of `number`.
///
/// Digits keep their value, letters `A`–`Z` (and `a`–`z`) expand to 10–35.
/// A number carrying correct check digits leaves remainder 1.
///
/// ```
/// use idnum::checksum::iso7064;
///
/// // A known-valid LEI (Bank for International Settlements).
/// assert_eq!(iso7064::mod_97_10_checksum("5493006MHB84DD0ZWV18").unwrap(), 1);
/// ```
pub fn mod_97_10_checksum(number: &str) -> Result<u32, ValidationError> {
    let mut remainder: u32 = 0;
    for byte in number.bytes() {
        match byte {
            b'0'..=b'9' => {
                remainder = (remainder * 10 + u32::from(byte - b'0')) % 97;
            }
            b'A'..=b'Z' => {
                remainder = (remainder * 100 + u32::from(byte - b'A') + 10) % 97;
            }
            b'a'..=b'z' => {
                remainder = (remainder * 100 + u32::from(byte - b'a') + 10) % 97;
            }
            _ => return Err(ValidationError::InvalidFormat),
        }
    }
    Ok(remainder)
}

/// Check that `number` (check digits included) satisfies MOD 97-10.
pub fn validate_mod_97_10(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    if mod_97_10_checksum(number)? != 1 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Compute the two MOD 97-10 check digits for `number` (without them).
///
/// The digits are chosen so that `number` followed by the returned pair
/// leaves remainder 1.
pub fn calc_mod_97_10_check_digits(number: &str) -> Result<String, ValidationError> {
    let mut padded = String::with_capacity(number.len() + 2);
    padded.push_str(number);
    padded.push_str("00");
    let remainder = mod_97_10_checksum(&padded)?;
    Ok(format!("{:02}", (98 - remainder) % 97))
}

/// Compute the MOD 11-2 checksum of `number`.
///
/// Characters must be digits, except that the final position may be `X`
/// (value 10). A number carrying a correct check character has checksum 1.
pub fn mod_11_2_checksum(number: &str) -> Result<u32, ValidationError> {
    let mut check: u32 = 0;
    let last = number.len().saturating_sub(1);
    for (i, byte) in number.bytes().enumerate() {
        let value = match byte {
            b'0'..=b'9' => u32::from(byte - b'0'),
            b'X' if i == last => 10,
            _ => return Err(ValidationError::InvalidFormat),
        };
        check = (2 * check + value) % 11;
    }
    Ok(check)
}

/// Check that `number` (check character included) satisfies MOD 11-2.
pub fn validate_mod_11_2(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    if mod_11_2_checksum(number)? != 1 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Compute the MOD 11-2 check character (`0`–`9` or `X`) for `number`.
pub fn calc_mod_11_2_check_digit(number: &str) -> Result<char, ValidationError> {
    let check = mod_11_2_checksum(number)?;
    let value = (23 - 2 * check) % 11;
    Ok(match value {
        10 => 'X',
        v => char::from(b'0' + v as u8),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-valid LEIs from the GLEIF public database.
    #[test]
    fn mod_97_10_valid_leis() {
        assert!(validate_mod_97_10("5493006MHB84DD0ZWV18").is_ok());
        assert!(validate_mod_97_10("7LTWFZYICNSX8D621K86").is_ok());
        assert!(validate_mod_97_10("HWUPKR0MPOU8FGXBT394").is_ok());
    }

    #[test]
    fn mod_97_10_corrupt_check_digit() {
        assert_eq!(
            validate_mod_97_10("5493006MHB84DD0ZWV19"),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn mod_97_10_check_digit_round_trip() {
        let body = "5493006MHB84DD0ZWV";
        let check = calc_mod_97_10_check_digits(body).unwrap();
        assert_eq!(check, "18");
        assert!(validate_mod_97_10(&format!("{body}{check}")).is_ok());
    }

    #[test]
    fn mod_97_10_rejects_punctuation() {
        assert_eq!(
            mod_97_10_checksum("DE44 5001"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn mod_11_2_known_values() {
        // ISO 7064's own example: 079 has check digit X.
        assert_eq!(calc_mod_11_2_check_digit("079").unwrap(), 'X');
        assert!(validate_mod_11_2("079X").is_ok());
        assert_eq!(
            validate_mod_11_2("0790"),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn mod_11_2_x_only_allowed_last() {
        assert_eq!(
            mod_11_2_checksum("0X79"),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn mod_11_2_round_trip_digits() {
        for body in ["12345678901234", "000", "999999999"] {
            let check = calc_mod_11_2_check_digit(body).unwrap();
            assert!(validate_mod_11_2(&format!("{body}{check}")).is_ok());
        }
    }
}
