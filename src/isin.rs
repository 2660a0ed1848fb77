//! ISIN (International Securities Identification Number).
//!
//! Twelve characters: a two-letter country (or supranational) prefix, a
//! nine-character national security identifier (NSIN), and one check digit.
//! For the checksum every letter expands to its two-digit value (A = 10 …
//! Z = 35) and the resulting digit string must pass the Luhn test.
//!
//! ```
//! use idnum::isin;
//!
//! assert_eq!(isin::validate("US 037833100 5").unwrap(), "US0378331005");
//! assert_eq!(isin::from_natid("US", "91324PAE2").unwrap(), "US91324PAE25");
//! ```

use crate::checksum::luhn;
use crate::countries;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::clean;

/// Prefixes that are not ISO 3166 countries but appear on issued ISINs:
/// supranational allocations and codes of dissolved states still trading.
static EXTRA_PREFIXES: &[&str] = &["AN", "CS", "EU", "SU", "XA", "XB", "XC", "XD", "XS", "YU"];

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '.', '-']).to_uppercase()
}

/// Check whether the two-character prefix is a known issuing region.
pub fn is_known_prefix(prefix: &str) -> bool {
    countries::is_iso_3166(prefix) || EXTRA_PREFIXES.binary_search(&prefix).is_ok()
}

/// Expand letters to their two-digit values, keeping digits as they are.
fn expand(number: &str) -> Result<String, ValidationError> {
    let mut digits = String::with_capacity(number.len() * 2);
    for byte in number.bytes() {
        match byte {
            b'0'..=b'9' => digits.push(char::from(byte)),
            b'A'..=b'Z' => {
                let value = byte - b'A' + 10;
                digits.push(char::from(b'0' + value / 10));
                digits.push(char::from(b'0' + value % 10));
            }
            _ => return Err(ValidationError::InvalidFormat),
        }
    }
    Ok(digits)
}

/// Compute the check digit over the first eleven characters.
pub fn calc_check_digit(body: &str) -> Result<char, ValidationError> {
    luhn::calc_check_digit(&expand(body)?, "0123456789")
}

/// Check that the number is a valid ISIN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() != 12 {
        return Err(ValidationError::InvalidLength);
    }
    let bytes = number.as_bytes();
    if !number.is_ascii()
        || !bytes[..2].iter().all(u8::is_ascii_uppercase)
        || !bytes[2..11]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        || !bytes[11].is_ascii_digit()
    {
        return Err(ValidationError::InvalidFormat);
    }
    if !is_known_prefix(&number[..2]) {
        return Err(ValidationError::InvalidComponent);
    }
    luhn::validate(&expand(&number)?, "0123456789")?;
    Ok(number)
}

/// True when the number is a valid ISIN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// The ISIN has no conventional grouping; `format` only compacts.
pub fn format(number: &str) -> String {
    compact(number)
}

/// Build the ISIN embedding a national security identifier.
///
/// The NSIN is zero-padded on the left to nine characters; the returned
/// string passes [`validate`].
pub fn from_natid(country: &str, nsin: &str) -> ValidationResult {
    let country = country.to_uppercase();
    if country.chars().count() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat);
    }
    if !is_known_prefix(&country) {
        return Err(ValidationError::InvalidComponent);
    }
    let nsin = compact(nsin);
    if nsin.chars().count() > 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !nsin
        .bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(ValidationError::InvalidFormat);
    }
    let body = format!("{country}{nsin:0>9}");
    let check = calc_check_digit(&body)?;
    Ok(format!("{body}{check}"))
}
