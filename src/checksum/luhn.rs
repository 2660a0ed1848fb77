//! The Luhn and Luhn mod N algorithms.
//!
//! Luhn mod N generalizes the classical Luhn algorithm to an arbitrary
//! alphabet of size N: walking from the right, every second character value
//! is doubled, the base-N digits of each product are summed, and the number
//! is valid when the total is divisible by N. The character's value is its
//! position in the alphabet. With the alphabet `"0123456789"` this is the
//! classical Luhn algorithm used by credit cards, SIREN, the Israeli
//! identity number and many others.

use crate::error::ValidationError;

/// Compute the Luhn mod N checksum over `number`.
///
/// A valid number has checksum 0. Returns `InvalidFormat` if any character
/// is not part of `alphabet`.
///
/// ```
/// use idnum::checksum::luhn;
///
/// assert_eq!(luhn::checksum("79927398713", "0123456789").unwrap(), 0);
/// assert_ne!(luhn::checksum("79927398714", "0123456789").unwrap(), 0);
/// ```
pub fn checksum(number: &str, alphabet: &str) -> Result<usize, ValidationError> {
    let n = alphabet.chars().count();
    let mut sum = 0usize;
    for (i, c) in number.chars().rev().enumerate() {
        let value = alphabet
            .chars()
            .position(|a| a == c)
            .ok_or(ValidationError::InvalidFormat)?;
        sum += if i % 2 == 1 {
            let doubled = value * 2;
            doubled / n + doubled % n
        } else {
            value
        };
    }
    Ok(sum % n)
}

/// Check that `number` has a valid Luhn mod N checksum.
pub fn validate(number: &str, alphabet: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    if checksum(number, alphabet)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}

/// Compute the check character that makes `number` + check valid.
///
/// ```
/// use idnum::checksum::luhn;
///
/// assert_eq!(luhn::calc_check_digit("7992739871", "0123456789").unwrap(), '3');
/// ```
pub fn calc_check_digit(number: &str, alphabet: &str) -> Result<char, ValidationError> {
    let n = alphabet.chars().count();
    // Appending the zero-value character shifts every position's parity to
    // what it will be in the final number without changing the sum.
    let zero = alphabet.chars().next().ok_or(ValidationError::InvalidFormat)?;
    let mut padded = String::with_capacity(number.len() + 1);
    padded.push_str(number);
    padded.push(zero);
    let sum = checksum(&padded, alphabet)?;
    alphabet
        .chars()
        .nth((n - sum) % n)
        .ok_or(ValidationError::InvalidFormat)
}
