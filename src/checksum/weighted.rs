//! Weighted modular sums.
//!
//! Most national check-digit schemes are a dot product of the number's
//! digits with a fixed weight vector, reduced modulo some small constant.
//! Two alignment conventions exist in the wild and both are provided:
//! left-aligned with a weight per position, and right-aligned with a weight
//! vector cycling from the least significant digit (the GS1 and CBU style).

use crate::error::ValidationError;

/// Sum of `digit * weight` with weights aligned from the left, reduced
/// modulo `modulus`. The shorter of number and weights decides how many
/// positions take part, like a zip.
pub fn weighted_sum(number: &str, weights: &[u32], modulus: u32) -> Result<u32, ValidationError> {
    let mut sum: u32 = 0;
    for (byte, weight) in number.bytes().zip(weights) {
        if !byte.is_ascii_digit() {
            return Err(ValidationError::InvalidFormat);
        }
        sum = (sum + u32::from(byte - b'0') * weight) % modulus;
    }
    Ok(sum)
}

/// Sum of `digit * weight` with the weight vector cycling from the
/// rightmost digit, reduced modulo `modulus`. An empty weight vector
/// contributes nothing, like the zip truncation in [`weighted_sum`].
pub fn weighted_sum_right(
    number: &str,
    weights: &[u32],
    modulus: u32,
) -> Result<u32, ValidationError> {
    if weights.is_empty() {
        return Ok(0);
    }
    let mut sum: u32 = 0;
    for (i, byte) in number.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ValidationError::InvalidFormat);
        }
        sum = (sum + u32::from(byte - b'0') * weights[i % weights.len()]) % modulus;
    }
    Ok(sum)
}

/// Compute the GS1 check digit (EAN, GLN, GTIN, SSCC) for `number`
/// without its check digit: weights alternate 3, 1 from the right.
///
/// ```
/// use idnum::checksum::weighted;
///
/// // GS1's own GLN example 0614141000418.
/// assert_eq!(weighted::gs1_check_digit("061414100041").unwrap(), '8');
/// ```
pub fn gs1_check_digit(number: &str) -> Result<char, ValidationError> {
    let sum = weighted_sum_right(number, &[3, 1], 10)?;
    Ok(char::from(b'0' + ((10 - sum) % 10) as u8))
}
