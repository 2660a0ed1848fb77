//! IBAN (International Bank Account Number, ISO 13616).
//!
//! A two-letter country code, two check digits, and a country-specific
//! BBAN of up to thirty characters. The check digits satisfy ISO 7064
//! MOD 97-10 over the rearranged number (BBAN first, then country and
//! check digits). Country-specific lengths and BBAN structures come from a
//! bundled registry file parsed once on first use; a wrong per-country
//! length reports `InvalidLength` just like a generically impossible one.
//!
//! ```
//! use idnum::iban;
//!
//! assert_eq!(
//!     iban::validate("DE89 3704 0044 0532 0130 00").unwrap(),
//!     "DE89370400440532013000"
//! );
//! assert_eq!(
//!     iban::format("DE89370400440532013000"),
//!     "DE89 3704 0044 0532 0130 00"
//! );
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::checksum::iso7064;
use crate::error::{ValidationError, ValidationResult};
use crate::strings::clean;

/// Per-country entry from the bundled registry file.
#[derive(Debug, Clone, Copy)]
struct IbanSpec {
    length: usize,
    bban: &'static str,
}

static REGISTRY_DATA: &str = include_str!("data/iban_registry_v1.csv");

static REGISTRY: OnceLock<HashMap<&'static str, IbanSpec>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, IbanSpec> {
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        for line in REGISTRY_DATA.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split(',');
            let (Some(country), Some(length), Some(bban)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Ok(length) = length.parse() else {
                continue;
            };
            map.insert(country, IbanSpec { length, bban });
        }
        map
    })
}

/// True when the BBAN satisfies the `<count><class>` token structure.
fn bban_matches(bban: &str, pattern: &str) -> bool {
    let mut rest = bban.as_bytes();
    let mut count = 0usize;
    for p in pattern.bytes() {
        match p {
            b'0'..=b'9' => count = count * 10 + usize::from(p - b'0'),
            class => {
                if rest.len() < count {
                    return false;
                }
                let (head, tail) = rest.split_at(count);
                let ok = match class {
                    b'n' => head.iter().all(u8::is_ascii_digit),
                    b'a' => head.iter().all(u8::is_ascii_uppercase),
                    b'c' => head
                        .iter()
                        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
                    _ => false,
                };
                if !ok {
                    return false;
                }
                rest = tail;
                count = 0;
            }
        }
    }
    rest.is_empty()
}

/// Strip separators, surrounding whitespace, and uppercase.
pub fn compact(number: &str) -> String {
    clean(number, &[' ', '-', '.']).to_uppercase()
}

/// Check that the number is a valid IBAN and return the canonical form.
pub fn validate(number: &str) -> ValidationResult {
    let number = compact(number);
    if number.chars().count() < 5 || number.chars().count() > 34 {
        return Err(ValidationError::InvalidLength);
    }
    let bytes = number.as_bytes();
    if !number.is_ascii()
        || !bytes[..2].iter().all(u8::is_ascii_uppercase)
        || !bytes[2..4].iter().all(u8::is_ascii_digit)
        || !bytes[4..]
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(ValidationError::InvalidFormat);
    }
    let Some(spec) = registry().get(&number[..2]) else {
        return Err(ValidationError::InvalidComponent);
    };
    if number.len() != spec.length {
        return Err(ValidationError::InvalidLength);
    }
    if !bban_matches(&number[4..], spec.bban) {
        return Err(ValidationError::InvalidFormat);
    }
    let rearranged = format!("{}{}", &number[4..], &number[..4]);
    iso7064::validate_mod_97_10(&rearranged)?;
    Ok(number)
}

/// True when the number is a valid IBAN.
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformat the number into the conventional groups of four.
pub fn format(number: &str) -> String {
    let number = compact(number);
    if !number.is_ascii() {
        return number;
    }
    let mut out = String::with_capacity(number.len() + number.len() / 4);
    for (i, c) in number.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
