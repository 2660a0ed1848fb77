//! Scheme registry: look up a validator by `(country, kind)` or classify an
//! unknown number.
//!
//! Every validator module is registered here as a [`Scheme`]: a record of
//! static metadata plus the module's `compact`, `validate` and `format`
//! functions. The table is sorted by `(country, kind)`, so lookup is a
//! binary search and iteration order is lexicographic and stable.
//!
//! ```
//! use idnum::registry;
//!
//! let abn = registry::get("au", "abn").unwrap();
//! assert!(abn.is_valid("83 914 571 673"));
//!
//! // A 9-digit Luhn-valid number matches more than one scheme.
//! let matches = registry::guess("404833048");
//! assert!(matches.iter().any(|s| s.kind == "siren"));
//! ```

use serde::Serialize;

use crate::error::ValidationResult;

/// One registered identifier scheme.
#[derive(Debug)]
pub struct Scheme {
    /// Lower-case ISO 3166 country code; empty for international schemes.
    pub country: &'static str,
    /// Short identifier slug, unique within a country.
    pub kind: &'static str,
    /// Human-readable scheme name.
    pub name: &'static str,
    /// The module's `compact`.
    pub compact: fn(&str) -> String,
    /// The module's `validate`.
    pub validate: fn(&str) -> ValidationResult,
    /// The module's `format`.
    pub format: fn(&str) -> String,
}

/// Serializable scheme metadata for API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeInfo {
    /// Lower-case country code, empty for international schemes.
    pub country: &'static str,
    /// Scheme slug.
    pub kind: &'static str,
    /// Human-readable name.
    pub name: &'static str,
}

impl Scheme {
    /// True when `validate` accepts the number.
    pub fn is_valid(&self, number: &str) -> bool {
        (self.validate)(number).is_ok()
    }

    /// The scheme's static metadata.
    pub fn info(&self) -> SchemeInfo {
        SchemeInfo {
            country: self.country,
            kind: self.kind,
            name: self.name,
        }
    }
}

macro_rules! scheme {
    ($country:literal, $kind:literal, $name:literal, $module:path) => {{
        use $module as m;
        Scheme {
            country: $country,
            kind: $kind,
            name: $name,
            compact: m::compact,
            validate: m::validate,
            format: m::format,
        }
    }};
}

/// All registered schemes, sorted by `(country, kind)`.
static SCHEMES: &[Scheme] = &[
    scheme!("", "bic", "Business Identifier Code", crate::bic),
    scheme!("", "cusip", "CUSIP security identifier", crate::cusip),
    scheme!("", "ean", "International Article Number", crate::ean),
    scheme!("", "iban", "International Bank Account Number", crate::iban),
    scheme!("", "imo", "IMO ship identification number", crate::imo),
    scheme!("", "isin", "International Securities Identification Number", crate::isin),
    scheme!("", "lei", "Legal Entity Identifier", crate::lei),
    scheme!("ar", "cbu", "Clave Bancaria Uniforme", crate::ar::cbu),
    scheme!("au", "abn", "Australian Business Number", crate::au::abn),
    scheme!("au", "acn", "Australian Company Number", crate::au::acn),
    scheme!("au", "tfn", "Australian Tax File Number", crate::au::tfn),
    scheme!("ee", "ik", "Estonian isikukood", crate::ee::ik),
    scheme!("ee", "registrikood", "Estonian company registration", crate::ee::registrikood),
    scheme!("fr", "nif", "French tax identification number", crate::fr::nif),
    scheme!("fr", "siren", "French company identification number", crate::fr::siren),
    scheme!("fr", "siret", "French establishment number", crate::fr::siret),
    scheme!("fr", "tva", "French VAT number", crate::fr::tva),
    scheme!("gb", "sedol", "Stock Exchange Daily Official List number", crate::gb::sedol),
    scheme!("il", "hp", "Israeli company number", crate::il::hp),
    scheme!("il", "idnr", "Israeli identity number", crate::il::idnr),
    scheme!("jp", "cn", "Japanese corporate number", crate::jp::cn),
    scheme!("nl", "brin", "Dutch school identifier", crate::nl::brin),
];

/// Look up one scheme by country code and kind slug (case-insensitive).
pub fn get(country: &str, kind: &str) -> Option<&'static Scheme> {
    let country = country.to_ascii_lowercase();
    let kind = kind.to_ascii_lowercase();
    SCHEMES
        .binary_search_by(|s| (s.country, s.kind).cmp(&(country.as_str(), kind.as_str())))
        .ok()
        .map(|i| &SCHEMES[i])
}

/// Return every scheme whose validator accepts the number.
///
/// A short all-digit string can satisfy several schemes at once; callers
/// offering auto-classification must be ready for multiple matches.
pub fn guess(number: &str) -> Vec<&'static Scheme> {
    SCHEMES.iter().filter(|s| s.is_valid(number)).collect()
}

/// Iterate all registered schemes in `(country, kind)` order.
pub fn all() -> impl Iterator<Item = &'static Scheme> {
    SCHEMES.iter()
}
