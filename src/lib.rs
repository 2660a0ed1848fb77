//! # idnum
//!
//! Validation, normalization, formatting, and conversion of national and
//! international identifiers: company and tax numbers, personal identity
//! codes, bank accounts, and securities identifiers.
//!
//! Every scheme module exposes the same four functions — `compact`,
//! `validate`, `is_valid`, `format` — plus documented cross-converters
//! such as [`au::acn::to_abn`] or [`gb::sedol::to_isin`]. `validate`
//! normalizes its input and returns the canonical string, or exactly one
//! [`ValidationError`] kind describing the first failing check. The
//! library is offline and deterministic: no network, no logging, no I/O
//! beyond bundled reference tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use idnum::au::abn;
//! use idnum::{ValidationError, registry};
//!
//! assert_eq!(abn::validate("83 914 571 673").unwrap(), "83914571673");
//! assert_eq!(abn::format("51824753556"), "51 824 753 556");
//! assert_eq!(
//!     abn::validate("99 999 999 999"),
//!     Err(ValidationError::InvalidChecksum)
//! );
//!
//! // Generic callers dispatch through the registry.
//! let scheme = registry::get("au", "abn").unwrap();
//! assert!(scheme.is_valid("51 824 753 556"));
//! ```

pub mod checksum;
mod countries;
pub mod error;
pub mod registry;
mod strings;

pub mod ar;
pub mod au;
pub mod bic;
pub mod cusip;
pub mod ean;
pub mod ee;
pub mod fr;
pub mod gb;
pub mod iban;
pub mod il;
pub mod imo;
pub mod isin;
pub mod jp;
pub mod lei;
pub mod nl;

pub use error::{ValidationError, ValidationResult};
