//! Israeli identifiers: identity number and company number.

pub mod hp;
pub mod idnr;
