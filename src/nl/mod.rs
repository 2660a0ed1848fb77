//! Dutch identifiers: BRIN.

pub mod brin;
