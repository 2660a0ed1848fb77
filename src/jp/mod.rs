//! Japanese identifiers: corporate number.

pub mod cn;
