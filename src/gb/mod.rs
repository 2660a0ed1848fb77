//! United Kingdom identifiers: SEDOL.

pub mod sedol;
