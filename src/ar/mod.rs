//! Argentine identifiers: CBU.

pub mod cbu;
