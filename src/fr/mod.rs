//! French identifiers: SIREN, SIRET, TVA and NIF.

pub mod nif;
pub mod siren;
pub mod siret;
pub mod tva;
