//! Australian identifiers: ABN, ACN and TFN.

pub mod abn;
pub mod acn;
pub mod tfn;
