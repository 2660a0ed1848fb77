//! Estonian identifiers: isikukood and registrikood.

pub mod ik;
pub mod registrikood;
