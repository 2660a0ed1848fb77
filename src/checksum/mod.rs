//! Checksum primitives shared by the per-scheme validators.
//!
//! Everything here is a pure function over a string slice: no allocation
//! beyond the caller's input, no state, no I/O. The primitives only raise
//! [`ValidationError::InvalidFormat`](crate::ValidationError::InvalidFormat)
//! when asked to interpret a character outside the alphabet they were given;
//! all other policy (lengths, components, which primitive applies) lives in
//! the scheme modules.

pub mod iso7064;
pub mod luhn;
pub mod weighted;
