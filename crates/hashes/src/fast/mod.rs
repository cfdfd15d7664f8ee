//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod spooky;

#[cfg(feature = "diag")]
pub use spooky::SpookyDiag;
pub use spooky::{PathKind, SpookyBuildHasher, SpookyHash64, SpookySeed};
