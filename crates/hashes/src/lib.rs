//! Fast non-cryptographic hashes.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for property testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**): streaming SpookyHash V2.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | I/O adapters and `IoSlice` helpers on the traits |
//! | `alloc` | Yes | Implied by `std` |
//! | `diag` | No | [`fast::SpookyDiag`] accumulator snapshots |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;
#[cfg(feature = "std")]
pub mod io;

mod util;

pub use traits::{FastHash, FastHasher, InvalidArgument};
