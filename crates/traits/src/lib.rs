//! Core hashing traits for the spookyhash workspace.
//!
//! This crate provides the traits that the hash implementations conform to. It
//! is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded non-cryptographic hash | `SpookyHash64::hash(data)` |
//! | [`FastHasher`] | Streaming counterpart with incremental updates | `SpookyHash64::new()` + `update` |
//!
//! # Error Types
//!
//! - [`InvalidArgument`] - Checked precondition violation (null source with a
//!   non-zero length, wrongly sized seed buffer)
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
mod hasher;
#[cfg(feature = "std")]
pub mod io;

pub use error::InvalidArgument;
pub use fast_hash::FastHash;
pub use hasher::FastHasher;
