//! Streaming, seedable SpookyHash V2 with a 64-bit digest (**NOT CRYPTO**).
//!
//! `spookyhash` is a fast general-purpose mixer for hash tables and hash-based
//! indexes. Zero dependencies, `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use spookyhash::{FastHash, SpookyHash64};
//!
//! // One-shot computation
//! let digest = SpookyHash64::hash(b"hello world");
//!
//! // Streaming computation, in any chunking
//! let mut hasher = SpookyHash64::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Hash Tables
//!
//! ```
//! use std::collections::HashMap;
//!
//! use spookyhash::{SpookyBuildHasher, SpookySeed};
//!
//! let mut map = HashMap::with_hasher(SpookyBuildHasher::new(SpookySeed::new(7, 11)));
//! map.insert("Eurodollar", 2017);
//! assert_eq!(map.get("Eurodollar"), Some(&2017));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `HashReader`/`HashWriter` I/O adapters |
//! | `alloc` | Yes | Implied by `std` |
//! | `diag` | No | `SpookyDiag` accumulator snapshots |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! spookyhash = { version = "0.1", default-features = false }
//! ```
//!
//! # Byte Order
//!
//! Input is read as host-order 64-bit lanes. The same bytes give different
//! digests on little- and big-endian targets; never persist digests across
//! platforms of differing byte order.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "diag")]
pub use hashes::fast::SpookyDiag;
#[cfg(feature = "std")]
pub use hashes::io::{HashReader, HashWriter};
pub use hashes::{
  FastHash, FastHasher, InvalidArgument,
  fast::{
    PathKind, SpookyBuildHasher, SpookyHash64, SpookySeed,
    spooky::{BLOCK_SIZE, BUFFER_SIZE, SEED_LENGTH},
  },
};
