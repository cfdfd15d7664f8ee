//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and hash the bytes that actually pass
//! through them.
//!
//! # Example
//!
//! ```rust
//! use hashes::{FastHash as _, FastHasher as _, fast::SpookyHash64};
//! use std::io::Read;
//!
//! let mut reader = SpookyHash64::reader(&b"hello world"[..]);
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.hash(), SpookyHash64::hash(b"hello world"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{HashReader, HashWriter};
