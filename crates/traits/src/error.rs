//! Error types for hashing operations.
//!
//! Hashing itself is total over every byte sequence; the only failures are
//! checked precondition violations on the raw input surfaces.

use core::fmt;

/// A caller-supplied argument violated a documented precondition.
///
/// Returned before any state is mutated, so the receiver is unchanged and
/// still usable. Typical causes:
///
/// - a null source pointer paired with a non-zero length
/// - a seed buffer whose length differs from the algorithm's seed length
///
/// # Examples
///
/// ```
/// use traits::InvalidArgument;
///
/// fn checked_len(len: usize) -> Result<usize, InvalidArgument> {
///   if len == 16 { Ok(len) } else { Err(InvalidArgument::new("seed must be 16 bytes")) }
/// }
///
/// assert!(checked_len(15).is_err());
/// assert_eq!(checked_len(15).unwrap_err().reason(), "seed must be 16 bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidArgument {
  reason: &'static str,
}

impl InvalidArgument {
  /// Create a new error carrying a static description of the violated precondition.
  #[inline]
  #[must_use]
  pub const fn new(reason: &'static str) -> Self {
    Self { reason }
  }

  /// Error for a null source pointer with a non-zero length.
  #[inline]
  #[must_use]
  pub const fn null_source() -> Self {
    Self::new("null source pointer with non-zero length")
  }

  /// The violated precondition.
  #[inline]
  #[must_use]
  pub const fn reason(&self) -> &'static str {
    self.reason
  }
}

impl fmt::Display for InvalidArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid argument: {}", self.reason)
  }
}

impl core::error::Error for InvalidArgument {}
