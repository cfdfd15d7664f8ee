//! Streaming non-cryptographic hash traits.
//!
//! - **Streaming**: Incremental updates in any chunking
//! - **Seeded**: Each hasher carries its seed for its whole lifetime
//! - **Non-consuming finalize**: Digests can be taken mid-stream

use core::fmt::Debug;

/// Streaming fast hash (**NOT CRYPTO**).
///
/// The streaming counterpart of [`FastHash`](crate::FastHash). Buffering of
/// partial blocks is the implementor's job; callers may split their input
/// arbitrarily.
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::fast::SpookyHash64;
/// use traits::FastHasher;
///
/// // One-shot
/// let h = SpookyHash64::hash_streaming(b"hello world");
///
/// // Streaming
/// let mut hasher = SpookyHash64::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), h);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `update(&[])` must not change any observable state
/// - the digest must not depend on how the input was split across `update` calls
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its seeded initial state
pub trait FastHasher: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Create a new hasher with the default seed.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with an explicit seed.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the hash.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// (the next result then covers all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state, keeping the seed.
  fn reset(&mut self);

  /// Hash `data` in one shot through the streaming path.
  #[inline]
  #[must_use]
  fn hash_streaming(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Hash multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn hash_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to hash transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use hashes::fast::SpookyHash64;
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = SpookyHash64::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("spooky: {:016x}", reader.hash());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer to hash transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
