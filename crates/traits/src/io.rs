//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and feed every byte actually transferred into a
//! [`FastHasher`](crate::FastHasher). Short reads and short writes are handled:
//! only the bytes the inner reader produced, or the inner writer accepted, are
//! hashed.
//!
//! # Example
//!
//! ```rust
//! # use traits::FastHasher;
//! # #[derive(Clone, Default)]
//! # struct Sum(u64);
//! # impl FastHasher for Sum {
//! #   const OUTPUT_SIZE: usize = 8;
//! #   type Output = u64;
//! #   type Seed = u64;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_seed(seed: u64) -> Self { Self(seed) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u64::from(b)));
//! #   }
//! #   fn finalize(&self) -> u64 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.hash(), u64::from(b'a') + u64::from(b'b') + u64::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::FastHasher;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  R: Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize>
where
  R: Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  W: Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize>
where
  W: Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Read`] and hashes every byte read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The streaming hash (e.g., `SpookyHash64`)
#[derive(Clone)]
pub struct HashReader<R, H: FastHasher> {
  inner: R,
  hasher: H,
}

impl<R, H: FastHasher> HashReader<R, H> {
  /// Create a new reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a new reader wrapper with an explicit seed.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Hash of everything read so far.
  ///
  /// Further reads keep updating the hasher.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap, returning the inner reader and the final hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap, returning the inner reader and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, H: FastHasher> Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`] and hashes every byte the inner writer accepts.
///
/// The hash is updated **after** the inner write returns, with exactly the
/// prefix that was written. A failed write hashes nothing.
#[derive(Clone)]
pub struct HashWriter<W, H: FastHasher> {
  inner: W,
  hasher: H,
}

impl<W, H: FastHasher> HashWriter<W, H> {
  /// Create a new writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a new writer wrapper with an explicit seed.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap, returning the inner writer and the final hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap, returning the inner writer and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, H: FastHasher> Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}
