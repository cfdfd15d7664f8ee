//! SpookyHash V2, 64-bit streaming variant (**NOT CRYPTO**).
//!
//! Bob Jenkins' SpookyHash is a fast mixer for hash tables and hash-based
//! indexes. Input is consumed as host-order 64-bit lanes, so digests differ
//! between little- and big-endian targets for the same bytes.
//!
//! Two paths share one buffer:
//!
//! - **Short path** (total length < [`BUFFER_SIZE`]): bytes stay buffered and
//!   are hashed at finalization with a four-variable ARX mixer.
//! - **Long path**: once pending input reaches [`BUFFER_SIZE`], whole
//!   [`BLOCK_SIZE`] blocks are folded into a twelve-word state as they arrive.
//!   The switch happens at most once and is never undone.
//!
//! The digest depends only on the seed and the logical byte stream, never on
//! how the stream was split across [`update`](SpookyHash64::update) calls.
//!
//! # Example
//!
//! ```
//! use hashes::fast::SpookyHash64;
//! use hashes::FastHash as _;
//!
//! let mut h = SpookyHash64::new();
//! h.update(b"1234");
//! h.update(b"567890");
//! assert_eq!(h.finalize(), SpookyHash64::hash(b"1234567890"));
//! # #[cfg(target_endian = "little")]
//! assert_eq!(h.finalize(), 5_673_121_172_557_267_903);
//! ```

#![allow(clippy::indexing_slicing)] // Buffer bookkeeping over fixed-size arrays

use core::{
  fmt,
  hash::{BuildHasher, Hasher},
};

use traits::{FastHash, FastHasher, InvalidArgument};

pub(crate) mod kernels;

/// Seed length in bytes: two 64-bit words.
pub const SEED_LENGTH: usize = 16;

/// Long-path block size in bytes (twelve 64-bit lanes).
pub const BLOCK_SIZE: usize = 96;

/// Internal buffer capacity, and the total length at which the long path starts.
pub const BUFFER_SIZE: usize = 2 * BLOCK_SIZE;

pub(crate) const NUM_VARS: usize = BLOCK_SIZE / 8;
pub(crate) const SHORT_BLOCK: usize = 32;

/// Odd, irregular constant mixed into the initial state of both paths.
pub(crate) const SC_CONST: u64 = 0xdead_beef_dead_beef;

// ─────────────────────────────────────────────────────────────────────────────
// Seed
// ─────────────────────────────────────────────────────────────────────────────

/// Two-word seed.
///
/// The default, `(1, 2)`, is the seed the published reference vectors use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpookySeed {
  k0: u64,
  k1: u64,
}

impl SpookySeed {
  /// The default seed.
  pub const DEFAULT: Self = Self::new(1, 2);

  /// Seed from two words.
  #[inline]
  #[must_use]
  pub const fn new(k0: u64, k1: u64) -> Self {
    Self { k0, k1 }
  }

  /// Seed from a 16-byte buffer holding two host-order words.
  #[inline]
  #[must_use]
  pub fn from_bytes(bytes: &[u8; SEED_LENGTH]) -> Self {
    let (lo, hi) = bytes.split_at(8);
    let mut k0 = [0u8; 8];
    let mut k1 = [0u8; 8];
    k0.copy_from_slice(lo);
    k1.copy_from_slice(hi);
    Self::new(u64::from_ne_bytes(k0), u64::from_ne_bytes(k1))
  }

  /// Seed from an arbitrary slice, which must be exactly [`SEED_LENGTH`] bytes.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgument`] for any other length.
  #[inline]
  pub fn try_from_slice(bytes: &[u8]) -> Result<Self, InvalidArgument> {
    let bytes: &[u8; SEED_LENGTH] = bytes
      .try_into()
      .map_err(|_| InvalidArgument::new("seed buffer must be exactly 16 bytes"))?;
    Ok(Self::from_bytes(bytes))
  }

  /// The two seed words.
  #[inline]
  #[must_use]
  pub const fn words(self) -> (u64, u64) {
    (self.k0, self.k1)
  }

  /// The seed as a 16-byte host-order buffer.
  #[inline]
  #[must_use]
  pub fn to_bytes(self) -> [u8; SEED_LENGTH] {
    let mut out = [0u8; SEED_LENGTH];
    out[..8].copy_from_slice(&self.k0.to_ne_bytes());
    out[8..].copy_from_slice(&self.k1.to_ne_bytes());
    out
  }
}

impl Default for SpookySeed {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl From<[u64; 2]> for SpookySeed {
  #[inline]
  fn from([k0, k1]: [u64; 2]) -> Self {
    Self::new(k0, k1)
  }
}

impl From<[u8; SEED_LENGTH]> for SpookySeed {
  #[inline]
  fn from(bytes: [u8; SEED_LENGTH]) -> Self {
    Self::from_bytes(&bytes)
  }
}

impl TryFrom<&[u8]> for SpookySeed {
  type Error = InvalidArgument;

  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Self::try_from_slice(bytes)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accumulator
// ─────────────────────────────────────────────────────────────────────────────

/// Which finalization strategy the accumulator is committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
  /// Total input so far is below [`BUFFER_SIZE`]; nothing has been mixed.
  Short,
  /// Input reached [`BUFFER_SIZE`]; whole blocks are folded as they arrive.
  Long,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Path {
  Short,
  Long(kernels::State),
}

/// Streaming SpookyHash V2 producing a 64-bit digest.
///
/// Holds no references and has no drop glue: moving or byte-copying an
/// accumulator yields an equivalent one, so it can live in relocating
/// containers. It is not internally synchronized; use one instance per stream.
#[derive(Clone)]
pub struct SpookyHash64 {
  seed: SpookySeed,
  path: Path,
  total_len: u64,
  buffered: usize,
  buf: [u8; BUFFER_SIZE],
}

impl SpookyHash64 {
  /// Seed length in bytes accepted by [`from_seed_bytes`](Self::from_seed_bytes).
  pub const SEED_LENGTH: usize = SEED_LENGTH;

  /// Accumulator with the default seed.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(SpookySeed::DEFAULT)
  }

  /// Accumulator with an explicit seed.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: SpookySeed) -> Self {
    Self {
      seed,
      path: Path::Short,
      total_len: 0,
      buffered: 0,
      buf: [0u8; BUFFER_SIZE],
    }
  }

  /// Accumulator seeded from a 16-byte buffer of two host-order words.
  #[inline]
  #[must_use]
  pub fn from_seed_bytes(seed: &[u8; SEED_LENGTH]) -> Self {
    Self::with_seed(SpookySeed::from_bytes(seed))
  }

  /// Append `data` to the stream. Empty input is a no-op.
  pub fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    let mut state = match self.path {
      Path::Short => {
        let pending = self.buffered + data.len();
        if pending < BUFFER_SIZE {
          self.buf[self.buffered..pending].copy_from_slice(data);
          self.buffered = pending;
          return;
        }
        let (k0, k1) = self.seed.words();
        kernels::long_init(k0, k1)
      }
      Path::Long(state) => state,
    };

    let mut rest = data;
    if self.buffered > 0 {
      // Complete the pending block, or both blocks when leaving the short path.
      let want = self.buffered.next_multiple_of(BLOCK_SIZE) - self.buffered;
      let (head, tail) = rest.split_at(want.min(rest.len()));
      let end = self.buffered + head.len();
      self.buf[self.buffered..end].copy_from_slice(head);
      let (blocks, partial) = self.buf[..end].as_chunks::<BLOCK_SIZE>();
      for block in blocks {
        kernels::mix(&mut state, block);
      }
      let kept = partial.len();
      self.buf.copy_within(end - kept..end, 0);
      self.buffered = kept;
      rest = tail;
    }

    let (blocks, tail) = rest.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
      kernels::mix(&mut state, block);
    }
    let end = self.buffered + tail.len();
    self.buf[self.buffered..end].copy_from_slice(tail);
    self.buffered = end;
    self.path = Path::Long(state);
  }

  /// Append `len` bytes starting at `ptr`.
  ///
  /// `len == 0` is always accepted and never inspects `ptr`, null included.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgument`] when `ptr` is null and `len` is non-zero. The
  /// accumulator is left untouched.
  ///
  /// # Safety
  ///
  /// When `ptr` is non-null and `len > 0`, `ptr` must be valid for reads of
  /// `len` bytes for the duration of the call, as for
  /// [`core::slice::from_raw_parts`].
  pub unsafe fn update_raw(&mut self, ptr: *const u8, len: usize) -> Result<(), InvalidArgument> {
    if len == 0 {
      return Ok(());
    }
    if ptr.is_null() {
      return Err(InvalidArgument::null_source());
    }
    // SAFETY: `ptr` is non-null and the caller guarantees `len` readable bytes.
    let data = unsafe { core::slice::from_raw_parts(ptr, len) };
    self.update(data);
    Ok(())
  }

  /// Digest of every byte seen so far.
  ///
  /// Works on copies of the state and buffer: repeated calls return the same
  /// value and later updates continue the same stream.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    self.finish_lanes().0
  }

  /// Both 64-bit lanes of the canonical 128-bit result; only the first is
  /// exposed as the digest.
  fn finish_lanes(&self) -> (u64, u64) {
    let pending = &self.buf[..self.buffered];
    match self.path {
      Path::Short => {
        let (k0, k1) = self.seed.words();
        kernels::short(k0, k1, pending)
      }
      Path::Long(mut state) => {
        kernels::end(&mut state, &kernels::padded_final_block(pending));
        (state[0], state[1])
      }
    }
  }

  /// Return to the freshly seeded state.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }

  /// The seed this accumulator was built with.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> SpookySeed {
    self.seed
  }

  /// Total bytes consumed (wrapping at 2^64).
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total_len
  }

  /// Current path; becomes [`PathKind::Long`] once and stays there.
  #[inline]
  #[must_use]
  pub const fn path(&self) -> PathKind {
    match self.path {
      Path::Short => PathKind::Short,
      Path::Long(_) => PathKind::Long,
    }
  }

  /// Bytes held in the buffer, not yet folded into the long-path state.
  ///
  /// Below [`BUFFER_SIZE`] on the short path and below [`BLOCK_SIZE`] on the
  /// long path.
  #[inline]
  #[must_use]
  pub const fn buffered_len(&self) -> usize {
    self.buffered
  }

  /// Snapshot of the accumulator's bookkeeping.
  #[cfg(feature = "diag")]
  #[must_use]
  pub fn diag(&self) -> SpookyDiag {
    SpookyDiag {
      seed: self.seed,
      path: self.path(),
      total_len: self.total_len,
      buffered: self.buffered,
      blocks_mixed: match self.path {
        Path::Short => 0,
        Path::Long(_) => self.total_len.wrapping_sub(self.buffered as u64) / BLOCK_SIZE as u64,
      },
    }
  }
}

impl Default for SpookyHash64 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Logical equality: same seed, same stream position, same pending bytes.
///
/// Bytes past the buffered prefix are scratch and do not participate.
impl PartialEq for SpookyHash64 {
  fn eq(&self, other: &Self) -> bool {
    self.seed == other.seed
      && self.path == other.path
      && self.total_len == other.total_len
      && self.buf[..self.buffered] == other.buf[..other.buffered]
  }
}

impl Eq for SpookyHash64 {}

impl fmt::Debug for SpookyHash64 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SpookyHash64")
      .field("path", &self.path())
      .field("total_len", &self.total_len)
      .field("buffered", &self.buffered)
      .finish_non_exhaustive()
  }
}

/// Accumulator bookkeeping exposed for debugging.
#[cfg(feature = "diag")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpookyDiag {
  /// Seed the accumulator was built with.
  pub seed: SpookySeed,
  /// Current finalization path.
  pub path: PathKind,
  /// Bytes consumed so far (wrapping).
  pub total_len: u64,
  /// Bytes waiting in the buffer.
  pub buffered: usize,
  /// Whole blocks folded into the long-path state.
  pub blocks_mixed: u64,
}

impl FastHash for SpookyHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = SpookySeed;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let (k0, k1) = seed.words();
    if data.len() < BUFFER_SIZE {
      kernels::short(k0, k1, data).0
    } else {
      kernels::long(k0, k1, data).0
    }
  }
}

impl FastHasher for SpookyHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = SpookySeed;

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    Self::with_seed(seed)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize()
  }

  #[inline]
  fn reset(&mut self) {
    self.reset();
  }
}

impl Hasher for SpookyHash64 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.finalize()
  }
}

/// [`BuildHasher`] producing seeded [`SpookyHash64`] accumulators, for use as
/// the `S` parameter of `HashMap`/`HashSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpookyBuildHasher {
  seed: SpookySeed,
}

impl SpookyBuildHasher {
  /// Builder whose hashers all start from `seed`.
  #[inline]
  #[must_use]
  pub const fn new(seed: SpookySeed) -> Self {
    Self { seed }
  }

  /// Seed handed to every built hasher.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> SpookySeed {
    self.seed
  }
}

impl BuildHasher for SpookyBuildHasher {
  type Hasher = SpookyHash64;

  #[inline]
  fn build_hasher(&self) -> SpookyHash64 {
    SpookyHash64::with_seed(self.seed)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, vec, vec::Vec};

  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
  }

  #[test]
  fn seed_default_is_one_two() {
    assert_eq!(SpookySeed::default().words(), (1, 2));
    assert_eq!(SpookyHash64::new().seed(), SpookySeed::new(1, 2));
  }

  #[test]
  fn seed_bytes_round_trip() {
    let seed = SpookySeed::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    assert_eq!(SpookySeed::from_bytes(&seed.to_bytes()), seed);
    assert_eq!(SpookySeed::try_from_slice(&seed.to_bytes()), Ok(seed));
  }

  #[test]
  fn seed_slice_length_is_checked() {
    let err = SpookySeed::try_from_slice(&[0u8; 15]).unwrap_err();
    assert_eq!(err.reason(), "seed buffer must be exactly 16 bytes");
    assert!(SpookySeed::try_from(&[0u8; 17][..]).is_err());
  }

  #[test]
  fn zero_seed_bytes_are_zero_words() {
    let h = SpookyHash64::from_seed_bytes(&[0u8; SEED_LENGTH]);
    assert_eq!(h.seed().words(), (0, 0));
    assert_eq!(SpookyHash64::SEED_LENGTH, 16);
  }

  #[test]
  fn path_switches_at_buffer_size() {
    let data = pattern(BUFFER_SIZE);
    let mut h = SpookyHash64::new();
    h.update(&data[..BUFFER_SIZE - 1]);
    assert_eq!(h.path(), PathKind::Short);
    assert_eq!(h.buffered_len(), BUFFER_SIZE - 1);

    h.update(&data[BUFFER_SIZE - 1..]);
    assert_eq!(h.path(), PathKind::Long);
    assert_eq!(h.buffered_len(), 0);
    assert_eq!(h.total_len(), BUFFER_SIZE as u64);
  }

  #[test]
  fn long_path_is_sticky() {
    let mut h = SpookyHash64::new();
    h.update(&pattern(300));
    assert_eq!(h.path(), PathKind::Long);
    h.update(&[]);
    h.update(b"x");
    assert_eq!(h.path(), PathKind::Long);
  }

  #[test]
  fn long_path_folds_whole_blocks_eagerly() {
    let mut h = SpookyHash64::new();
    h.update(&[0u8; BUFFER_SIZE]);
    h.update(&[1u8; 100]);
    assert_eq!(h.path(), PathKind::Long);
    assert_eq!(h.buffered_len(), 100 - BLOCK_SIZE);

    let mut want = vec![0u8; BUFFER_SIZE];
    want.extend_from_slice(&[1u8; 100]);
    assert_eq!(h.finalize(), SpookyHash64::hash(&want));
  }

  #[test]
  fn long_path_buffer_stays_below_one_block() {
    let data = pattern(1000);
    for chunk in [1, 7, 50, 95, 96, 97, 150, 191, 192, 300] {
      let mut h = SpookyHash64::new();
      for piece in data.chunks(chunk) {
        h.update(piece);
        if h.path() == PathKind::Long {
          assert!(h.buffered_len() < BLOCK_SIZE, "chunk={chunk} buffered={}", h.buffered_len());
        } else {
          assert!(h.buffered_len() < BUFFER_SIZE);
        }
      }
      assert_eq!(h.finalize(), SpookyHash64::hash(&data), "chunk={chunk}");
    }
  }

  #[test]
  fn empty_update_touches_nothing() {
    let mut h = SpookyHash64::new();
    h.update(&pattern(100));
    let before = h.clone();
    h.update(&[]);
    assert_eq!(h, before);
    assert_eq!(h.total_len(), 100);
  }

  #[test]
  fn reset_keeps_seed() {
    let seed = SpookySeed::new(5, 6);
    let mut h = SpookyHash64::with_seed(seed);
    h.update(&pattern(500));
    h.reset();
    assert_eq!(h, SpookyHash64::with_seed(seed));
    assert_eq!(h.finalize(), SpookyHash64::hash_with_seed(seed, &[]));
  }

  #[test]
  fn debug_hides_buffer() {
    let mut h = SpookyHash64::new();
    h.update(b"secret-ish");
    let dbg = format!("{h:?}");
    assert_eq!(dbg, "SpookyHash64 { path: Short, total_len: 10, buffered: 10, .. }");
  }

  #[test]
  fn update_raw_null_with_length_fails_without_mutation() {
    let mut h = SpookyHash64::new();
    h.update(b"abc");
    let before = h.clone();
    // SAFETY: the null pointer is rejected before any read.
    let err = unsafe { h.update_raw(core::ptr::null(), 5) }.unwrap_err();
    assert_eq!(err, InvalidArgument::null_source());
    assert_eq!(h, before);
  }

  #[test]
  fn update_raw_null_with_zero_length_is_inert() {
    let mut h = SpookyHash64::new();
    // SAFETY: zero length never dereferences the pointer.
    unsafe { h.update_raw(core::ptr::null(), 0) }.unwrap();
    assert_eq!(h, SpookyHash64::new());
  }

  #[test]
  fn update_raw_matches_update() {
    let data = *b"abcde";
    let mut raw = SpookyHash64::new();
    // SAFETY: `data` is a live 5-byte array.
    unsafe { raw.update_raw(data.as_ptr(), data.len()) }.unwrap();
    let mut safe = SpookyHash64::new();
    safe.update(&data);
    assert_eq!(raw.finalize(), safe.finalize());
  }

  #[cfg(feature = "diag")]
  #[test]
  fn diag_counts_mixed_blocks() {
    let mut h = SpookyHash64::new();
    h.update(&pattern(BUFFER_SIZE + BLOCK_SIZE + 5));
    let d = h.diag();
    assert_eq!(d.path, PathKind::Long);
    assert_eq!(d.buffered, 5);
    assert_eq!(d.blocks_mixed, 3);
  }
}
