#![allow(clippy::indexing_slicing)] // Fixed-size lane extraction

/// Read the `i`-th host-order 64-bit lane of a block.
#[inline(always)]
pub fn lane_ne<const N: usize>(block: &[u8; N], i: usize) -> u64 {
  let mut w = [0u8; 8];
  w.copy_from_slice(&block[i * 8..i * 8 + 8]);
  u64::from_ne_bytes(w)
}

/// Split a block into host-order 64-bit lanes.
#[inline(always)]
pub fn lanes_ne<const N: usize, const L: usize>(block: &[u8; N]) -> [u64; L] {
  const { assert!(N == L * 8) };
  let mut out = [0u64; L];
  for (i, lane) in out.iter_mut().enumerate() {
    *lane = lane_ne(block, i);
  }
  out
}

/// Fold up to 8 trailing bytes into a word the way the reference tail switch does.
///
/// A leading 4-byte group is read in host order; any other byte lands at the
/// position of its offset. On little-endian targets this equals a zero-padded
/// `u64::from_le_bytes`.
#[inline(always)]
pub fn tail_word_ne(tail: &[u8]) -> u64 {
  debug_assert!(tail.len() <= 8);
  if let Ok(word) = <[u8; 8]>::try_from(tail) {
    return u64::from_ne_bytes(word);
  }
  let (mut acc, loose) = match tail.split_first_chunk::<4>() {
    Some((head, rest)) => (u64::from(u32::from_ne_bytes(*head)), (4, rest)),
    None => (0, (0, tail)),
  };
  let (offset, rest) = loose;
  for (i, &b) in rest.iter().enumerate() {
    acc = acc.wrapping_add(u64::from(b) << (8 * (offset + i)));
  }
  acc
}
