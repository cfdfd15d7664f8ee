//! SpookyHash V2 mixing primitives.
//!
//! Rotation distances and round order are transcribed from Bob Jenkins'
//! public-domain reference and must not be "cleaned up": bit-exact agreement
//! with the published algorithm is the definition of correct here.

#![allow(clippy::indexing_slicing)] // Fixed-size state arrays

use super::{BLOCK_SIZE, NUM_VARS, SC_CONST, SHORT_BLOCK};
use crate::util::{lanes_ne, tail_word_ne};

/// Long-path state: twelve 64-bit words.
pub(crate) type State = [u64; NUM_VARS];

/// Initial long-path state for a seed: `k0, k1, SC_CONST` repeated four times.
#[inline(always)]
#[must_use]
pub(crate) const fn long_init(k0: u64, k1: u64) -> State {
  [
    k0, k1, SC_CONST, k0, k1, SC_CONST, k0, k1, SC_CONST, k0, k1, SC_CONST,
  ]
}

/// Fold one 96-byte block into the state.
///
/// Constant time per block, no data-dependent branches. Full diffusion of a
/// lane across all twelve words completes with the next `mix` or `end`.
#[inline(always)]
#[rustfmt::skip]
pub(crate) fn mix(s: &mut State, block: &[u8; BLOCK_SIZE]) {
  let d: [u64; NUM_VARS] = lanes_ne(block);

  s[0]  = s[0].wrapping_add(d[0]);   s[2]  ^= s[10]; s[11] ^= s[0];  s[0]  = s[0].rotate_left(11);  s[11] = s[11].wrapping_add(s[1]);
  s[1]  = s[1].wrapping_add(d[1]);   s[3]  ^= s[11]; s[0]  ^= s[1];  s[1]  = s[1].rotate_left(32);  s[0]  = s[0].wrapping_add(s[2]);
  s[2]  = s[2].wrapping_add(d[2]);   s[4]  ^= s[0];  s[1]  ^= s[2];  s[2]  = s[2].rotate_left(43);  s[1]  = s[1].wrapping_add(s[3]);
  s[3]  = s[3].wrapping_add(d[3]);   s[5]  ^= s[1];  s[2]  ^= s[3];  s[3]  = s[3].rotate_left(31);  s[2]  = s[2].wrapping_add(s[4]);
  s[4]  = s[4].wrapping_add(d[4]);   s[6]  ^= s[2];  s[3]  ^= s[4];  s[4]  = s[4].rotate_left(17);  s[3]  = s[3].wrapping_add(s[5]);
  s[5]  = s[5].wrapping_add(d[5]);   s[7]  ^= s[3];  s[4]  ^= s[5];  s[5]  = s[5].rotate_left(28);  s[4]  = s[4].wrapping_add(s[6]);
  s[6]  = s[6].wrapping_add(d[6]);   s[8]  ^= s[4];  s[5]  ^= s[6];  s[6]  = s[6].rotate_left(39);  s[5]  = s[5].wrapping_add(s[7]);
  s[7]  = s[7].wrapping_add(d[7]);   s[9]  ^= s[5];  s[6]  ^= s[7];  s[7]  = s[7].rotate_left(57);  s[6]  = s[6].wrapping_add(s[8]);
  s[8]  = s[8].wrapping_add(d[8]);   s[10] ^= s[6];  s[7]  ^= s[8];  s[8]  = s[8].rotate_left(55);  s[7]  = s[7].wrapping_add(s[9]);
  s[9]  = s[9].wrapping_add(d[9]);   s[11] ^= s[7];  s[8]  ^= s[9];  s[9]  = s[9].rotate_left(54);  s[8]  = s[8].wrapping_add(s[10]);
  s[10] = s[10].wrapping_add(d[10]); s[0]  ^= s[8];  s[9]  ^= s[10]; s[10] = s[10].rotate_left(22); s[9]  = s[9].wrapping_add(s[11]);
  s[11] = s[11].wrapping_add(d[11]); s[1]  ^= s[9];  s[10] ^= s[11]; s[11] = s[11].rotate_left(46); s[10] = s[10].wrapping_add(s[0]);
}

#[inline(always)]
#[rustfmt::skip]
fn end_partial(h: &mut State) {
  h[11] = h[11].wrapping_add(h[1]);  h[2]  ^= h[11]; h[1]  = h[1].rotate_left(44);
  h[0]  = h[0].wrapping_add(h[2]);   h[3]  ^= h[0];  h[2]  = h[2].rotate_left(15);
  h[1]  = h[1].wrapping_add(h[3]);   h[4]  ^= h[1];  h[3]  = h[3].rotate_left(34);
  h[2]  = h[2].wrapping_add(h[4]);   h[5]  ^= h[2];  h[4]  = h[4].rotate_left(21);
  h[3]  = h[3].wrapping_add(h[5]);   h[6]  ^= h[3];  h[5]  = h[5].rotate_left(38);
  h[4]  = h[4].wrapping_add(h[6]);   h[7]  ^= h[4];  h[6]  = h[6].rotate_left(33);
  h[5]  = h[5].wrapping_add(h[7]);   h[8]  ^= h[5];  h[7]  = h[7].rotate_left(10);
  h[6]  = h[6].wrapping_add(h[8]);   h[9]  ^= h[6];  h[8]  = h[8].rotate_left(13);
  h[7]  = h[7].wrapping_add(h[9]);   h[10] ^= h[7];  h[9]  = h[9].rotate_left(38);
  h[8]  = h[8].wrapping_add(h[10]);  h[11] ^= h[8];  h[10] = h[10].rotate_left(53);
  h[9]  = h[9].wrapping_add(h[11]);  h[0]  ^= h[9];  h[11] = h[11].rotate_left(42);
  h[10] = h[10].wrapping_add(h[0]);  h[1]  ^= h[10]; h[0]  = h[0].rotate_left(54);
}

/// Absorb the final padded block and run three end rounds.
///
/// `block` must already carry the zero padding and the remainder count in its
/// last byte.
#[inline(always)]
pub(crate) fn end(h: &mut State, block: &[u8; BLOCK_SIZE]) {
  let d: [u64; NUM_VARS] = lanes_ne(block);
  for (word, lane) in h.iter_mut().zip(d) {
    *word = word.wrapping_add(lane);
  }
  end_partial(h);
  end_partial(h);
  end_partial(h);
}

/// Build the final long-path block: remainder, zero padding, remainder count.
#[inline(always)]
#[must_use]
pub(crate) fn padded_final_block(remainder: &[u8]) -> [u8; BLOCK_SIZE] {
  debug_assert!(remainder.len() < BLOCK_SIZE);
  let mut block = [0u8; BLOCK_SIZE];
  block[..remainder.len()].copy_from_slice(remainder);
  block[BLOCK_SIZE - 1] = remainder.len() as u8;
  block
}

/// Four-variable ARX round used by the short path.
#[inline(always)]
#[rustfmt::skip]
pub(crate) fn short_mix(h: &mut [u64; 4]) {
  let [mut a, mut b, mut c, mut d] = *h;
  c = c.rotate_left(50); c = c.wrapping_add(d); a ^= c;
  d = d.rotate_left(52); d = d.wrapping_add(a); b ^= d;
  a = a.rotate_left(30); a = a.wrapping_add(b); c ^= a;
  b = b.rotate_left(41); b = b.wrapping_add(c); d ^= b;
  c = c.rotate_left(54); c = c.wrapping_add(d); a ^= c;
  d = d.rotate_left(48); d = d.wrapping_add(a); b ^= d;
  a = a.rotate_left(38); a = a.wrapping_add(b); c ^= a;
  b = b.rotate_left(37); b = b.wrapping_add(c); d ^= b;
  c = c.rotate_left(62); c = c.wrapping_add(d); a ^= c;
  d = d.rotate_left(34); d = d.wrapping_add(a); b ^= d;
  a = a.rotate_left(5);  a = a.wrapping_add(b); c ^= a;
  b = b.rotate_left(36); b = b.wrapping_add(c); d ^= b;
  *h = [a, b, c, d];
}

/// Short-path finalization round; every output bit depends on every input bit.
#[inline(always)]
#[rustfmt::skip]
pub(crate) fn short_end(h: &mut [u64; 4]) {
  let [mut a, mut b, mut c, mut d] = *h;
  d ^= c; c = c.rotate_left(15); d = d.wrapping_add(c);
  a ^= d; d = d.rotate_left(52); a = a.wrapping_add(d);
  b ^= a; a = a.rotate_left(26); b = b.wrapping_add(a);
  c ^= b; b = b.rotate_left(51); c = c.wrapping_add(b);
  d ^= c; c = c.rotate_left(28); d = d.wrapping_add(c);
  a ^= d; d = d.rotate_left(9);  a = a.wrapping_add(d);
  b ^= a; a = a.rotate_left(47); b = b.wrapping_add(a);
  c ^= b; b = b.rotate_left(54); c = c.wrapping_add(b);
  d ^= c; c = c.rotate_left(32); d = d.wrapping_add(c);
  a ^= d; d = d.rotate_left(25); a = a.wrapping_add(d);
  b ^= a; a = a.rotate_left(63); b = b.wrapping_add(a);
  *h = [a, b, c, d];
}

/// Hash a message shorter than the long-path threshold.
///
/// Returns both 64-bit lanes; the digest is the first.
#[inline]
#[must_use]
pub(crate) fn short(k0: u64, k1: u64, data: &[u8]) -> (u64, u64) {
  debug_assert!(data.len() < super::BUFFER_SIZE);
  let mut h = [k0, k1, SC_CONST, SC_CONST];

  let (blocks, mut tail) = data.as_chunks::<SHORT_BLOCK>();
  for block in blocks {
    let p: [u64; 4] = lanes_ne(block);
    h[2] = h[2].wrapping_add(p[0]);
    h[3] = h[3].wrapping_add(p[1]);
    short_mix(&mut h);
    h[0] = h[0].wrapping_add(p[2]);
    h[1] = h[1].wrapping_add(p[3]);
  }

  if let Some((half, rest)) = tail.split_first_chunk::<16>() {
    let p: [u64; 2] = lanes_ne(half);
    h[2] = h[2].wrapping_add(p[0]);
    h[3] = h[3].wrapping_add(p[1]);
    short_mix(&mut h);
    tail = rest;
  }

  h[3] = h[3].wrapping_add((data.len() as u64) << 56);
  if tail.is_empty() {
    h[2] = h[2].wrapping_add(SC_CONST);
    h[3] = h[3].wrapping_add(SC_CONST);
  } else {
    let (lo, hi) = tail.split_at(tail.len().min(8));
    h[2] = h[2].wrapping_add(tail_word_ne(lo));
    h[3] = h[3].wrapping_add(tail_word_ne(hi));
  }

  short_end(&mut h);
  (h[0], h[1])
}

/// One-shot long-path hash over a contiguous message of at least 192 bytes.
///
/// Blocks are mixed straight from `data`; only the final partial block is
/// copied.
#[inline]
#[must_use]
pub(crate) fn long(k0: u64, k1: u64, data: &[u8]) -> (u64, u64) {
  let mut h = long_init(k0, k1);
  let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
  for block in blocks {
    mix(&mut h, block);
  }
  end(&mut h, &padded_final_block(tail));
  (h[0], h[1])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn long_init_repeats_seed_triplet() {
    let s = long_init(7, 9);
    for chunk in s.chunks_exact(3) {
      assert_eq!(chunk, [7, 9, SC_CONST]);
    }
  }

  #[test]
  fn padded_block_records_remainder_in_last_byte() {
    let block = padded_final_block(&[0xaa; 17]);
    assert!(block[..17].iter().all(|&b| b == 0xaa));
    assert!(block[17..BLOCK_SIZE - 1].iter().all(|&b| b == 0));
    assert_eq!(block[BLOCK_SIZE - 1], 17);

    assert_eq!(padded_final_block(&[]), [0u8; BLOCK_SIZE]);
  }

  #[test]
  fn mix_diffuses_every_lane_into_every_word() {
    // A single application leaves some words untouched; the following block
    // completes the spread.
    let base = long_init(1, 2);
    for lane in 0..NUM_VARS {
      let mut a = base;
      let mut b = base;
      let zero = [0u8; BLOCK_SIZE];
      let mut flipped = zero;
      flipped[lane * 8] ^= 1;
      mix(&mut a, &zero);
      mix(&mut b, &flipped);
      mix(&mut a, &zero);
      mix(&mut b, &zero);
      for word in 0..NUM_VARS {
        assert_ne!(a[word], b[word], "lane {lane} did not reach word {word}");
      }
    }
  }

  #[test]
  fn short_mix_is_a_permutation_step() {
    let mut h = [0u64; 4];
    short_mix(&mut h);
    assert_eq!(h, [0; 4]);

    let mut h = [1u64, 0, 0, 0];
    short_mix(&mut h);
    assert_ne!(h, [1, 0, 0, 0]);
  }

  #[test]
  fn short_empty_depends_only_on_seed() {
    let (a, b) = short(1, 2, &[]);
    assert_eq!(short(1, 2, &[]), (a, b));
    assert_ne!(short(0, 0, &[]).0, a);
  }

  #[cfg(target_endian = "little")]
  #[test]
  fn short_empty_matches_reference_hash32() {
    // Jenkins' TestResults: Hash32 of the empty message with seed 0.
    assert_eq!(short(0, 0, &[]).0 as u32, 0x6bf5_0919);
  }

  #[cfg(target_endian = "little")]
  #[test]
  fn short_prefixes_match_reference_hash32() {
    // buf[i] = i + 128, seed 0, low 32 bits of the first lane.
    const EXPECTED: [u32; 8] = [
      0x6bf5_0919, 0x70de_1d26, 0xa2b3_7298, 0x35bc_5fbf, 0x8223_b279, 0x5bcb_315e, 0x53fe_88a1, 0xf9f1_a233,
    ];
    let mut buf = [0u8; 8];
    for (i, b) in buf.iter_mut().enumerate() {
      *b = (i as u8).wrapping_add(128);
    }
    for (len, &want) in EXPECTED.iter().enumerate() {
      assert_eq!(short(0, 0, &buf[..len]).0 as u32, want, "len={len}");
    }
  }
}
