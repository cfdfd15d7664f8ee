#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{SpookyHash64, SpookySeed};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

#[derive(Arbitrary, Debug)]
struct Input {
  k0: u64,
  k1: u64,
  data: Vec<u8>,
  // Chunk sizes are taken modulo 512; zero produces an empty update.
  chunks: Vec<u16>,
}

fuzz_target!(|input: Input| {
  let seed = SpookySeed::new(input.k0, input.k1);
  let expected = SpookyHash64::hash_with_seed(seed, &input.data);

  let mut h = SpookyHash64::with_seed(seed);
  let mut rest = input.data.as_slice();
  for &c in &input.chunks {
    let take = (c as usize % 512).min(rest.len());
    let (head, tail) = rest.split_at(take);
    h.update(head);
    rest = tail;
    // Mid-stream digests must not disturb the stream.
    let _ = h.finalize();
  }
  h.update(rest);

  assert_eq!(h.finalize(), expected);
});
