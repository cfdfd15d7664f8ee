#![no_main]

use hashes::fast::{SpookyHash64, SpookySeed};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let seed_len = core::cmp::min(16, input.len());
  let (seed_bytes, data) = input.split_at(seed_len);

  let mut padded = [0u8; 16];
  padded[..seed_len].copy_from_slice(seed_bytes);
  let seed = SpookySeed::from_bytes(&padded);

  let oneshot = SpookyHash64::hash_with_seed(seed, data);

  let mut contiguous = SpookyHash64::with_seed(seed);
  contiguous.update(data);
  assert_eq!(contiguous.finalize(), oneshot);
  assert_eq!(contiguous.finalize(), oneshot);
  assert_eq!(contiguous.total_len(), data.len() as u64);
});
