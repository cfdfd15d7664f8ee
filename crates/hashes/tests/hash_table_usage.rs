//! SpookyHash64 as the bucket function of a fixed-size open-addressing table.
//!
//! A futures contract is hashed field by field through one accumulator; the
//! table only uses the digest as a bucket index.

use hashes::fast::SpookyHash64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Future {
  name: &'static str,
  call_month: u8,
  call_year: i16,
}

impl Future {
  const fn new(name: &'static str, call_month: u8, call_year: i16) -> Self {
    Self {
      name,
      call_month,
      call_year,
    }
  }
}

trait BucketHash<T> {
  fn bucket_hash(&self, value: &T) -> u64;
}

#[derive(Default)]
struct HashFuture;

impl BucketHash<Future> for HashFuture {
  fn bucket_hash(&self, future: &Future) -> u64 {
    let mut h = SpookyHash64::new();
    h.update(future.name.as_bytes());
    h.update(&[future.call_month]);
    h.update(&future.call_year.to_ne_bytes());
    h.finalize()
  }
}

/// Linear-probing table over borrowed values; capacity is a power of two at
/// least four times the number of values.
struct HashTable<'a, T, H> {
  buckets: Vec<Option<&'a T>>,
  mask: usize,
  hasher: H,
}

impl<'a, T: PartialEq, H: BucketHash<T> + Default> HashTable<'a, T, H> {
  fn new(values: &'a [T]) -> Self {
    let mut len = 4;
    while len < values.len() * 4 {
      len *= 2;
    }
    let mut table = Self {
      buckets: vec![None; len],
      mask: len - 1,
      hasher: H::default(),
    };
    for value in values {
      match table.lookup(value) {
        Ok(_) => panic!("duplicate value"),
        Err(idx) => table.buckets[idx] = Some(value),
      }
    }
    table
  }

  /// `Ok(idx)` if present, otherwise `Err(idx)` of the first free slot.
  fn lookup(&self, value: &T) -> Result<usize, usize> {
    let mut idx = self.hasher.bucket_hash(value) as usize & self.mask;
    while let Some(existing) = self.buckets[idx] {
      if existing == value {
        return Ok(idx);
      }
      idx = (idx + 1) & self.mask;
    }
    Err(idx)
  }

  fn contains(&self, value: &T) -> bool {
    self.lookup(value).is_ok()
  }
}

#[test]
fn futures_table_membership() {
  let futures = [
    Future::new("Swiss Franc", b'F', 2014),
    Future::new("US Dollar", b'G', 2015),
    Future::new("Canadian Dollar", b'Z', 2014),
    Future::new("British Pound", b'M', 2015),
    Future::new("Deutsche Mark", b'X', 2016),
    Future::new("Eurodollar", b'Q', 2017),
  ];

  let table: HashTable<'_, Future, HashFuture> = HashTable::new(&futures);
  for future in &futures {
    assert!(table.contains(future), "{future:?}");
  }

  assert!(!table.contains(&Future::new("French Franc", b'N', 2019)));
  assert!(!table.contains(&Future::new("Swiss Franc", b'X', 2014)));
  assert!(!table.contains(&Future::new("US Dollar", b'F', 2014)));
}

#[test]
fn field_by_field_equals_concatenated_bytes() {
  let future = Future::new("Eurodollar", b'Q', 2017);
  let mut bytes = future.name.as_bytes().to_vec();
  bytes.push(future.call_month);
  bytes.extend_from_slice(&future.call_year.to_ne_bytes());

  let mut h = SpookyHash64::new();
  h.update(&bytes);
  assert_eq!(HashFuture.bucket_hash(&future), h.finalize());
}
