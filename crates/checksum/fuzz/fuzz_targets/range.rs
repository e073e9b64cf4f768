//! Fuzz target for bounds-checked range updates.
//!
//! In-bounds windows match slicing; out-of-bounds windows are rejected
//! without touching the running value.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{Checksum, Crc32, Crc64Iso, RangeError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  prefix: Vec<u8>,
  data: Vec<u8>,
  offset: usize,
  len: usize,
}

fuzz_target!(|input: Input| {
  check_range::<Crc32>(&input);
  check_range::<Crc64Iso>(&input);
});

fn check_range<C: Checksum>(input: &Input) {
  let mut hasher = C::new();
  hasher.update(&input.prefix);
  let before = hasher.value();

  let result = hasher.update_range(&input.data, input.offset, input.len);

  match input.offset.checked_add(input.len) {
    Some(end) if end <= input.data.len() => {
      assert!(result.is_ok());
      let mut expected = C::new();
      expected.update(&input.prefix);
      expected.update(&input.data[input.offset..end]);
      assert_eq!(hasher.finalize(), expected.finalize());
    }
    _ => {
      assert_eq!(result, Err(RangeError::new(input.offset, input.len, input.data.len())));
      assert_eq!(hasher.value(), before);
    }
  }
}
