//! Fuzz target for the streaming CRC API.
//!
//! Arbitrary sequences of update calls must match the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{Checksum, Crc32, Crc64Iso};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  check_streaming::<Crc32>(&input.data, &input.chunk_sizes, "crc32");
  check_streaming::<Crc64Iso>(&input.data, &input.chunk_sizes, "crc64/iso");
});

fn check_streaming<C: Checksum>(data: &[u8], chunk_sizes: &[usize], name: &str) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    if chunk_size == 1 {
      hasher.update_byte(data[offset]);
    } else {
      hasher.update(&data[offset..end]);
    }
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");
  assert_eq!(hasher.finalize(), hasher.finalize(), "{name} finalize not idempotent");
}
