//! Differential fuzz target: table-driven vs bitwise reference.
//!
//! Covers arbitrary reflected polynomials and seeds for both widths.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{CRC32_ZIP_POLY, CRC64_ISO_POLY, bitwise, crc32, crc64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  poly32: u32,
  seed32: u32,
  poly64: u64,
  seed64: u64,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let table32 = crc32::compute_with(input.poly32, input.seed32, data);
  let bit32 = bitwise::crc32::compute(input.poly32, input.seed32, data) ^ !0;
  assert_eq!(table32, bit32, "crc32 differential mismatch");

  let table64 = crc64::compute_with(input.poly64, input.seed64, data);
  let bit64 = bitwise::crc64::compute(input.poly64, input.seed64, data);
  assert_eq!(table64, bit64, "crc64 differential mismatch");

  assert_eq!(crc32::compute(data), bitwise::crc32::compute(CRC32_ZIP_POLY, !0, data) ^ !0);
  assert_eq!(crc64::compute(data), bitwise::crc64::compute(CRC64_ISO_POLY, 0, data));
});
