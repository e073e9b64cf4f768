//! Table-less reflected CRC-64.

/// Advance a raw CRC-64 register over `data` without a lookup table.
///
/// # Example
///
/// ```
/// use crckit::bitwise::crc64::compute;
///
/// assert_eq!(compute(0xD800_0000_0000_0000, 0, b"123456789"), 0x46A5_A938_8A5B_EFFE);
/// ```
#[inline]
#[must_use]
pub fn compute(poly: u64, mut crc: u64, data: &[u8]) -> u64 {
  for &byte in data {
    crc = compute_byte(poly, crc, byte);
  }
  crc
}

/// Advance a raw CRC-64 register by one byte.
#[inline]
#[must_use]
pub const fn compute_byte(poly: u64, mut crc: u64, byte: u8) -> u64 {
  crc ^= byte as u64;
  let mut i = 0;
  while i < 8 {
    let mask = 0u64.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (poly & mask);
    i += 1;
  }
  crc
}
