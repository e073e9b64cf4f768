//! Table-less reflected CRC-32.

/// Advance a raw CRC-32 register over `data` without a lookup table.
///
/// # Example
///
/// ```
/// use crckit::bitwise::crc32::compute;
///
/// let crc = compute(0xEDB8_8320, 0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn compute(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(poly, crc, byte);
  }
  crc
}

/// Advance a raw CRC-32 register by one byte.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn compute_byte(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut i = 0;
  while i < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (poly & mask);
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::tables::CRC32_ZIP_POLY;

  #[test]
  fn test_check_value() {
    assert_eq!(compute(CRC32_ZIP_POLY, !0, b"123456789") ^ !0, 0xCBF4_3926);
  }

  #[test]
  fn test_castagnoli_check_value() {
    assert_eq!(compute(0x82F6_3B78, !0, b"123456789") ^ !0, 0xE306_9283);
  }

  #[test]
  fn test_single_zero_byte() {
    assert_eq!(compute(CRC32_ZIP_POLY, !0, &[0x00]) ^ !0, 0xD202_EF8D);
  }

  #[test]
  fn test_const_computation() {
    const CRC_OF_ZERO: u32 = compute_byte(CRC32_ZIP_POLY, 0xFFFF_FFFF, 0x00);
    assert_eq!(CRC_OF_ZERO ^ 0xFFFF_FFFF, 0xD202_EF8D);
  }
}
