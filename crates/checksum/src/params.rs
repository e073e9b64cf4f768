//! CRC algorithm parameters.
//!
//! Parameters follow the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! conventions, restricted to the reflected (LSB-first) family this crate
//! implements. The polynomial is stored in *reflected* form, ready for the
//! right-shift table algorithm.

use crate::common::tables::{CRC32_ZIP_POLY, CRC64_ISO_POLY};

/// CRC algorithm parameters.
///
/// - `width`: Number of bits in the CRC (32 or 64)
/// - `polynomial`: The generator polynomial, reflected
/// - `seed`: Initial value of the raw register
/// - `xor_out`: Value XORed into the raw register to produce the checksum
/// - `check`: Checksum of the ASCII string `"123456789"`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits.
  pub width: u8,
  /// Reflected generator polynomial.
  pub polynomial: u64,
  /// Initial value for the raw register.
  pub seed: u64,
  /// XOR value applied to the final register.
  pub xor_out: u64,
  /// Checksum of `b"123456789"`.
  pub check: u64,
}

impl CrcParams {
  /// CRC-32 as used by ZIP, gzip and PNG.
  ///
  /// Pre-complemented seed, post-complemented output.
  pub const CRC32_ZIP: Self = Self {
    width: 32,
    polynomial: CRC32_ZIP_POLY as u64,
    seed: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
  };

  /// CRC-64 with the ISO 3309 polynomial.
  ///
  /// Zero seed and no output XOR, so an empty input checksums to zero.
  pub const CRC64_ISO: Self = Self {
    width: 64,
    polynomial: CRC64_ISO_POLY,
    seed: 0,
    xor_out: 0,
    check: 0x46A5_A938_8A5B_EFFE,
  };

  /// Mask covering `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    if self.width >= 64 {
      u64::MAX
    } else {
      (1u64 << self.width) - 1
    }
  }

  /// Output size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    (self.width / 8) as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_values_fit_width() {
    for p in [CrcParams::CRC32_ZIP, CrcParams::CRC64_ISO] {
      let mask = p.mask();
      assert_eq!(p.polynomial & !mask, 0);
      assert_eq!(p.seed & !mask, 0);
      assert_eq!(p.xor_out & !mask, 0);
      assert_eq!(p.check & !mask, 0);
    }
  }

  #[test]
  fn test_output_sizes() {
    assert_eq!(CrcParams::CRC32_ZIP.output_size(), 4);
    assert_eq!(CrcParams::CRC64_ISO.output_size(), 8);
  }

  #[test]
  fn test_check_values_match_bitwise() {
    let p = CrcParams::CRC32_ZIP;
    let crc = crate::bitwise::crc32::compute(p.polynomial as u32, p.seed as u32, b"123456789") ^ p.xor_out as u32;
    assert_eq!(u64::from(crc), p.check);

    let p = CrcParams::CRC64_ISO;
    let crc = crate::bitwise::crc64::compute(p.polynomial, p.seed, b"123456789") ^ p.xor_out;
    assert_eq!(crc, p.check);
  }
}
