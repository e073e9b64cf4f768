//! CRC-32 (reflected) accumulator and one-shot functions.
//!
//! Parameters for the default algorithm (CRC-32/ZIP):
//! - width: 32
//! - poly: 0x04C11DB7 (reflected: 0xEDB88320)
//! - seed: 0xFFFF_FFFF
//! - xor_out: 0xFFFF_FFFF
//!
//! The accumulator keeps a single raw register. The seed is loaded as-is (the
//! default seed is the pre-complement), and [`Crc32::finalize`] applies the
//! post-complement. To chain a finished checksum into a new computation,
//! complement it first, or use [`Crc32::resume`].
//!
//! # Usage
//!
//! ```
//! use crckit::{Crc32, crc32};
//!
//! assert_eq!(crc32::compute(b"123456789"), 0xCBF4_3926);
//!
//! let mut h = Crc32::new();
//! h.update(b"1234");
//! h.update(b"56789");
//! assert_eq!(h.finalize(), 0xCBF4_3926);
//! assert_eq!(h.finalize_bytes(), [0xCB, 0xF4, 0x39, 0x26]);
//! ```

use core::fmt;
use std::sync::Arc;

use traits::{Checksum, RangeError, error::subrange};

use crate::{
  common::{portable, tables::Table32},
  params::CrcParams,
  registry::TableRegistry,
};

/// Streaming CRC-32 accumulator.
///
/// Not synchronized: share the table, not the accumulator. Use one
/// accumulator per thread.
#[derive(Clone)]
pub struct Crc32 {
  table: Arc<Table32>,
  polynomial: u32,
  seed: u32,
  /// Raw register; `finalize` applies the output XOR.
  state: u32,
}

impl Crc32 {
  /// Reflected CRC-32/ZIP polynomial.
  pub const DEFAULT_POLYNOMIAL: u32 = CrcParams::CRC32_ZIP.polynomial as u32;
  /// All-ones seed (the conventional pre-complement).
  pub const DEFAULT_SEED: u32 = CrcParams::CRC32_ZIP.seed as u32;
  /// Size of the checksum in bits.
  pub const BITS: u32 = 32;
  const XOR_OUT: u32 = CrcParams::CRC32_ZIP.xor_out as u32;

  /// Create an accumulator for CRC-32/ZIP.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_params(Self::DEFAULT_POLYNOMIAL, Self::DEFAULT_SEED)
  }

  /// Create an accumulator for `polynomial` starting from the raw register `seed`.
  ///
  /// The table comes from the process-wide [`TableRegistry`].
  #[inline]
  #[must_use]
  pub fn with_params(polynomial: u32, seed: u32) -> Self {
    Self::with_registry(TableRegistry::global(), polynomial, seed)
  }

  /// Like [`with_params`](Self::with_params), taking the table from `registry`.
  #[must_use]
  pub fn with_registry(registry: &TableRegistry, polynomial: u32, seed: u32) -> Self {
    Self {
      table: registry.crc32_table(polynomial),
      polynomial,
      seed,
      state: seed,
    }
  }

  /// Create a CRC-32/ZIP accumulator that continues from a finished checksum.
  ///
  /// Feeding `B` afterwards yields the checksum of `A ++ B` when `crc` is the
  /// checksum of `A`.
  #[inline]
  #[must_use]
  pub fn resume(crc: u32) -> Self {
    Self::with_params(Self::DEFAULT_POLYNOMIAL, crc ^ Self::XOR_OUT)
  }

  /// The reflected polynomial this accumulator was built for.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  /// The raw register value `reset` returns to.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }

  /// The lookup table in use.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table32 {
    &self.table
  }

  /// Reset the running value to the seed.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.seed;
  }

  /// Feed a single byte.
  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.state = portable::update32(self.state, &[byte], &self.table);
  }

  /// Feed a buffer.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = portable::update32(self.state, data, &self.table);
  }

  /// Feed `len` bytes of `data` starting at `offset`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if the window does not fit inside `data`; the
  /// running value is unchanged.
  #[inline]
  pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    self.update(subrange(data, offset, len)?);
    Ok(())
  }

  /// The raw running register, without the output complement.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u32 {
    self.state
  }

  /// The finished checksum of everything fed so far.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.state ^ Self::XOR_OUT
  }

  /// The finished checksum as big-endian bytes.
  #[inline]
  #[must_use]
  pub const fn finalize_bytes(&self) -> [u8; 4] {
    self.finalize().to_be_bytes()
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Crc32 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32")
      .field("polynomial", &format_args!("{:#010x}", self.polynomial))
      .field("seed", &format_args!("{:#010x}", self.seed))
      .field("state", &format_args!("{:#010x}", self.state))
      .finish_non_exhaustive()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Bytes = [u8; 4];

  #[inline]
  fn new() -> Self {
    Crc32::new()
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Crc32::update_byte(self, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32::update(self, data);
  }

  #[inline]
  fn value(&self) -> u32 {
    Crc32::value(self)
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Crc32::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc32::reset(self);
  }

  #[inline]
  fn encode(value: u32) -> [u8; 4] {
    value.to_be_bytes()
  }

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    compute(data)
  }
}

impl std::io::Write for Crc32 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot API
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ZIP of `data`.
#[inline]
#[must_use]
pub fn compute(data: &[u8]) -> u32 {
  compute_with(Crc32::DEFAULT_POLYNOMIAL, Crc32::DEFAULT_SEED, data)
}

/// CRC-32/ZIP of `data` starting from the raw register `seed`.
///
/// To continue from a finished checksum `crc`, pass `!crc`.
#[inline]
#[must_use]
pub fn compute_seeded(seed: u32, data: &[u8]) -> u32 {
  compute_with(Crc32::DEFAULT_POLYNOMIAL, seed, data)
}

/// CRC-32 of `data` for any reflected `polynomial`, starting from `seed`.
#[inline]
#[must_use]
pub fn compute_with(polynomial: u32, seed: u32, data: &[u8]) -> u32 {
  compute_in(TableRegistry::global(), polynomial, seed, data)
}

/// Like [`compute_with`], taking the table from `registry`.
#[must_use]
pub fn compute_in(registry: &TableRegistry, polynomial: u32, seed: u32, data: &[u8]) -> u32 {
  let table = registry.crc32_table(polynomial);
  portable::update32(seed, data, &table) ^ Crc32::XOR_OUT
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;
  use crate::common::tables::{CRC32_ZIP_POLY, generate_crc32_table};

  const CASTAGNOLI_POLY: u32 = 0x82F6_3B78;

  #[test]
  fn test_check_string() {
    assert_eq!(compute(b"123456789"), 0xCBF4_3926);
    assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn test_empty() {
    assert_eq!(compute(b""), 0);
    assert_eq!(Crc32::new().finalize(), 0);
  }

  #[test]
  fn test_single_zero_byte() {
    let mut h = Crc32::new();
    h.update_byte(0x00);
    assert_eq!(h.finalize(), 0xD202_EF8D);
  }

  #[test]
  fn test_custom_polynomial() {
    assert_eq!(compute_with(CASTAGNOLI_POLY, !0, b"123456789"), 0xE306_9283);

    let mut h = Crc32::with_params(CASTAGNOLI_POLY, !0);
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0xE306_9283);
    assert_eq!(h.polynomial(), CASTAGNOLI_POLY);
  }

  #[test]
  fn test_incremental() {
    let mut h = Crc32::new();
    h.update(b"1234");
    h.update(b"");
    h.update(b"56789");
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_byte_at_a_time() {
    let mut h = Crc32::new();
    for &b in b"123456789" {
      h.update_byte(b);
    }
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_value_is_raw_register() {
    let mut h = Crc32::new();
    assert_eq!(h.value(), Crc32::DEFAULT_SEED);
    h.update(b"123456789");
    assert_eq!(h.value(), !0xCBF4_3926);
    assert_eq!(h.finalize(), !h.value());
  }

  #[test]
  fn test_finalize_does_not_mutate() {
    let mut h = Crc32::new();
    h.update(b"1234");
    let first = h.finalize();
    assert_eq!(h.finalize(), first);
    h.update(b"56789");
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_reset_returns_to_seed() {
    let mut h = Crc32::with_params(CRC32_ZIP_POLY, 0x1234_5678);
    h.update(b"some data");
    h.reset();
    assert_eq!(h.value(), 0x1234_5678);
    assert_eq!(h.seed(), 0x1234_5678);

    let mut d = Crc32::new();
    d.update(b"abc");
    d.reset();
    d.update(b"123456789");
    assert_eq!(d.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_update_range() {
    let buf = b"xx123456789yy";
    let mut h = Crc32::new();
    h.update_range(buf, 2, 9).unwrap();
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_update_range_out_of_bounds_leaves_state() {
    let mut h = Crc32::new();
    h.update(b"1234");
    let before = h.value();

    assert_eq!(h.update_range(b"abc", 1, 3), Err(RangeError::new(1, 3, 3)));
    assert_eq!(h.update_range(b"abc", 4, 0), Err(RangeError::new(4, 0, 3)));
    assert_eq!(h.update_range(b"abc", 1, usize::MAX), Err(RangeError::new(1, usize::MAX, 3)));
    assert_eq!(h.value(), before);

    h.update(b"56789");
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_resume() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let crc_a = compute(a);
    let mut h = Crc32::resume(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), compute(data));
    assert_eq!(compute_seeded(!crc_a, b), compute(data));
  }

  #[test]
  fn test_finalize_bytes_big_endian() {
    assert_eq!(<Crc32 as Checksum>::encode(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);

    let mut h = Crc32::new();
    h.update(b"123456789");
    assert_eq!(h.finalize_bytes(), [0xCB, 0xF4, 0x39, 0x26]);
  }

  #[test]
  fn test_default_table_is_canonical() {
    assert_eq!(*Crc32::new().table(), generate_crc32_table(CRC32_ZIP_POLY));
  }

  #[test]
  fn test_injected_registry() {
    let registry = TableRegistry::new();
    let mut h = Crc32::with_registry(&registry, CRC32_ZIP_POLY, !0);
    h.update(b"123456789");
    assert_eq!(h.finalize(), compute_in(&registry, CRC32_ZIP_POLY, !0, b"123456789"));
    assert_eq!(registry.stats().crc32_shared_builds, 1);
  }

  #[test]
  fn test_io_write() {
    let mut h = Crc32::new();
    h.write_all(b"1234").unwrap();
    write!(h, "56789").unwrap();
    h.flush().unwrap();
    assert_eq!(h.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_debug_shows_registers() {
    let dbg = format!("{:?}", Crc32::new());
    assert!(dbg.contains("0xedb88320"), "{dbg}");
    assert!(dbg.contains("0xffffffff"), "{dbg}");
  }
}
