//! CRC-64/ISO checksum (ISO 3309 polynomial, reflected processing).
//!
//! Parameters:
//! - width: 64
//! - poly: x^64 + x^4 + x^3 + x + 1 (reflected: 0xD800000000000000)
//! - seed: 0
//! - xor_out: 0
//!
//! # Usage
//!
//! ```
//! use crckit::{Crc64Iso, crc64};
//!
//! assert_eq!(crc64::compute(b""), 0);
//! assert_eq!(crc64::compute(b"123456789"), 0x46A5_A938_8A5B_EFFE);
//!
//! let mut h = Crc64Iso::new();
//! h.update(b"1234");
//! h.update(b"56789");
//! assert_eq!(h.finalize(), 0x46A5_A938_8A5B_EFFE);
//! ```

use traits::{Checksum, RangeError};

use super::{Crc64, compute_with};
use crate::{common::tables::Table64, registry::TableRegistry};

/// CRC-64 accumulator pinned to the ISO 3309 polynomial.
///
/// Its table always comes from the shared cache (subject to the registry's
/// mode).
#[derive(Clone, Debug)]
pub struct Crc64Iso {
  inner: Crc64,
}

impl Crc64Iso {
  /// Reflected ISO 3309 polynomial.
  pub const POLYNOMIAL: u64 = Crc64::ISO_POLYNOMIAL;

  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_seed(Crc64::DEFAULT_SEED)
  }

  /// Create an accumulator starting from `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(seed: u64) -> Self {
    Self {
      inner: Crc64::with_params(Self::POLYNOMIAL, seed),
    }
  }

  /// Like [`with_seed`](Self::with_seed), taking the table from `registry`.
  #[inline]
  #[must_use]
  pub fn with_registry(registry: &TableRegistry, seed: u64) -> Self {
    Self {
      inner: Crc64::with_registry(registry, Self::POLYNOMIAL, seed),
    }
  }

  /// Create an accumulator that continues from a finished checksum.
  #[inline]
  #[must_use]
  pub fn resume(crc: u64) -> Self {
    Self {
      inner: Crc64::resume(Self::POLYNOMIAL, crc),
    }
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.inner.polynomial()
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.inner.seed()
  }

  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table64 {
    self.inner.table()
  }

  #[inline]
  pub fn reset(&mut self) {
    self.inner.reset();
  }

  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.inner.update_byte(byte);
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.inner.update(data);
  }

  /// Feed `len` bytes of `data` starting at `offset`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] if the window does not fit inside `data`.
  #[inline]
  pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    self.inner.update_range(data, offset, len)
  }

  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.inner.value()
  }

  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    self.inner.finalize()
  }

  #[inline]
  #[must_use]
  pub const fn finalize_bytes(&self) -> [u8; 8] {
    self.inner.finalize_bytes()
  }

  /// Unwrap into the general accumulator.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> Crc64 {
    self.inner
  }
}

impl Default for Crc64Iso {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc64Iso {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Bytes = [u8; 8];

  #[inline]
  fn new() -> Self {
    Crc64Iso::new()
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Crc64Iso::update_byte(self, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc64Iso::update(self, data);
  }

  #[inline]
  fn value(&self) -> u64 {
    Crc64Iso::value(self)
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc64Iso::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc64Iso::reset(self);
  }

  #[inline]
  fn encode(value: u64) -> [u8; 8] {
    value.to_be_bytes()
  }

  #[inline]
  fn checksum(data: &[u8]) -> u64 {
    compute(data)
  }
}

impl std::io::Write for Crc64Iso {
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

/// CRC-64/ISO of `data`.
#[inline]
#[must_use]
pub fn compute(data: &[u8]) -> u64 {
  compute_seeded(Crc64::DEFAULT_SEED, data)
}

/// CRC-64/ISO of `data` starting from `seed`.
///
/// A finished checksum can be passed directly as `seed` to continue it.
#[inline]
#[must_use]
pub fn compute_seeded(seed: u64, data: &[u8]) -> u64 {
  compute_with(Crc64Iso::POLYNOMIAL, seed, data)
}
