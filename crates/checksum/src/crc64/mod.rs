//! CRC-64 (reflected) accumulator and one-shot functions.
//!
//! This module provides:
//! - [`Crc64`] - CRC-64 over any reflected polynomial
//! - [`Crc64Iso`] - CRC-64 pinned to the ISO 3309 polynomial
//!
//! Unlike CRC-32/ZIP, the 64-bit algorithms here use no pre-complement: the
//! default seed is zero and the finished checksum is the raw register. An
//! empty input therefore checksums to zero, and a finished checksum can be
//! passed straight back in as a seed.
//!
//! Only the ISO polynomial is served from the shared table cache; any other
//! polynomial builds a private table per accumulator or one-shot call.

mod iso;

use core::fmt;
use std::sync::Arc;

pub use iso::{Crc64Iso, compute, compute_seeded};
use traits::{Checksum, RangeError, error::subrange};

use crate::{
  common::{portable, tables::Table64},
  params::CrcParams,
  registry::TableRegistry,
};

/// Streaming CRC-64 accumulator for an arbitrary reflected polynomial.
///
/// Not synchronized: use one accumulator per thread.
#[derive(Clone)]
pub struct Crc64 {
  table: Arc<Table64>,
  polynomial: u64,
  seed: u64,
  state: u64,
}

impl Crc64 {
  /// Reflected ISO 3309 polynomial.
  pub const ISO_POLYNOMIAL: u64 = CrcParams::CRC64_ISO.polynomial;
  /// Zero seed (no pre-complement).
  pub const DEFAULT_SEED: u64 = CrcParams::CRC64_ISO.seed;
  /// Size of the checksum in bits.
  pub const BITS: u32 = 64;
  const XOR_OUT: u64 = CrcParams::CRC64_ISO.xor_out;

  /// Create an accumulator for `polynomial` with the default seed.
  #[inline]
  #[must_use]
  pub fn with_polynomial(polynomial: u64) -> Self {
    Self::with_params(polynomial, Self::DEFAULT_SEED)
  }

  /// Create an accumulator for `polynomial` starting from `seed`.
  ///
  /// The table comes from the process-wide [`TableRegistry`].
  #[inline]
  #[must_use]
  pub fn with_params(polynomial: u64, seed: u64) -> Self {
    Self::with_registry(TableRegistry::global(), polynomial, seed)
  }

  /// Like [`with_params`](Self::with_params), taking the table from `registry`.
  #[must_use]
  pub fn with_registry(registry: &TableRegistry, polynomial: u64, seed: u64) -> Self {
    Self {
      table: registry.crc64_table(polynomial),
      polynomial,
      seed,
      state: seed,
    }
  }

  /// Create an accumulator for `polynomial` that continues from a finished checksum.
  #[inline]
  #[must_use]
  pub fn resume(polynomial: u64, crc: u64) -> Self {
    Self::with_params(polynomial, crc ^ Self::XOR_OUT)
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }

  #[inline]
  #[must_use]
  pub fn table(&self) -> &Table64 {
    &self.table
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.seed;
  }

  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.state = portable::update64(self.state, &[byte], &self.table);
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = portable::update64(self.state, data, &self.table);
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

  /// The raw running register.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.state
  }

  /// The finished checksum of everything fed so far.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    self.state ^ Self::XOR_OUT
  }

  /// The finished checksum as big-endian bytes.
  #[inline]
  #[must_use]
  pub const fn finalize_bytes(&self) -> [u8; 8] {
    self.finalize().to_be_bytes()
  }
}

impl Default for Crc64 {
  #[inline]
  fn default() -> Self {
    Self::with_polynomial(Self::ISO_POLYNOMIAL)
  }
}

impl fmt::Debug for Crc64 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc64")
      .field("polynomial", &format_args!("{:#018x}", self.polynomial))
      .field("seed", &format_args!("{:#018x}", self.seed))
      .field("state", &format_args!("{:#018x}", self.state))
      .finish_non_exhaustive()
  }
}

impl Checksum for Crc64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Bytes = [u8; 8];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Crc64::update_byte(self, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc64::update(self, data);
  }

  #[inline]
  fn value(&self) -> u64 {
    Crc64::value(self)
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc64::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc64::reset(self);
  }

  #[inline]
  fn encode(value: u64) -> [u8; 8] {
    value.to_be_bytes()
  }
}

impl std::io::Write for Crc64 {
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

/// CRC-64 of `data` for any reflected `polynomial`, starting from `seed`.
#[inline]
#[must_use]
pub fn compute_with(polynomial: u64, seed: u64, data: &[u8]) -> u64 {
  compute_in(TableRegistry::global(), polynomial, seed, data)
}

/// Like [`compute_with`], taking the table from `registry`.
#[must_use]
pub fn compute_in(registry: &TableRegistry, polynomial: u64, seed: u64, data: &[u8]) -> u64 {
  let table = registry.crc64_table(polynomial);
  portable::update64(seed, data, &table) ^ Crc64::XOR_OUT
}
