//! Portable byte-at-a-time CRC update using a single 256-entry lookup table.
//!
//! Every accumulator and one-shot path funnels through these two functions,
//! so the numeric result never depends on which entry point the caller used.
//!
//! # Algorithm
//!
//! ```text
//! for each byte b:
//!   crc = table[(crc ^ b) & 0xFF] ^ (crc >> 8)
//! ```
//!
//! The register passed in and returned is *raw*: no seed or finishing
//! transform is applied here.

// SAFETY: Table indices are masked with `& 0xFF` and tables have 256 entries.
#![allow(clippy::indexing_slicing)]

use super::tables::{Table32, Table64};

/// Advance a raw CRC-32 register over `data`.
#[inline]
#[must_use]
pub(crate) fn update32(mut crc: u32, data: &[u8], table: &Table32) -> u32 {
  for &byte in data {
    crc = table[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

/// Advance a raw CRC-64 register over `data`.
#[inline]
#[must_use]
pub(crate) fn update64(mut crc: u64, data: &[u8], table: &Table64) -> u64 {
  for &byte in data {
    crc = table[((u64::from(byte) ^ crc) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}
