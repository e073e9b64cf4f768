//! Const-fn CRC lookup table generation for the reflected (right-shift) family.
//!
//! Entry `i` of a table is the register obtained by shifting byte `i` through
//! eight steps of the reflected polynomial starting from a zero register:
//!
//! ```text
//! entry = i
//! repeat 8:
//!   entry = if entry & 1 { (entry >> 1) ^ poly } else { entry >> 1 }
//! ```
//!
//! The same shape serves both widths. Tables are a pure function of the
//! polynomial, so two builds for the same polynomial are interchangeable.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Number of entries in a byte-wise lookup table.
pub const TABLE_SIZE: usize = 256;

/// A 256-entry CRC-32 lookup table.
pub type Table32 = [u32; TABLE_SIZE];

/// A 256-entry CRC-64 lookup table.
pub type Table64 = [u64; TABLE_SIZE];

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Constants (Reflected Form)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 polynomial (0x04C11DB7) in reflected form.
/// Used by ZIP, gzip, PNG, Ethernet.
pub const CRC32_ZIP_POLY: u32 = 0xEDB8_8320;

/// CRC-64-ISO polynomial (x^64 + x^4 + x^3 + x + 1, ISO 3309) in reflected form.
pub const CRC64_ISO_POLY: u64 = 0xD800_0000_0000_0000;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry CRC-32 lookup table for `poly`.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc32_table(poly: u32) -> Table32 {
  let mut table = [0u32; TABLE_SIZE];
  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = crc32_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry.
#[must_use]
pub const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry CRC-64 lookup table for `poly`.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc64_table(poly: u64) -> Table64 {
  let mut table = [0u64; TABLE_SIZE];
  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
