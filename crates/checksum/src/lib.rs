//! Table-driven reflected CRC-32 and CRC-64 checksums.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial (reflected) | Seed | Output | Use Cases |
//! |------|------------------------|------|--------|-----------|
//! | [`Crc32`] | 0xEDB88320 | `!0` | `u32`, complemented | ZIP, gzip, PNG |
//! | [`Crc64Iso`] | 0xD800000000000000 | `0` | `u64`, raw | ISO 3309 |
//! | [`Crc64`] | any | any | `u64`, raw | custom 64-bit CRCs |
//!
//! [`Crc32`] also accepts any reflected 32-bit polynomial.
//!
//! # Tables
//!
//! Each accumulator holds a shared reference to a 256-entry lookup table.
//! Tables for the canonical polynomials are built once per [`TableRegistry`]
//! and reused; tables for other polynomials are built per accumulator.
//! Default constructors and the one-shot functions use
//! [`TableRegistry::global`].
//!
//! # Example
//!
//! ```rust
//! use crckit::{Crc32, crc32};
//!
//! // One-shot computation
//! let crc = crc32::compute(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update_range(b"..56789..", 2, 5)?;
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Big-endian output bytes
//! assert_eq!(hasher.finalize_bytes(), [0xCB, 0xF4, 0x39, 0x26]);
//! # Ok::<(), crckit::RangeError>(())
//! ```
//!
//! # Logging
//!
//! Table builds are reported through the [`log`] facade at `debug` level.
//! Update paths never log.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod common;

pub mod bitwise;
pub mod config;
pub mod crc32;
pub mod crc64;
pub mod params;
pub mod registry;

pub use common::tables::{
  CRC32_ZIP_POLY, CRC64_ISO_POLY, TABLE_SIZE, Table32, Table64, crc32_table_entry, crc64_table_entry,
  generate_crc32_table, generate_crc64_table,
};
pub use config::{CrcConfig, TableCache};
pub use crc32::Crc32;
pub use crc64::{Crc64, Crc64Iso};
pub use params::CrcParams;
pub use registry::{RegistryStats, TableRegistry};
// Re-export traits for convenience
pub use traits::{Checksum, RangeError};
