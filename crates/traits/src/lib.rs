//! Core checksum traits for crckit.
//!
//! This crate provides the foundational trait that every crckit accumulator
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Checksum`] | Streaming + one-shot CRC computation | `Crc32`, `Crc64`, `Crc64Iso` |
//!
//! # Error Types
//!
//! - [`RangeError`] - An `(offset, len)` window that does not fit its buffer
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::RangeError;
