//! Table-less CRC implementations using branchless bitwise computation.
//!
//! These functions compute the same raw register as the table-driven
//! accumulators but shift one bit at a time, so they need no lookup table.
//! They serve as the independent reference the tables are checked against,
//! and as a fallback where a 256-entry table is unwanted.
//!
//! # Algorithm
//!
//! For each bit, build a conditional mask with `wrapping_sub`:
//!
//! - `0u32.wrapping_sub(0)` = `0x00000000`
//! - `0u32.wrapping_sub(1)` = `0xFFFFFFFF`
//!
//! then `crc = (crc >> 1) ^ (poly & mask)`.
//!
//! Like the table paths, these take and return the *raw* register; the caller
//! supplies the seed and applies any finishing XOR.

pub mod crc32;
pub mod crc64;
