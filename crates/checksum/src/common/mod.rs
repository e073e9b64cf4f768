//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation for both CRC widths
//! - The byte-at-a-time table update loop shared by every accumulator

pub mod portable;
pub mod tables;
