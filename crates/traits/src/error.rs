//! Error types for checksum operations.
//!
//! Checksum computation itself is total; the only caller-facing failure is a
//! request for a window that does not fit inside the supplied buffer.

use core::fmt;

/// A `(offset, len)` window that does not fit inside its buffer.
///
/// Returned instead of silently truncating or reading out of bounds.
///
/// # Examples
///
/// ```
/// use traits::{RangeError, error::subrange};
///
/// assert_eq!(subrange(b"abcd", 1, 2), Ok(&b"bc"[..]));
/// assert_eq!(subrange(b"abcd", 3, 2), Err(RangeError::new(3, 2, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct RangeError {
  /// Requested start of the window.
  pub offset: usize,
  /// Requested window length.
  pub len: usize,
  /// Length of the buffer the window was taken from.
  pub available: usize,
}

impl RangeError {
  /// Create a new range error.
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, len: usize, available: usize) -> Self {
    Self { offset, len, available }
  }
}

impl fmt::Display for RangeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "range {}+{} out of bounds for buffer of {} bytes",
      self.offset, self.len, self.available
    )
  }
}

impl core::error::Error for RangeError {}

/// Borrow `len` bytes of `data` starting at `offset`.
///
/// # Errors
///
/// Returns [`RangeError`] when `offset + len` exceeds `data.len()` or
/// overflows `usize`.
#[inline]
pub fn subrange(data: &[u8], offset: usize, len: usize) -> Result<&[u8], RangeError> {
  offset
    .checked_add(len)
    .and_then(|end| data.get(offset..end))
    .ok_or(RangeError::new(offset, len, data.len()))
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(
      RangeError::new(4, 8, 10).to_string(),
      "range 4+8 out of bounds for buffer of 10 bytes"
    );
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", RangeError::new(1, 2, 0));
    assert_eq!(dbg, "RangeError { offset: 1, len: 2, available: 0 }");
  }

  #[test]
  fn subrange_full_and_empty_windows() {
    let data = b"hello";
    assert_eq!(subrange(data, 0, 5), Ok(&data[..]));
    assert_eq!(subrange(data, 5, 0), Ok(&[][..]));
    assert_eq!(subrange(&[], 0, 0), Ok(&[][..]));
  }

  #[test]
  fn subrange_past_end() {
    assert_eq!(subrange(b"hello", 6, 0), Err(RangeError::new(6, 0, 5)));
    assert_eq!(subrange(b"hello", 0, 6), Err(RangeError::new(0, 6, 5)));
    assert_eq!(subrange(b"hello", 3, 3), Err(RangeError::new(3, 3, 5)));
  }

  #[test]
  fn subrange_overflowing_end() {
    assert_eq!(
      subrange(b"hello", 1, usize::MAX),
      Err(RangeError::new(1, usize::MAX, 5))
    );
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<RangeError>();
    assert_sync::<RangeError>();
    assert_error::<RangeError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(RangeError::new(0, 1, 0).source().is_none());
  }
}
