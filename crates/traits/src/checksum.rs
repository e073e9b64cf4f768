//! Non-cryptographic checksum trait.
//!
//! - **Streaming**: Incremental updates whose result does not depend on how the
//!   input was split
//! - **One-shot**: Stateless computation over a complete buffer
//! - **Serialization**: Big-endian output bytes, independent of host byte order

use core::fmt::Debug;

use crate::error::{self, RangeError};

/// Non-cryptographic checksum accumulator.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{Checksum, Crc32};
///
/// // One-shot
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not feed back into the running value
/// - `reset()` must restore the running value to the seed the accumulator was built with
/// - Any split of the input across `update*` calls must yield the same `finalize()`
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC32: 4
  /// - CRC64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u32` for CRC32, `u64` for CRC64).
  type Output: Copy + Eq + Debug + Default;

  /// Big-endian serialized form of [`Output`](Self::Output).
  type Bytes: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create an accumulator for the canonical polynomial and default seed.
  #[must_use]
  fn new() -> Self;

  /// Feed a single byte.
  #[inline]
  fn update_byte(&mut self, byte: u8) {
    self.update(&[byte]);
  }

  /// Feed a buffer.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Feed `len` bytes of `data` starting at `offset`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] when the window does not fit inside `data`. The
  /// running value is left untouched in that case.
  #[inline]
  fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    let window = error::subrange(data, offset, len)?;
    self.update(window);
    Ok(())
  }

  /// Feed multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// The raw running value, with no finishing transform applied.
  #[must_use]
  fn value(&self) -> Self::Output;

  /// The finalized checksum of everything fed so far.
  ///
  /// This does not consume or modify the accumulator, so further updates
  /// remain possible.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the running value to the seed.
  fn reset(&mut self);

  /// Serialize a checksum value as big-endian bytes.
  #[must_use]
  fn encode(value: Self::Output) -> Self::Bytes;

  /// The finalized checksum as big-endian bytes.
  #[inline]
  #[must_use]
  fn finalize_bytes(&self) -> Self::Bytes {
    Self::encode(self.finalize())
  }

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
