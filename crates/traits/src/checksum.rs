//! Non-cryptographic checksum traits.
//!
//! Traits for checksum algorithms like CRC-16, CRC-32 and CRC-64.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data
//! - **Verification**: Compare a running checksum against an expected value

use core::fmt::Debug;

use crate::VerificationError;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use bitcrc::{Checksum, Crc16Xmodem};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc16Xmodem::checksum(b"123456789");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc16Xmodem::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - the result of `finalize()` must not depend on how input was split across `update()` calls
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u16` for CRC-16, `u32` for CRC-32, etc.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously finalized checksum.
  ///
  /// Useful for resuming a checksum computation: feeding `B` into
  /// `with_initial(checksum(A))` yields `checksum(A || B)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  ///
  /// This is a convenience for integrating with vectored I/O APIs.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compare the current checksum against `expected`.
  #[inline]
  fn verify(&self, expected: Self::Output) -> Result<(), VerificationError> {
    if self.finalize() == expected { Ok(()) } else { Err(VerificationError::new()) }
  }

  /// Compute the checksum of data in one shot.
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

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }

    fn with_initial(initial: Self::Output) -> Self {
      Self(initial)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> Self::Output {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn oneshot_matches_streaming() {
    let mut h = Sum::new();
    h.update(b"ab");
    h.update(b"c");
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum::checksum_vectored(&[b"a", b"", b"bc"]), Sum::checksum(b"abc"));
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_contiguous() {
    let bufs = [std::io::IoSlice::new(b"ab"), std::io::IoSlice::new(b"c")];
    let mut h = Sum::new();
    h.update_io_slices(&bufs);
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }

  #[test]
  fn verify_reports_mismatch() {
    let mut h = Sum::new();
    h.update(b"abc");
    assert!(h.verify(Sum::checksum(b"abc")).is_ok());
    assert_eq!(h.verify(0), Err(VerificationError::new()));
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut h = Sum::new();
    h.update(b"xyz");
    h.reset();
    assert_eq!(h.finalize(), Sum::new().finalize());
  }
}
