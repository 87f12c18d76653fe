//! Error types shared by checksum implementations.
//!
//! Individual crates define their own configuration errors; this module only
//! holds the verification outcome every [`Checksum`](crate::Checksum) can report.

use core::fmt;

/// Checksum verification failed.
///
/// Returned by [`Checksum::verify`](crate::Checksum::verify) when the computed
/// checksum does not match the expected value. It carries no payload: callers
/// that need the computed value already hold the hasher.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u16, expected: u16) -> Result<(), VerificationError> {
///   if computed == expected { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(verify(0x31C3, 0x31C3).is_ok());
/// assert!(verify(0x31C3, 0x2189).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  ///
  /// This is the only way to construct this error from outside the crate.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum mismatch")
  }
}

impl core::error::Error for VerificationError {}
