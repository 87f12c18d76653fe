//! Width chosen at runtime.
//!
//! [`AnyCrc`] wraps the four fixed-width engines so that parameters read from
//! text (see [`CrcParams`]'s `FromStr`) can drive a CRC without the caller
//! matching on `width` itself. Checksums are widened to `u64`.

use crate::{ConfigError, Crc8, Crc16, Crc32, Crc64, CrcParams};

/// A CRC engine of any supported width.
///
/// ```
/// use bitcrc::{AnyCrc, CrcParams};
///
/// let params: CrcParams = "CRC-32/ISCSI".parse()?;
/// let mut crc = AnyCrc::new(&params)?;
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0xE306_9283);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyCrc {
  /// 8-bit register.
  Crc8(Crc8),
  /// 16-bit register.
  Crc16(Crc16),
  /// 32-bit register.
  Crc32(Crc32),
  /// 64-bit register.
  Crc64(Crc64),
}

impl AnyCrc {
  /// Create an engine of the width named by `params`.
  ///
  /// # Errors
  ///
  /// Any error from [`CrcParams::validate`].
  pub fn new(params: &CrcParams) -> Result<Self, ConfigError> {
    let engine = match params.width {
      8 => Crc8::new(params).map(Self::Crc8),
      16 => Crc16::new(params).map(Self::Crc16),
      32 => Crc32::new(params).map(Self::Crc32),
      64 => Crc64::new(params).map(Self::Crc64),
      width => Err(ConfigError::UnsupportedWidth { width }),
    };
    #[cfg(feature = "tracing")]
    match &engine {
      Ok(_) => tracing::trace!(params = %params, "constructed CRC engine"),
      Err(err) => tracing::debug!(params = %params, error = %err, "rejected CRC parameters"),
    }
    engine
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    match self {
      Self::Crc8(_) => Crc8::WIDTH,
      Self::Crc16(_) => Crc16::WIDTH,
      Self::Crc32(_) => Crc32::WIDTH,
      Self::Crc64(_) => Crc64::WIDTH,
    }
  }

  /// The parameters this engine was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    match self {
      Self::Crc8(crc) => crc.params(),
      Self::Crc16(crc) => crc.params(),
      Self::Crc32(crc) => crc.params(),
      Self::Crc64(crc) => crc.params(),
    }
  }

  /// Fold `data` into the register.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    match self {
      Self::Crc8(crc) => crc.update(data),
      Self::Crc16(crc) => crc.update(data),
      Self::Crc32(crc) => crc.update(data),
      Self::Crc64(crc) => crc.update(data),
    }
  }

  /// Current checksum, zero-extended to 64 bits.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    match self {
      Self::Crc8(crc) => crc.finalize() as u64,
      Self::Crc16(crc) => crc.finalize() as u64,
      Self::Crc32(crc) => crc.finalize() as u64,
      Self::Crc64(crc) => crc.finalize(),
    }
  }

  /// Register contents in catalog residue form, zero-extended to 64 bits.
  #[inline]
  #[must_use]
  pub const fn residue(&self) -> u64 {
    match self {
      Self::Crc8(crc) => crc.residue() as u64,
      Self::Crc16(crc) => crc.residue() as u64,
      Self::Crc32(crc) => crc.residue() as u64,
      Self::Crc64(crc) => crc.residue(),
    }
  }

  /// Current checksum in transmission order.
  #[inline]
  #[must_use]
  pub fn finalize_bytes(&self) -> WireBytes {
    match self {
      Self::Crc8(crc) => WireBytes::from_slice(&crc.finalize_bytes()),
      Self::Crc16(crc) => WireBytes::from_slice(&crc.finalize_bytes()),
      Self::Crc32(crc) => WireBytes::from_slice(&crc.finalize_bytes()),
      Self::Crc64(crc) => WireBytes::from_slice(&crc.finalize_bytes()),
    }
  }

  /// Position the engine as if it had just produced `crc` (truncated to the width).
  #[inline]
  #[must_use]
  pub const fn resume(self, crc: u64) -> Self {
    match self {
      Self::Crc8(engine) => Self::Crc8(engine.resume(crc as u8)),
      Self::Crc16(engine) => Self::Crc16(engine.resume(crc as u16)),
      Self::Crc32(engine) => Self::Crc32(engine.resume(crc as u32)),
      Self::Crc64(engine) => Self::Crc64(engine.resume(crc)),
    }
  }

  /// Restore the register to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    match self {
      Self::Crc8(crc) => crc.reset(),
      Self::Crc16(crc) => crc.reset(),
      Self::Crc32(crc) => crc.reset(),
      Self::Crc64(crc) => crc.reset(),
    }
  }
}

/// A checksum serialized in transmission order (1 to 8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireBytes {
  buf: [u8; 8],
  len: usize,
}

impl WireBytes {
  fn from_slice(bytes: &[u8]) -> Self {
    let mut buf = [0u8; 8];
    for (dst, src) in buf.iter_mut().zip(bytes) {
      *dst = *src;
    }
    Self { buf, len: bytes.len().min(8) }
  }

  /// The bytes as a slice.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    self.buf.get(..self.len).unwrap_or(&[])
  }
}

impl AsRef<[u8]> for WireBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn dispatches_on_width() {
    for alg in catalog::ALL {
      let crc = AnyCrc::new(&alg.params).unwrap();
      assert_eq!(crc.width(), alg.params.width, "{}", alg.name);
      assert_eq!(crc.params(), alg.params, "{}", alg.name);
    }
  }

  #[test]
  fn check_values() {
    for alg in catalog::ALL {
      let mut crc = AnyCrc::new(&alg.params).unwrap();
      crc.update(catalog::CHECK_INPUT);
      assert_eq!(crc.finalize(), alg.check, "{}", alg.name);
    }
  }

  #[test]
  fn rejects_unsupported_width() {
    let params = CrcParams { width: 24, polynomial: 0x86_4CFB, initial: 0xB7_04CE, ..catalog::CRC16_XMODEM.params };
    assert_eq!(AnyCrc::new(&params), Err(ConfigError::UnsupportedWidth { width: 24 }));
  }

  #[test]
  fn rejects_out_of_range() {
    let params = CrcParams { xor_out: 0x1_0000, ..catalog::CRC16_XMODEM.params };
    assert_eq!(AnyCrc::new(&params), Err(ConfigError::XorOutOfRange { width: 16, value: 0x1_0000 }));
  }

  #[test]
  fn wire_bytes_length_matches_width() {
    for alg in catalog::ALL {
      let crc = AnyCrc::new(&alg.params).unwrap();
      assert_eq!(crc.finalize_bytes().as_slice().len(), alg.params.output_bytes(), "{}", alg.name);
    }
  }

  #[test]
  fn wire_bytes_order() {
    let mut crc = AnyCrc::new(&catalog::CRC32_ISO_HDLC.params).unwrap();
    crc.update(catalog::CHECK_INPUT);
    assert_eq!(crc.finalize_bytes().as_ref(), &[0x26, 0x39, 0xF4, 0xCB]);

    let mut crc = AnyCrc::new(&catalog::CRC32_BZIP2.params).unwrap();
    crc.update(catalog::CHECK_INPUT);
    assert_eq!(crc.finalize_bytes().as_ref(), &[0xFC, 0x89, 0x19, 0x18]);
  }

  #[test]
  fn resume_and_reset() {
    let (a, b) = catalog::CHECK_INPUT.split_at(3);
    let mut head = AnyCrc::new(&catalog::CRC64_XZ.params).unwrap();
    head.update(a);

    let mut resumed = AnyCrc::new(&catalog::CRC64_XZ.params).unwrap().resume(head.finalize());
    resumed.update(b);
    assert_eq!(resumed.finalize(), catalog::CRC64_XZ.check);

    resumed.reset();
    assert_eq!(resumed, AnyCrc::new(&catalog::CRC64_XZ.params).unwrap());
  }
}
