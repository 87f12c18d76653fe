//! Table-less CRC engines using branchless bit-serial computation.
//!
//! One concrete engine per register width: [`Crc8`], [`Crc16`], [`Crc32`] and
//! [`Crc64`]. Each is built from a [`CrcParams`](crate::CrcParams) and keeps
//! those parameters fixed for its whole lifetime.
//!
//! # Algorithm
//!
//! The engines run MSB-first polynomial division, one bit at a time:
//!
//! ```text
//! for each byte b:
//!   b = refin ? reverse8(b) : b
//!   crc ^= b << (width - 8)
//!   repeat 8:
//!     mask = 0 - (crc >> (width - 1))   // all ones or zero
//!     crc  = (crc << 1) ^ (poly & mask)
//!
//! finalize = (refout ? reverse(crc) : crc) ^ xorout
//! ```
//!
//! XORing each new byte into the top of the register is the "augmented
//! message" formulation: it behaves as if `width` zero bits had been appended
//! to the message, so no separate flush step is needed and the register holds
//! the true remainder at every byte boundary.
//!
//! Reflected algorithms are handled by reversing the input bytes and the
//! final register instead of running a mirrored (LSB-first) loop, so all
//! catalog variants share one code path.
//!
//! # When to Use
//!
//! - Memory is extremely constrained (no lookup tables)
//! - Code size matters more than throughput
//! - A reference result is needed to check another implementation against
//!
//! # Example
//!
//! ```
//! use bitcrc::{Crc16, catalog};
//!
//! let mut crc = Crc16::new(&catalog::CRC16_KERMIT.params)?;
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0x2189);
//! # Ok::<(), bitcrc::ConfigError>(())
//! ```

use crate::reflect::{reverse8, reverse16, reverse32, reverse64};

define_bitwise_crc! {
  /// 8-bit bit-serial CRC engine.
  pub struct Crc8 {
    register: u8,
    width: 8,
    reverse: reverse8,
  }
}

define_bitwise_crc! {
  /// 16-bit bit-serial CRC engine.
  ///
  /// ```
  /// use bitcrc::{Crc16, CrcParams};
  ///
  /// let params = CrcParams {
  ///   width: 16,
  ///   polynomial: 0x1021,
  ///   initial: 0xFFFF,
  ///   reflect_in: false,
  ///   reflect_out: false,
  ///   xor_out: 0x0000,
  /// };
  /// assert_eq!(Crc16::checksum(&params, b"123456789")?, 0x29B1);
  /// # Ok::<(), bitcrc::ConfigError>(())
  /// ```
  pub struct Crc16 {
    register: u16,
    width: 16,
    reverse: reverse16,
  }
}

define_bitwise_crc! {
  /// 32-bit bit-serial CRC engine.
  pub struct Crc32 {
    register: u32,
    width: 32,
    reverse: reverse32,
  }
}

define_bitwise_crc! {
  /// 64-bit bit-serial CRC engine.
  pub struct Crc64 {
    register: u64,
    width: 64,
    reverse: reverse64,
  }
}
