//! Bit-serial, table-free CRC checksums.
//!
//! This crate computes CRCs one bit at a time from a full
//! [RevEng-style](https://reveng.sourceforge.io/crc-catalogue/) parameter set:
//! width, polynomial, initial value, input/output reflection and output XOR.
//! There are no lookup tables and no SIMD paths; the engines are small,
//! branch-free and usable in `const` contexts.
//!
//! # Engines
//!
//! | Type | Register | Use |
//! |------|----------|-----|
//! | [`Crc8`] | `u8` | Any 8-bit parameter set |
//! | [`Crc16`] | `u16` | Any 16-bit parameter set |
//! | [`Crc32`] | `u32` | Any 32-bit parameter set |
//! | [`Crc64`] | `u64` | Any 64-bit parameter set |
//! | [`AnyCrc`] | widened to `u64` | Width chosen at runtime |
//!
//! Catalog entries with fixed parameters ([`Crc16Xmodem`], [`Crc16Kermit`],
//! [`Crc16Ibm3740`], [`Crc16SpiFujitsu`], ...) implement [`Checksum`].
//!
//! # Example
//!
//! ```rust
//! use bitcrc::{Checksum, Crc16, Crc16Xmodem, CrcParams};
//!
//! // Fixed catalog entry
//! assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
//!
//! // Arbitrary parameters, validated at construction
//! let params = CrcParams {
//!   width: 16,
//!   polynomial: 0x1021,
//!   initial: 0x1D0F,
//!   reflect_in: false,
//!   reflect_out: false,
//!   xor_out: 0x0000,
//! };
//! let mut crc = Crc16::new(&params)?;
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0xE5CC);
//!
//! // Out-of-range parameters are rejected, never masked
//! let bad = CrcParams { polynomial: 0x1_1021, ..params };
//! assert!(Crc16::new(&bad).is_err());
//! # Ok::<(), bitcrc::ConfigError>(())
//! ```
//!
//! # Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::IoSlice` support on [`Checksum`] |
//! | `tracing` | No | `tracing` events for rejected configurations and self-tests |
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! bitcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod bitwise;
pub mod catalog;
mod dynamic;
mod error;
mod params;
pub mod reflect;
mod variants;

pub use bitwise::{Crc8, Crc16, Crc32, Crc64};
pub use dynamic::{AnyCrc, WireBytes};
pub use error::{ConfigError, ParseParamsError, SelfTestError};
pub use params::{CrcParams, register_mask};
// Re-export traits for convenience
pub use traits::{Checksum, VerificationError};
pub use variants::{
  Crc8Smbus, Crc16Ibm3740, Crc16Kermit, Crc16SpiFujitsu, Crc16Xmodem, Crc32IsoHdlc, Crc32Iscsi, Crc64Xz,
};
