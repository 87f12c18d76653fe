//! Zero-configuration catalog types.
//!
//! Each type fixes one [`catalog`](crate::catalog) entry at compile time and
//! implements [`Checksum`](crate::Checksum), so it can be used wherever a
//! `Default`-constructible checksum is expected.
//!
//! # Example
//!
//! ```
//! use bitcrc::{Checksum, Crc16Ibm3740, Crc16Kermit, Crc16SpiFujitsu, Crc16Xmodem};
//!
//! assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
//! assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
//! assert_eq!(Crc16Ibm3740::checksum(b"123456789"), 0x29B1);
//! assert_eq!(Crc16SpiFujitsu::checksum(b"123456789"), 0xE5CC);
//! ```

use crate::catalog;

define_catalog_crc! {
  /// CRC-16/XMODEM checksum.
  pub struct Crc16Xmodem(Crc16: u16) = catalog::CRC16_XMODEM;
}

define_catalog_crc! {
  /// CRC-16/KERMIT checksum.
  pub struct Crc16Kermit(Crc16: u16) = catalog::CRC16_KERMIT;
}

define_catalog_crc! {
  /// CRC-16/IBM-3740 (CCITT-FALSE) checksum.
  pub struct Crc16Ibm3740(Crc16: u16) = catalog::CRC16_IBM_3740;
}

define_catalog_crc! {
  /// CRC-16/SPI-FUJITSU checksum.
  pub struct Crc16SpiFujitsu(Crc16: u16) = catalog::CRC16_SPI_FUJITSU;
}

define_catalog_crc! {
  /// CRC-8/SMBUS checksum.
  pub struct Crc8Smbus(Crc8: u8) = catalog::CRC8_SMBUS;
}

define_catalog_crc! {
  /// CRC-32/ISO-HDLC checksum (Ethernet, gzip, PNG).
  pub struct Crc32IsoHdlc(Crc32: u32) = catalog::CRC32_ISO_HDLC;
}

define_catalog_crc! {
  /// CRC-32/ISCSI (Castagnoli) checksum.
  pub struct Crc32Iscsi(Crc32: u32) = catalog::CRC32_ISCSI;
}

define_catalog_crc! {
  /// CRC-64/XZ checksum.
  pub struct Crc64Xz(Crc64: u64) = catalog::CRC64_XZ;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  fn check<C: Checksum>(expected: C::Output) {
    assert_eq!(C::checksum(catalog::CHECK_INPUT), expected);

    let mut h = C::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), expected);
    assert!(h.verify(expected).is_ok());

    h.reset();
    assert_eq!(h.finalize(), C::default().finalize());

    let resumed = {
      let mut h = C::with_initial(C::checksum(b"1234"));
      h.update(b"56789");
      h.finalize()
    };
    assert_eq!(resumed, expected);
  }

  #[test]
  fn check_values_through_trait() {
    check::<Crc16Xmodem>(0x31C3);
    check::<Crc16Kermit>(0x2189);
    check::<Crc16Ibm3740>(0x29B1);
    check::<Crc16SpiFujitsu>(0xE5CC);
    check::<Crc8Smbus>(0xF4);
    check::<Crc32IsoHdlc>(0xCBF4_3926);
    check::<Crc32Iscsi>(0xE306_9283);
    check::<Crc64Xz>(0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn output_size() {
    assert_eq!(<Crc8Smbus as Checksum>::OUTPUT_SIZE, 1);
    assert_eq!(<Crc16Xmodem as Checksum>::OUTPUT_SIZE, 2);
    assert_eq!(<Crc32Iscsi as Checksum>::OUTPUT_SIZE, 4);
    assert_eq!(<Crc64Xz as Checksum>::OUTPUT_SIZE, 8);
  }

  #[test]
  fn zero_length_input() {
    assert_eq!(Crc16Xmodem::checksum(&[]), 0x0000);
    assert_eq!(Crc16Ibm3740::checksum(&[]), 0xFFFF);
    assert_eq!(Crc16SpiFujitsu::checksum(&[]), 0x1D0F);
  }

  #[test]
  fn algorithm_is_exposed() {
    assert_eq!(Crc16Kermit::ALGORITHM.name, "CRC-16/KERMIT");
    assert_eq!(Crc16Kermit::new().engine().params(), catalog::CRC16_KERMIT.params);
  }

  #[test]
  fn inherent_methods_match_trait() {
    let mut h = Crc16SpiFujitsu::new();
    assert_eq!(h.finalize(), 0x1D0F);
    h.update(catalog::CHECK_INPUT);
    assert_eq!(h.finalize(), <Crc16SpiFujitsu as Checksum>::checksum(catalog::CHECK_INPUT));
    h.reset();
    assert_eq!(h, Crc16SpiFujitsu::default());
  }

  #[test]
  fn finalize_bytes_in_wire_order() {
    let mut h = Crc16Kermit::new();
    h.update(catalog::CHECK_INPUT);
    assert_eq!(h.finalize_bytes(), [0x89, 0x21]);
  }
}
