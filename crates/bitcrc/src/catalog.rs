//! Named CRC parameter sets from the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! Each [`Algorithm`] carries its documented check value (the CRC of ASCII
//! `"123456789"`) and residue, so an entry can test itself with
//! [`Algorithm::self_test`].
//!
//! | Name | Width | Poly | Init | RefIn/Out | XorOut | Check |
//! |------|-------|------|------|-----------|--------|-------|
//! | CRC-16/XMODEM | 16 | 0x1021 | 0x0000 | no | 0x0000 | 0x31C3 |
//! | CRC-16/KERMIT | 16 | 0x1021 | 0x0000 | yes | 0x0000 | 0x2189 |
//! | CRC-16/IBM-3740 | 16 | 0x1021 | 0xFFFF | no | 0x0000 | 0x29B1 |
//! | CRC-16/SPI-FUJITSU | 16 | 0x1021 | 0x1D0F | no | 0x0000 | 0xE5CC |
//! | CRC-16/ARC | 16 | 0x8005 | 0x0000 | yes | 0x0000 | 0xBB3D |
//! | CRC-16/MODBUS | 16 | 0x8005 | 0xFFFF | yes | 0x0000 | 0x4B37 |
//! | CRC-16/IBM-SDLC | 16 | 0x1021 | 0xFFFF | yes | 0xFFFF | 0x906E |
//! | CRC-16/GENIBUS | 16 | 0x1021 | 0xFFFF | no | 0xFFFF | 0xD64E |
//! | CRC-8/SMBUS | 8 | 0x07 | 0x00 | no | 0x00 | 0xF4 |
//! | CRC-8/MAXIM-DOW | 8 | 0x31 | 0x00 | yes | 0x00 | 0xA1 |
//! | CRC-32/ISO-HDLC | 32 | 0x04C11DB7 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xCBF43926 |
//! | CRC-32/BZIP2 | 32 | 0x04C11DB7 | 0xFFFFFFFF | no | 0xFFFFFFFF | 0xFC891918 |
//! | CRC-32/ISCSI | 32 | 0x1EDC6F41 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xE3069283 |
//! | CRC-64/XZ | 64 | 0x42F0E1EBA9EA3693 | all ones | yes | all ones | 0x995DC9BBDF1939FA |
//! | CRC-64/ECMA-182 | 64 | 0x42F0E1EBA9EA3693 | 0 | no | 0 | 0x6C40DF5F0B497347 |

use crate::{AnyCrc, CrcParams, error::SelfTestError};

/// Standard input for catalog check values.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named CRC parameter set with its self-test constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Algorithm {
  /// Catalog name, e.g. `"CRC-16/XMODEM"`.
  pub name: &'static str,
  /// Other names the same parameters are known by.
  pub aliases: &'static [&'static str],
  /// Engine parameters.
  pub params: CrcParams,
  /// CRC of [`CHECK_INPUT`].
  pub check: u64,
  /// Register contents after a codeword with its own CRC appended, before `xor_out`.
  pub residue: u64,
}

impl Algorithm {
  /// Whether `name` is this entry's name or one of its aliases (ASCII case-insensitive).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }

  /// Recompute the check value and residue and compare them with the documented ones.
  ///
  /// # Errors
  ///
  /// - [`SelfTestError::Config`] if the parameters are invalid.
  /// - [`SelfTestError::CheckMismatch`] if `"123456789"` gives a different CRC.
  /// - [`SelfTestError::ResidueMismatch`] if the codeword residue differs.
  pub fn self_test(&self) -> Result<(), SelfTestError> {
    let result = self.run_self_test();
    #[cfg(feature = "tracing")]
    match &result {
      Ok(()) => tracing::trace!(algorithm = self.name, "self-test passed"),
      Err(err) => tracing::debug!(algorithm = self.name, error = %err, "self-test failed"),
    }
    result
  }

  fn run_self_test(&self) -> Result<(), SelfTestError> {
    let mut crc = AnyCrc::new(&self.params)?;
    crc.update(CHECK_INPUT);
    let actual = crc.finalize();
    if actual != self.check {
      return Err(SelfTestError::CheckMismatch { expected: self.check, actual });
    }

    let trailer = crc.finalize_bytes();
    crc.update(trailer.as_ref());
    let actual = crc.residue();
    if actual != self.residue {
      return Err(SelfTestError::ResidueMismatch { expected: self.residue, actual });
    }
    Ok(())
  }
}

/// Find a catalog entry by name or alias.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Algorithm> {
  let name = name.trim();
  ALL.iter().copied().find(|alg| alg.matches(name))
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/XMODEM: the MSB-first form of ITU-T V.41.
pub const CRC16_XMODEM: Algorithm = Algorithm {
  name: "CRC-16/XMODEM",
  aliases: &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  },
  check: 0x31C3,
  residue: 0x0000,
};

/// CRC-16/KERMIT: the LSB-first form of ITU-T V.41 (Bluetooth).
pub const CRC16_KERMIT: Algorithm = Algorithm {
  name: "CRC-16/KERMIT",
  aliases: &["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT", "KERMIT"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  },
  check: 0x2189,
  residue: 0x0000,
};

/// CRC-16/IBM-3740, commonly misnamed CRC-CCITT.
pub const CRC16_IBM_3740: Algorithm = Algorithm {
  name: "CRC-16/IBM-3740",
  aliases: &["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  },
  check: 0x29B1,
  residue: 0x0000,
};

/// CRC-16/SPI-FUJITSU. The init value equals an augment of 0xFFFF prepended to the message.
pub const CRC16_SPI_FUJITSU: Algorithm = Algorithm {
  name: "CRC-16/SPI-FUJITSU",
  aliases: &["CRC-16/AUG-CCITT"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0x1D0F,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  },
  check: 0xE5CC,
  residue: 0x0000,
};

/// CRC-16/ARC - legacy ARC/LHA archives.
pub const CRC16_ARC: Algorithm = Algorithm {
  name: "CRC-16/ARC",
  aliases: &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM"],
  params: CrcParams {
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  },
  check: 0xBB3D,
  residue: 0x0000,
};

/// CRC-16/MODBUS
pub const CRC16_MODBUS: Algorithm = Algorithm {
  name: "CRC-16/MODBUS",
  aliases: &["MODBUS"],
  params: CrcParams {
    width: 16,
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  },
  check: 0x4B37,
  residue: 0x0000,
};

/// CRC-16/IBM-SDLC - HDLC, X.25.
pub const CRC16_IBM_SDLC: Algorithm = Algorithm {
  name: "CRC-16/IBM-SDLC",
  aliases: &["CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-16/X-25", "CRC-B", "X-25"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF,
  },
  check: 0x906E,
  residue: 0xF0B8,
};

/// CRC-16/GENIBUS - EPC Gen2 RFID.
pub const CRC16_GENIBUS: Algorithm = Algorithm {
  name: "CRC-16/GENIBUS",
  aliases: &["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/I-CODE"],
  params: CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF,
  },
  check: 0xD64E,
  residue: 0x1D0F,
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8/SMBUS
pub const CRC8_SMBUS: Algorithm = Algorithm {
  name: "CRC-8/SMBUS",
  aliases: &["CRC-8"],
  params: CrcParams {
    width: 8,
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  },
  check: 0xF4,
  residue: 0x00,
};

/// CRC-8/MAXIM-DOW - 1-Wire, iButton.
pub const CRC8_MAXIM_DOW: Algorithm = Algorithm {
  name: "CRC-8/MAXIM-DOW",
  aliases: &["CRC-8/MAXIM", "DOW-CRC"],
  params: CrcParams {
    width: 8,
    polynomial: 0x31,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  },
  check: 0xA1,
  residue: 0x00,
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG.
pub const CRC32_ISO_HDLC: Algorithm = Algorithm {
  name: "CRC-32/ISO-HDLC",
  aliases: &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
  params: CrcParams {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  },
  check: 0xCBF4_3926,
  residue: 0xDEBB_20E3,
};

/// CRC-32/BZIP2 - the MSB-first counterpart of ISO-HDLC.
pub const CRC32_BZIP2: Algorithm = Algorithm {
  name: "CRC-32/BZIP2",
  aliases: &["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"],
  params: CrcParams {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  },
  check: 0xFC89_1918,
  residue: 0xC704_DD7B,
};

/// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, ext4, Btrfs.
pub const CRC32_ISCSI: Algorithm = Algorithm {
  name: "CRC-32/ISCSI",
  aliases: &["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32C"],
  params: CrcParams {
    width: 32,
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  },
  check: 0xE306_9283,
  residue: 0xB798_B438,
};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/XZ - XZ Utils, 7-Zip.
pub const CRC64_XZ: Algorithm = Algorithm {
  name: "CRC-64/XZ",
  aliases: &["CRC-64/GO-ECMA"],
  params: CrcParams {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  },
  check: 0x995D_C9BB_DF19_39FA,
  residue: 0x4995_8C9A_BD7D_353F,
};

/// CRC-64/ECMA-182
pub const CRC64_ECMA_182: Algorithm = Algorithm {
  name: "CRC-64/ECMA-182",
  aliases: &["CRC-64"],
  params: CrcParams {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0x0000_0000_0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000_0000_0000,
  },
  check: 0x6C40_DF5F_0B49_7347,
  residue: 0x0000_0000_0000_0000,
};

/// Every catalog entry, grouped by width.
pub const ALL: &[&Algorithm] = &[
  &CRC8_SMBUS,
  &CRC8_MAXIM_DOW,
  &CRC16_XMODEM,
  &CRC16_KERMIT,
  &CRC16_IBM_3740,
  &CRC16_SPI_FUJITSU,
  &CRC16_ARC,
  &CRC16_MODBUS,
  &CRC16_IBM_SDLC,
  &CRC16_GENIBUS,
  &CRC32_ISO_HDLC,
  &CRC32_BZIP2,
  &CRC32_ISCSI,
  &CRC64_XZ,
  &CRC64_ECMA_182,
];

// Every entry must at least be well-formed; a bad table entry fails the build.
#[allow(clippy::indexing_slicing)] // bounded by `ALL.len()`
const _: () = {
  let mut i = 0;
  while i < ALL.len() {
    if ALL[i].params.validate().is_err() {
      panic!("catalog entry has invalid parameters");
    }
    i += 1;
  }
};
