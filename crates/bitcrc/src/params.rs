//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//! Parameters can be written as Rust literals, looked up by catalog name, or
//! parsed from a RevEng model line:
//!
//! ```
//! use bitcrc::CrcParams;
//!
//! let xmodem: CrcParams = "CRC-16/XMODEM".parse()?;
//! let model: CrcParams = "width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000".parse()?;
//! assert_eq!(xmodem, model);
//! # Ok::<(), bitcrc::ParseParamsError>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{
  catalog,
  error::{ConfigError, ParseParamsError},
  reflect,
};

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm.
/// The parameters follow the conventions from the CRC Catalogue.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (8, 16, 32, or 64)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// `polynomial`, `initial` and `xor_out` must fit in `width` bits; see
/// [`validate`](Self::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (8, 16, 32, or 64).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

impl CrcParams {
  /// Check that the width is supported and every value fits in it.
  ///
  /// # Errors
  ///
  /// Returns the first [`ConfigError`] found, checking width, polynomial,
  /// initial value and output mask in that order.
  pub const fn validate(&self) -> Result<(), ConfigError> {
    let width = self.width;
    let Some(mask) = register_mask(width) else {
      return Err(ConfigError::UnsupportedWidth { width });
    };
    if self.polynomial & !mask != 0 {
      return Err(ConfigError::PolynomialOutOfRange { width, value: self.polynomial });
    }
    if self.initial & !mask != 0 {
      return Err(ConfigError::InitialOutOfRange { width, value: self.initial });
    }
    if self.xor_out & !mask != 0 {
      return Err(ConfigError::XorOutOfRange { width, value: self.xor_out });
    }
    Ok(())
  }

  /// Output size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_bytes(&self) -> usize {
    (self.width / 8) as usize
  }

  /// Returns the reflected polynomial (bit-reversed within `width` bits).
  ///
  /// This is the form reflected CRCs are usually published in, e.g.
  /// `0xEDB88320` for CRC-32/ISO-HDLC.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    match self.width {
      8 => reflect::reverse8(self.polynomial as u8) as u64,
      16 => reflect::reverse16(self.polynomial as u16) as u64,
      32 => reflect::reverse32(self.polynomial as u32) as u64,
      64 => reflect::reverse64(self.polynomial),
      width @ 1..64 => self.polynomial.reverse_bits() >> (64 - width as u32),
      _ => 0,
    }
  }
}

/// All-ones mask for a supported register width.
#[inline]
#[must_use]
pub const fn register_mask(width: u8) -> Option<u64> {
  match width {
    8 => Some(0xFF),
    16 => Some(0xFFFF),
    32 => Some(0xFFFF_FFFF),
    64 => Some(u64::MAX),
    _ => None,
  }
}

impl fmt::Display for CrcParams {
  /// Formats as a RevEng model line, which [`FromStr`] accepts back.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width).div_ceil(4).saturating_add(2);
    write!(
      f,
      "width={} poly={:#0digits$x} init={:#0digits$x} refin={} refout={} xorout={:#0digits$x}",
      self.width, self.polynomial, self.initial, self.reflect_in, self.reflect_out, self.xor_out,
    )
  }
}

impl FromStr for CrcParams {
  type Err = ParseParamsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parsed = parse(s);
    #[cfg(feature = "tracing")]
    if let Err(err) = &parsed {
      tracing::debug!(input = s, error = %err, "rejected CRC configuration");
    }
    parsed
  }
}

#[derive(Default)]
struct Fields {
  width: Option<u8>,
  polynomial: Option<u64>,
  initial: Option<u64>,
  reflect_in: Option<bool>,
  reflect_out: Option<bool>,
  xor_out: Option<u64>,
}

fn parse(s: &str) -> Result<CrcParams, ParseParamsError> {
  let s = s.trim();
  if !s.contains('=') {
    return catalog::lookup(s).map(|alg| alg.params).ok_or(ParseParamsError::UnknownAlgorithm);
  }

  let mut fields = Fields::default();
  for token in s.split_whitespace() {
    let (key, value) = token.split_once('=').ok_or(ParseParamsError::UnknownField)?;
    match key {
      "width" => set(&mut fields.width, "width", parse_width(value)?)?,
      "poly" => set(&mut fields.polynomial, "poly", parse_u64(value, "poly")?)?,
      "init" => set(&mut fields.initial, "init", parse_u64(value, "init")?)?,
      "refin" => set(&mut fields.reflect_in, "refin", parse_bool(value, "refin")?)?,
      "refout" => set(&mut fields.reflect_out, "refout", parse_bool(value, "refout")?)?,
      "xorout" => set(&mut fields.xor_out, "xorout", parse_u64(value, "xorout")?)?,
      // Informational in RevEng output; the engine derives them.
      "check" | "residue" | "name" => {}
      _ => return Err(ParseParamsError::UnknownField),
    }
  }

  let params = CrcParams {
    width: fields.width.ok_or(ParseParamsError::MissingField("width"))?,
    polynomial: fields.polynomial.ok_or(ParseParamsError::MissingField("poly"))?,
    initial: fields.initial.ok_or(ParseParamsError::MissingField("init"))?,
    reflect_in: fields.reflect_in.ok_or(ParseParamsError::MissingField("refin"))?,
    reflect_out: fields.reflect_out.ok_or(ParseParamsError::MissingField("refout"))?,
    xor_out: fields.xor_out.ok_or(ParseParamsError::MissingField("xorout"))?,
  };
  params.validate()?;
  Ok(params)
}

fn set<T>(slot: &mut Option<T>, name: &'static str, value: T) -> Result<(), ParseParamsError> {
  if slot.replace(value).is_some() {
    return Err(ParseParamsError::DuplicateField(name));
  }
  Ok(())
}

fn parse_width(value: &str) -> Result<u8, ParseParamsError> {
  value.parse::<u8>().map_err(|_| ParseParamsError::InvalidValue("width"))
}

fn parse_u64(value: &str, name: &'static str) -> Result<u64, ParseParamsError> {
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(hex, 16),
    None => value.parse::<u64>(),
  };
  parsed.map_err(|_| ParseParamsError::InvalidValue(name))
}

fn parse_bool(value: &str, name: &'static str) -> Result<bool, ParseParamsError> {
  if value.eq_ignore_ascii_case("true") {
    return Ok(true);
  }
  if value.eq_ignore_ascii_case("false") {
    return Ok(false);
  }
  Err(ParseParamsError::InvalidValue(name))
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  const XMODEM: CrcParams = CrcParams {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  #[test]
  fn validate_accepts_in_range() {
    assert_eq!(XMODEM.validate(), Ok(()));
    let full = CrcParams { width: 64, polynomial: u64::MAX, initial: u64::MAX, xor_out: u64::MAX, ..XMODEM };
    assert_eq!(full.validate(), Ok(()));
  }

  #[test]
  fn validate_rejects_unsupported_width() {
    for width in [0u8, 1, 7, 12, 24, 63, 65, 128] {
      let params = CrcParams { width, ..XMODEM };
      assert_eq!(params.validate(), Err(ConfigError::UnsupportedWidth { width }));
    }
  }

  #[test]
  fn validate_rejects_out_of_range_values() {
    let poly = CrcParams { polynomial: 0x1_1021, ..XMODEM };
    assert_eq!(poly.validate(), Err(ConfigError::PolynomialOutOfRange { width: 16, value: 0x1_1021 }));

    let init = CrcParams { initial: 0x1_0000, ..XMODEM };
    assert_eq!(init.validate(), Err(ConfigError::InitialOutOfRange { width: 16, value: 0x1_0000 }));

    let xor = CrcParams { width: 8, polynomial: 0x07, xor_out: 0x100, ..XMODEM };
    assert_eq!(xor.validate(), Err(ConfigError::XorOutOfRange { width: 8, value: 0x100 }));
  }

  #[test]
  fn validate_is_const() {
    const OK: bool = XMODEM.validate().is_ok();
    assert!(OK);
  }

  #[test]
  fn output_bytes_tracks_width() {
    assert_eq!(XMODEM.output_bytes(), 2);
    assert_eq!(CrcParams { width: 64, ..XMODEM }.output_bytes(), 8);
  }

  #[test]
  fn polynomial_reflected() {
    let crc32 = CrcParams { width: 32, polynomial: 0x04C1_1DB7, ..XMODEM };
    assert_eq!(crc32.polynomial_reflected(), 0xEDB8_8320);

    let crc32c = CrcParams { width: 32, polynomial: 0x1EDC_6F41, ..XMODEM };
    assert_eq!(crc32c.polynomial_reflected(), 0x82F6_3B78);

    assert_eq!(XMODEM.polynomial_reflected(), 0x8408);
    assert_eq!(CrcParams { width: 8, polynomial: 0x07, ..XMODEM }.polynomial_reflected(), 0xE0);
    assert_eq!(catalog::CRC64_XZ.params.polynomial_reflected(), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn polynomial_reflected_stays_within_width() {
    for alg in catalog::ALL {
      let reflected = alg.params.polynomial_reflected();
      let mask = register_mask(alg.params.width).unwrap();
      assert_eq!(reflected & !mask, 0, "{}", alg.name);
      let back = CrcParams { polynomial: reflected, ..alg.params };
      assert_eq!(back.polynomial_reflected(), alg.params.polynomial, "{}", alg.name);
    }
  }

  #[test]
  fn parse_model_line() {
    let line = "width=16 poly=0x1021 init=0x1d0f refin=false refout=false xorout=0x0000 check=0xe5cc residue=0x0000 \
                name=\"CRC-16/SPI-FUJITSU\"";
    let params: CrcParams = line.parse().unwrap();
    assert_eq!(params, CrcParams { initial: 0x1D0F, ..XMODEM });
  }

  #[test]
  fn parse_accepts_decimal_and_any_order() {
    let params: CrcParams = "refout=TRUE xorout=0 refin=true init=0 poly=4129 width=16".parse().unwrap();
    assert_eq!(params, CrcParams { reflect_in: true, reflect_out: true, ..XMODEM });
  }

  #[test]
  fn parse_catalog_name_and_alias() {
    assert_eq!("CRC-16/XMODEM".parse::<CrcParams>(), Ok(XMODEM));
    assert_eq!("zmodem".parse::<CrcParams>(), Ok(XMODEM));
    assert_eq!("  crc-16/acorn ".parse::<CrcParams>(), Ok(XMODEM));
    assert_eq!("CRC-16/NOPE".parse::<CrcParams>(), Err(ParseParamsError::UnknownAlgorithm));
    assert_eq!("".parse::<CrcParams>(), Err(ParseParamsError::UnknownAlgorithm));
  }

  #[test]
  fn parse_errors() {
    assert_eq!(
      "width=16 poly=0x1021 init=0 refin=false refout=false".parse::<CrcParams>(),
      Err(ParseParamsError::MissingField("xorout"))
    );
    assert_eq!(
      "width=16 width=16 poly=0x1021 init=0 refin=false refout=false xorout=0".parse::<CrcParams>(),
      Err(ParseParamsError::DuplicateField("width"))
    );
    assert_eq!(
      "width=16 poly=0xZZ init=0 refin=false refout=false xorout=0".parse::<CrcParams>(),
      Err(ParseParamsError::InvalidValue("poly"))
    );
    assert_eq!(
      "width=16 poly=0x1021 init=0 refin=yes refout=false xorout=0".parse::<CrcParams>(),
      Err(ParseParamsError::InvalidValue("refin"))
    );
    assert_eq!(
      "width=16 poly=0x1021 init=0 refin=false refout=false xorout=0 bogus=1".parse::<CrcParams>(),
      Err(ParseParamsError::UnknownField)
    );
    assert_eq!(
      "width=16 poly=0x1021 init=0 refin=false refout=false xorout=0 stray".parse::<CrcParams>(),
      Err(ParseParamsError::UnknownField)
    );
  }

  #[test]
  fn parse_rejects_out_of_range() {
    assert_eq!(
      "width=16 poly=0x11021 init=0 refin=false refout=false xorout=0".parse::<CrcParams>(),
      Err(ParseParamsError::Invalid(ConfigError::PolynomialOutOfRange { width: 16, value: 0x1_1021 }))
    );
    assert_eq!(
      "width=24 poly=0x864cfb init=0xb704ce refin=false refout=false xorout=0".parse::<CrcParams>(),
      Err(ParseParamsError::Invalid(ConfigError::UnsupportedWidth { width: 24 }))
    );
  }

  #[test]
  fn display_is_model_line() {
    assert_eq!(
      XMODEM.to_string(),
      "width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000"
    );
  }

  #[test]
  fn display_roundtrips_through_parse() {
    for alg in catalog::ALL {
      let text = alg.params.to_string();
      assert_eq!(text.parse::<CrcParams>(), Ok(alg.params), "{}", alg.name);
    }
  }
}
