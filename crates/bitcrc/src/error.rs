//! Error types for CRC configuration.
//!
//! Only construction can fail. Once an engine exists, `update` and `finalize`
//! are total functions over their inputs.

use core::fmt;

/// CRC parameters rejected at construction.
///
/// Parameters that do not fit the register width are rejected rather than
/// masked, so a typo in a polynomial cannot silently produce a different CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// Register width is not one of 8, 16, 32 or 64.
  UnsupportedWidth {
    /// Requested width in bits.
    width: u8,
  },
  /// Parameters were handed to an engine of a different width.
  WidthMismatch {
    /// Width of the engine.
    expected: u8,
    /// Width declared by the parameters.
    found: u8,
  },
  /// Polynomial has bits set at or above `width`.
  PolynomialOutOfRange {
    /// Register width in bits.
    width: u8,
    /// Offending polynomial.
    value: u64,
  },
  /// Initial register value has bits set at or above `width`.
  InitialOutOfRange {
    /// Register width in bits.
    width: u8,
    /// Offending initial value.
    value: u64,
  },
  /// Output XOR mask has bits set at or above `width`.
  XorOutOfRange {
    /// Register width in bits.
    width: u8,
    /// Offending mask.
    value: u64,
  },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::UnsupportedWidth { width } => write!(f, "unsupported CRC width {width} (expected 8, 16, 32 or 64)"),
      Self::WidthMismatch { expected, found } => {
        write!(f, "CRC width mismatch: engine is {expected}-bit, parameters are {found}-bit")
      }
      Self::PolynomialOutOfRange { width, value } => {
        write!(f, "polynomial {value:#x} does not fit in {width} bits")
      }
      Self::InitialOutOfRange { width, value } => write!(f, "initial value {value:#x} does not fit in {width} bits"),
      Self::XorOutOfRange { width, value } => write!(f, "xorout {value:#x} does not fit in {width} bits"),
    }
  }
}

impl core::error::Error for ConfigError {}

/// Failure to parse a textual CRC configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseParamsError {
  /// A required `key=value` field is absent.
  MissingField(&'static str),
  /// A key is not part of the RevEng model.
  UnknownField,
  /// A field appears more than once.
  DuplicateField(&'static str),
  /// A field's value could not be parsed.
  InvalidValue(&'static str),
  /// The text is neither a model line nor a known catalog name.
  UnknownAlgorithm,
  /// The fields parsed but describe an invalid configuration.
  Invalid(ConfigError),
}

impl fmt::Display for ParseParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingField(field) => write!(f, "missing field `{field}`"),
      Self::UnknownField => f.write_str("unknown field"),
      Self::DuplicateField(field) => write!(f, "duplicate field `{field}`"),
      Self::InvalidValue(field) => write!(f, "invalid value for `{field}`"),
      Self::UnknownAlgorithm => f.write_str("unknown CRC algorithm"),
      Self::Invalid(err) => write!(f, "invalid CRC parameters: {err}"),
    }
  }
}

impl core::error::Error for ParseParamsError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Invalid(err) => Some(err),
      _ => None,
    }
  }
}

impl From<ConfigError> for ParseParamsError {
  #[inline]
  fn from(err: ConfigError) -> Self {
    Self::Invalid(err)
  }
}

/// A catalog entry failed its own check or residue test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SelfTestError {
  /// The entry's parameters are invalid.
  Config(ConfigError),
  /// `"123456789"` did not produce the documented check value.
  CheckMismatch {
    /// Documented check value.
    expected: u64,
    /// Computed check value.
    actual: u64,
  },
  /// A codeword with its appended checksum did not leave the documented residue.
  ResidueMismatch {
    /// Documented residue.
    expected: u64,
    /// Computed residue.
    actual: u64,
  },
}

impl fmt::Display for SelfTestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Config(err) => write!(f, "invalid CRC parameters: {err}"),
      Self::CheckMismatch { expected, actual } => {
        write!(f, "check value mismatch: expected {expected:#x}, computed {actual:#x}")
      }
      Self::ResidueMismatch { expected, actual } => {
        write!(f, "residue mismatch: expected {expected:#x}, computed {actual:#x}")
      }
    }
  }
}

impl core::error::Error for SelfTestError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Config(err) => Some(err),
      _ => None,
    }
  }
}

impl From<ConfigError> for SelfTestError {
  #[inline]
  fn from(err: ConfigError) -> Self {
    Self::Config(err)
  }
}
