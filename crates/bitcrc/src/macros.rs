//! Internal macros for CRC type generation.
//!
//! Every register width gets its own concrete engine type, and every catalog
//! entry gets its own zero-configuration wrapper. The bodies are identical
//! apart from the register type, so they are stamped out here.

/// Generate a bit-serial CRC engine for one register width.
///
/// This macro creates:
/// - The struct definition holding the parameters and the running register
/// - `new()`, `update()`, `finalize()`, `residue()`, `finalize_bytes()`,
///   `resume()`, `reset()`, `verify()` and `checksum()`
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16`)
/// - `$reg`: The register type (e.g., `u16`)
/// - `$width`: The register width in bits, as a literal
/// - `$reverse`: The bit reversal function for `$reg`
macro_rules! define_bitwise_crc {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      register: $reg:ty,
      width: $width:literal,
      reverse: $reverse:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    $vis struct $name {
      polynomial: $reg,
      initial: $reg,
      reflect_in: bool,
      reflect_out: bool,
      xor_out: $reg,
      /// Running remainder.
      state: $reg,
    }

    #[allow(clippy::unnecessary_cast)]
    impl $name {
      /// Register width in bits.
      pub const WIDTH: u8 = $width;

      /// Checksum size in bytes.
      pub const OUTPUT_SIZE: usize = $width / 8;

      /// Distance from a byte's MSB to the register's MSB.
      const INPUT_SHIFT: u32 = $width - 8;

      /// Create an engine from validated parameters.
      ///
      /// # Errors
      ///
      /// - [`ConfigError::WidthMismatch`](crate::ConfigError::WidthMismatch) if
      ///   `params.width` is not this engine's width.
      /// - Any error from [`CrcParams::validate`](crate::CrcParams::validate).
      pub const fn new(params: &$crate::CrcParams) -> Result<Self, $crate::ConfigError> {
        if params.width != Self::WIDTH {
          return Err($crate::ConfigError::WidthMismatch { expected: Self::WIDTH, found: params.width });
        }
        if let Err(err) = params.validate() {
          return Err(err);
        }
        Ok(Self {
          polynomial: params.polynomial as $reg,
          initial: params.initial as $reg,
          reflect_in: params.reflect_in,
          reflect_out: params.reflect_out,
          xor_out: params.xor_out as $reg,
          state: params.initial as $reg,
        })
      }

      /// Compute the CRC of `data` in one shot.
      ///
      /// # Errors
      ///
      /// Same as [`new`](Self::new).
      #[inline]
      pub fn checksum(params: &$crate::CrcParams, data: &[u8]) -> Result<$reg, $crate::ConfigError> {
        let mut crc = Self::new(params)?;
        crc.update(data);
        Ok(crc.finalize())
      }

      /// The parameters this engine was built from.
      #[inline]
      #[must_use]
      pub const fn params(&self) -> $crate::CrcParams {
        $crate::CrcParams {
          width: Self::WIDTH,
          polynomial: self.polynomial as u64,
          initial: self.initial as u64,
          reflect_in: self.reflect_in,
          reflect_out: self.reflect_out,
          xor_out: self.xor_out as u64,
        }
      }

      /// Fold one byte into the register.
      #[inline]
      pub const fn update_byte(&mut self, byte: u8) {
        let byte = if self.reflect_in { $crate::reflect::reverse8(byte) } else { byte };
        // XOR into the top byte: the width-bit zero augment is implied by the
        // shifts below, so the byte is fully divided once it has passed the MSB.
        self.state ^= (byte as $reg) << Self::INPUT_SHIFT;

        let mut bit = 0;
        while bit < 8 {
          // All ones if the MSB is set, zero otherwise. The MSB itself is
          // shifted out: it cancels the polynomial's implicit x^width term.
          let mask = (0 as $reg).wrapping_sub(self.state >> ($width - 1));
          self.state = (self.state << 1) ^ (self.polynomial & mask);
          bit += 1;
        }
      }

      /// Fold `data` into the register, in order.
      ///
      /// An empty slice is a no-op. The result does not depend on how a
      /// message is split across calls.
      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
          self.update_byte(byte);
        }
      }

      /// Current checksum: the register, reflected if `reflect_out`, XORed with `xor_out`.
      ///
      /// Does not modify the engine; further updates may follow.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> $reg {
        let out = if self.reflect_out { $reverse(self.state) } else { self.state };
        out ^ self.xor_out
      }

      /// Register contents in catalog "residue" form (`finalize()` without `xor_out`).
      ///
      /// After processing a message followed by its own
      /// [`finalize_bytes`](Self::finalize_bytes), this equals the catalog residue.
      #[inline]
      #[must_use]
      pub const fn residue(&self) -> $reg {
        self.finalize() ^ self.xor_out
      }

      /// Current checksum in transmission order.
      ///
      /// Reflected algorithms send the low byte first, the others the high byte first.
      #[inline]
      #[must_use]
      pub const fn finalize_bytes(&self) -> [u8; $width / 8] {
        if self.reflect_out { self.finalize().to_le_bytes() } else { self.finalize().to_be_bytes() }
      }

      /// Position the engine as if it had just produced `crc`.
      ///
      /// Feeding `B` into `engine.resume(crc(A))` yields `crc(A || B)`.
      #[inline]
      #[must_use]
      pub const fn resume(mut self, crc: $reg) -> Self {
        let raw = crc ^ self.xor_out;
        self.state = if self.reflect_out { $reverse(raw) } else { raw };
        self
      }

      /// Restore the register to the initial value.
      #[inline]
      pub fn reset(&mut self) {
        self.state = self.initial;
      }

      /// Compare the current checksum against `expected`.
      ///
      /// # Errors
      ///
      /// Returns [`VerificationError`](crate::VerificationError) on mismatch.
      #[inline]
      pub fn verify(&self, expected: $reg) -> Result<(), $crate::VerificationError> {
        if self.finalize() == expected { Ok(()) } else { Err($crate::VerificationError::new()) }
      }
    }
  };
}

/// Generate a zero-configuration wrapper for a catalog entry.
///
/// The engine is built in a `const` item, so a bad catalog entry fails the
/// build instead of surfacing at runtime. The wrapper implements
/// [`Checksum`](crate::Checksum).
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Xmodem`)
/// - `$engine`: The engine type (e.g., `Crc16`)
/// - `$reg`: The register type (e.g., `u16`)
/// - `$alg`: The catalog [`Algorithm`](crate::catalog::Algorithm) constant
macro_rules! define_catalog_crc {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($engine:ident: $reg:ty) = $alg:expr;
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      inner: $crate::$engine,
    }

    impl $name {
      const ENGINE: $crate::$engine = match $crate::$engine::new(&$alg.params) {
        Ok(engine) => engine,
        Err(_) => panic!(concat!("invalid catalog parameters for ", stringify!($name))),
      };

      /// Catalog entry backing this type.
      pub const ALGORITHM: &'static $crate::catalog::Algorithm = &$alg;

      /// Create a hasher at the catalog initial value.
      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self { inner: Self::ENGINE }
      }

      /// Create a hasher that will resume from a previous CRC.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $reg) -> Self {
        Self { inner: Self::ENGINE.resume(crc) }
      }

      /// Compute the CRC of `data` in one shot.
      #[inline]
      #[must_use]
      pub fn checksum(data: &[u8]) -> $reg {
        let mut engine = Self::ENGINE;
        engine.update(data);
        engine.finalize()
      }

      /// Fold `data` into the checksum.
      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
      }

      /// Current checksum; further updates may follow.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> $reg {
        self.inner.finalize()
      }

      /// Current checksum in transmission order.
      #[inline]
      #[must_use]
      pub const fn finalize_bytes(&self) -> [u8; $crate::$engine::OUTPUT_SIZE] {
        self.inner.finalize_bytes()
      }

      /// Restore the catalog initial value.
      #[inline]
      pub fn reset(&mut self) {
        self.inner.reset();
      }

      /// The underlying engine.
      #[inline]
      #[must_use]
      pub const fn engine(&self) -> &$crate::$engine {
        &self.inner
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = $crate::$engine::OUTPUT_SIZE;
      type Output = $reg;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: Self::Output) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      #[inline]
      fn checksum(data: &[u8]) -> Self::Output {
        $name::checksum(data)
      }
    }
  };
}
