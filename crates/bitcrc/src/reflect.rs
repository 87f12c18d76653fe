//! Bit reversal ("reflection") for 8, 16, 32 and 64-bit registers.
//!
//! Each width swaps adjacent bit blocks of halving size: halves, quarters,
//! eighths, down to single bits. That is `log2(N)` masked shift/OR steps with
//! no branches and no lookup tables.
//!
//! The widths are deliberately separate functions. Reversing a narrow value
//! and zero-extending it is not the same as reversing the wide value:
//!
//! ```
//! use bitcrc::reflect::{reverse8, reverse16};
//!
//! assert_eq!(reverse8(0x01), 0x80);
//! assert_eq!(reverse16(0x0001), 0x8000);
//! assert_ne!(u16::from(reverse8(0x01)), reverse16(0x0001));
//! ```

/// One swap step: exchange the bits selected by `mask` with the bits
/// selected by `!mask`, `shift` positions apart.
macro_rules! swap_step {
  ($value:expr, $mask:expr, $shift:expr) => {
    (($value & $mask) >> $shift) | (($value & !$mask) << $shift)
  };
}

/// Reverse the bit order of an 8-bit value.
#[inline]
#[must_use]
pub const fn reverse8(value: u8) -> u8 {
  let v = swap_step!(value, 0xF0u8, 4);
  let v = swap_step!(v, 0xCCu8, 2);
  swap_step!(v, 0xAAu8, 1)
}

/// Reverse the bit order of a 16-bit value.
#[inline]
#[must_use]
pub const fn reverse16(value: u16) -> u16 {
  let v = swap_step!(value, 0xFF00u16, 8);
  let v = swap_step!(v, 0xF0F0u16, 4);
  let v = swap_step!(v, 0xCCCCu16, 2);
  swap_step!(v, 0xAAAAu16, 1)
}

/// Reverse the bit order of a 32-bit value.
#[inline]
#[must_use]
pub const fn reverse32(value: u32) -> u32 {
  let v = swap_step!(value, 0xFFFF_0000u32, 16);
  let v = swap_step!(v, 0xFF00_FF00u32, 8);
  let v = swap_step!(v, 0xF0F0_F0F0u32, 4);
  let v = swap_step!(v, 0xCCCC_CCCCu32, 2);
  swap_step!(v, 0xAAAA_AAAAu32, 1)
}

/// Reverse the bit order of a 64-bit value.
#[inline]
#[must_use]
pub const fn reverse64(value: u64) -> u64 {
  let v = swap_step!(value, 0xFFFF_FFFF_0000_0000u64, 32);
  let v = swap_step!(v, 0xFFFF_0000_FFFF_0000u64, 16);
  let v = swap_step!(v, 0xFF00_FF00_FF00_FF00u64, 8);
  let v = swap_step!(v, 0xF0F0_F0F0_F0F0_F0F0u64, 4);
  let v = swap_step!(v, 0xCCCC_CCCC_CCCC_CCCCu64, 2);
  swap_step!(v, 0xAAAA_AAAA_AAAA_AAAAu64, 1)
}

/// Width-preserving bit reversal, for code generic over register types.
pub trait Reflect: Copy {
  /// Returns `self` with its bit order reversed.
  #[must_use]
  fn reflect(self) -> Self;
}

impl Reflect for u8 {
  #[inline]
  fn reflect(self) -> Self {
    reverse8(self)
  }
}

impl Reflect for u16 {
  #[inline]
  fn reflect(self) -> Self {
    reverse16(self)
  }
}

impl Reflect for u32 {
  #[inline]
  fn reflect(self) -> Self {
    reverse32(self)
  }
}

impl Reflect for u64 {
  #[inline]
  fn reflect(self) -> Self {
    reverse64(self)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use proptest::prelude::*;

  use super::*;

  #[test]
  fn fixed_points() {
    assert_eq!(reverse8(0), 0);
    assert_eq!(reverse16(0), 0);
    assert_eq!(reverse32(0), 0);
    assert_eq!(reverse64(0), 0);

    assert_eq!(reverse8(u8::MAX), u8::MAX);
    assert_eq!(reverse16(u16::MAX), u16::MAX);
    assert_eq!(reverse32(u32::MAX), u32::MAX);
    assert_eq!(reverse64(u64::MAX), u64::MAX);
  }

  #[test]
  fn known_values() {
    assert_eq!(reverse8(0b0000_0001), 0b1000_0000);
    assert_eq!(reverse8(0b1100_1010), 0b0101_0011);
    assert_eq!(reverse16(0x1021), 0x8408);
    assert_eq!(reverse16(0x8005), 0xA001);
    assert_eq!(reverse32(0x1234_5678), 0x1E6A_2C48);
    assert_eq!(reverse32(0x04C1_1DB7), 0xEDB8_8320);
    assert_eq!(reverse64(0x42F0_E1EB_A9EA_3693), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn widths_are_not_interchangeable() {
    assert_eq!(reverse8(0x01), 0x80);
    assert_eq!(reverse16(0x0001), 0x8000);
    assert_eq!(reverse32(0x0000_0001), 0x8000_0000);
    assert_eq!(reverse64(1), 1 << 63);
  }

  #[test]
  fn const_evaluable() {
    const POLY: u16 = reverse16(0x1021);
    assert_eq!(POLY, 0x8408);
  }

  #[test]
  fn trait_dispatches_to_width() {
    assert_eq!(0x01u8.reflect(), 0x80);
    assert_eq!(0x0001u16.reflect(), 0x8000);
    assert_eq!(0x0000_0001u32.reflect(), 0x8000_0000);
    assert_eq!(1u64.reflect(), 1 << 63);
  }

  #[test]
  fn exhaustive_u8_matches_core() {
    for x in 0..=u8::MAX {
      assert_eq!(reverse8(x), x.reverse_bits(), "x={x:#04x}");
    }
  }

  #[test]
  fn exhaustive_u16_involution() {
    for x in 0..=u16::MAX {
      assert_eq!(reverse16(reverse16(x)), x);
    }
  }

  proptest! {
    #[test]
    fn reverse16_matches_core(x in any::<u16>()) {
      prop_assert_eq!(reverse16(x), x.reverse_bits());
    }

    #[test]
    fn reverse32_matches_core(x in any::<u32>()) {
      prop_assert_eq!(reverse32(x), x.reverse_bits());
    }

    #[test]
    fn reverse64_matches_core(x in any::<u64>()) {
      prop_assert_eq!(reverse64(x), x.reverse_bits());
    }

    #[test]
    fn reverse32_involution(x in any::<u32>()) {
      prop_assert_eq!(reverse32(reverse32(x)), x);
    }

    #[test]
    fn reverse64_involution(x in any::<u64>()) {
      prop_assert_eq!(reverse64(reverse64(x)), x);
    }
  }
}
