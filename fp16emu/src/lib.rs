//! Half-precision (binary16) floating-point emulation using integer bit
//! operations only.
//!
//! Values are carried around as [`Fp16`], a thin wrapper of the packed 16-bit
//! pattern. No native `f16` (or any other floating-point type) is involved in
//! any of the operations, which makes the results reproducible bit-for-bit on
//! every target.
//!
//! The arithmetic is deliberately simplistic. Alignment discards shifted-out
//! bits instead of rounding, overflow produces a sign-less Infinity, and
//! [`compare`] orders finite values by their raw bit patterns.
//!
//! # Examples
//!
//!     use fp16emu::{add, compare, Fp16, Fp16Ordering};
//!
//!     let x = Fp16::from_bits(0b0100001010000000);
//!     let y = Fp16::from_bits(0b0011111000000000);
//!
//!     assert_eq!(add(x, y).to_bits(), 0b0100001110000000);
//!     assert_eq!(compare(x, y), Fp16Ordering::Greater);
//!
use std::fmt;

mod arith;
mod cast;
mod cmp;
mod parse;
mod scale;

pub use self::{
    arith::{add, negate},
    cast::encode,
    cmp::{compare, Fp16Ordering},
    parse::{parse_bits_u32, ParseBitsError},
    scale::{scale_down, scale_up},
};

/// A packed half-precision value.
///
/// The layout is, from MSB to LSB, one sign bit, five exponent bits (biased
/// by 15), and ten mantissa bits. Equality is bit-pattern equality, so two
/// NaN-like values with the same payload compare equal through `==` (use
/// [`compare`] for the floating-point view).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fp16(u16);

impl Fp16 {
    pub const SIGN_MASK: u16 = 0x8000;
    pub const EXP_MASK: u16 = 0x7c00;
    pub const MANT_MASK: u16 = 0x03ff;

    pub const EXP_SHIFT: u32 = 10;
    pub const EXP_BIAS: u16 = 15;
    /// The exponent field value of Infinity and NaN.
    pub const EXP_MAX: u16 = 0x1f;

    pub const ZERO: Self = Self(0);
    pub const INFINITY: Self = Self(Self::EXP_MASK);
    pub const NEG_INFINITY: Self = Self(Self::SIGN_MASK | Self::EXP_MASK);

    /// Construct an `Fp16` from a raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get the raw bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Assemble a value from its fields. Each field is masked to its width.
    #[inline]
    pub const fn from_parts(sign: u16, exponent: u16, mantissa: u16) -> Self {
        Self(
            ((sign & 1) << 15)
                | ((exponent & Self::EXP_MAX) << Self::EXP_SHIFT)
                | (mantissa & Self::MANT_MASK),
        )
    }

    /// The sign bit (`0` or `1`).
    #[inline]
    pub const fn sign(self) -> u16 {
        self.0 >> 15
    }

    /// The biased exponent field (`0..=31`).
    #[inline]
    pub const fn exponent(self) -> u16 {
        (self.0 >> Self::EXP_SHIFT) & Self::EXP_MAX
    }

    /// The stored mantissa field, without the implicit leading one.
    #[inline]
    pub const fn mantissa(self) -> u16 {
        self.0 & Self::MANT_MASK
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & Self::SIGN_MASK != 0
    }

    /// Get the bit pattern with the sign bit cleared.
    #[inline]
    pub const fn magnitude_bits(self) -> u16 {
        self.0 & !Self::SIGN_MASK
    }

    /// Returns `true` if `self` is positive or negative Infinity.
    #[inline]
    pub const fn is_infinite_like(self) -> bool {
        self.magnitude_bits() == Self::EXP_MASK
    }

    /// Returns `true` if the exponent field is all ones and the mantissa is
    /// non-zero.
    #[inline]
    pub const fn is_nan_like(self) -> bool {
        self.magnitude_bits() > Self::EXP_MASK
    }

    /// Returns `true` if the exponent field is all ones (Infinity or NaN).
    #[inline]
    pub const fn is_exponent_saturated(self) -> bool {
        self.0 & Self::EXP_MASK == Self::EXP_MASK
    }

    /// Cast a single-precision bit pattern. See [`encode`].
    #[inline]
    pub fn from_f32_bits(bits: u32) -> Self {
        encode(bits)
    }

    /// Multiply by two. See [`scale_up`].
    #[inline]
    pub fn mul2(self) -> Self {
        scale_up(self)
    }

    /// Divide by two. See [`scale_down`].
    #[inline]
    pub fn div2(self) -> Self {
        scale_down(self)
    }

    /// Compare with another value. See [`compare`].
    #[inline]
    pub fn compare(self, other: Self) -> Fp16Ordering {
        compare(self, other)
    }
}

impl From<u16> for Fp16 {
    #[inline]
    fn from(x: u16) -> Self {
        Self(x)
    }
}

impl From<Fp16> for u16 {
    #[inline]
    fn from(x: Fp16) -> Self {
        x.0
    }
}

impl fmt::Debug for Fp16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Fp16({:#06x}: sign={}, exp={}, mant={:#05x})",
            self.0,
            self.sign(),
            self.exponent(),
            self.mantissa()
        )
    }
}

impl fmt::Binary for Fp16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Fp16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Fp16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
