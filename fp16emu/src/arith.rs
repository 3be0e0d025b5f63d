//! Sign inversion and addition.
use std::ops;

use crate::Fp16;

/// Flip the sign bit.
///
/// # Examples
///
///     use fp16emu::{negate, Fp16};
///
///     assert_eq!(negate(Fp16::from_bits(0x3e00)).to_bits(), 0xbe00);
///     assert_eq!(negate(Fp16::NEG_INFINITY), Fp16::INFINITY);
///
#[inline]
pub fn negate(x: Fp16) -> Fp16 {
    Fp16::from_bits(x.to_bits() ^ Fp16::SIGN_MASK)
}

/// Add two values.
///
/// The mantissa of the operand with the smaller exponent is shifted right by
/// the exponent difference, discarding the shifted-out bits. The mantissas
/// are then added (same signs) or subtracted (different signs), and a carry
/// out of the 10-bit field is absorbed by shifting the sum right and
/// incrementing the exponent. The implicit leading bits take no part in
/// this, and the result always has the sign of `x`.
///
/// Subtraction is performed on unsigned 16-bit integers. When the mantissa of
/// `y` is larger, the difference wraps around instead of changing the sign of
/// the result, and the wrapped value is then treated as a carry.
///
/// If the exponent grows past the Infinity exponent, positive
/// [`Fp16::INFINITY`] is returned regardless of the operand signs.
///
/// # Examples
///
///     use fp16emu::{add, Fp16};
///
///     let x = Fp16::from_bits(0b0_10000_1010000000);
///     let y = Fp16::from_bits(0b0_01111_1000000000);
///     assert_eq!(add(x, y).to_bits(), 0b0_10000_1110000000);
///
pub fn add(x: Fp16, y: Fp16) -> Fp16 {
    let sign = x.sign();

    let (exp_x, exp_y) = (x.exponent(), y.exponent());
    let (mut mant_x, mut mant_y) = (x.mantissa(), y.mantissa());

    // Align the exponents. Ties take the second branch with a zero shift
    let mut exponent = if exp_x > exp_y {
        mant_y = shr_discard(mant_y, exp_x - exp_y);
        exp_x
    } else {
        mant_x = shr_discard(mant_x, exp_y - exp_x);
        exp_y
    };

    let mut sum = if sign == y.sign() {
        mant_x + mant_y
    } else {
        let diff = mant_x.wrapping_sub(mant_y);
        if mant_x < mant_y {
            log::trace!(
                "add({:?}, {:?}): mantissa difference wrapped to {:#06x}",
                x,
                y,
                diff
            );
        }
        diff
    };

    if sum >= 0x400 {
        sum >>= 1;
        exponent += 1;
    }

    if exponent > Fp16::EXP_MAX {
        log::trace!("add({:?}, {:?}): overflow", x, y);
        return Fp16::INFINITY;
    }

    Fp16::from_bits((sign << 15) | (exponent << Fp16::EXP_SHIFT) | (sum & Fp16::MANT_MASK))
}

/// Logical right shift that yields `0` for shift amounts beyond the width.
#[inline]
fn shr_discard(x: u16, amount: u16) -> u16 {
    x.checked_shr(amount as u32).unwrap_or(0)
}

impl ops::Neg for Fp16 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        negate(self)
    }
}

impl ops::Add for Fp16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl ops::AddAssign for Fp16 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = add(*self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn negate_is_involution(bits: u16) -> bool {
        let x = Fp16::from_bits(bits);
        negate(negate(x)) == x
    }

    #[quickcheck]
    fn negate_touches_only_sign(bits: u16) -> bool {
        let x = Fp16::from_bits(bits);
        let y = -x;
        y.magnitude_bits() == x.magnitude_bits() && y.sign() != x.sign()
    }

    #[test]
    fn add_demo_operands() {
        let x = Fp16::from_bits(0b0100001010000000);
        let y = Fp16::from_bits(0b0011111000000000);
        // exp 16 vs 15: 0x200 >> 1 = 0x100, 0x280 + 0x100 = 0x380, no carry
        assert_eq!(add(x, y).to_bits(), 0b0100001110000000);
        assert_eq!(x + y, add(x, y));
    }

    #[test]
    fn add_is_not_commutative_in_sign() {
        let x = Fp16::from_bits(0x3e00);
        let y = Fp16::from_bits(0xbc00);
        // 0x200 - 0x000, sign of x
        assert_eq!(add(x, y).to_bits(), 0x3e00);
        // 0x000 - 0x200 wraps to 0xfe00 -> carry -> 0x7f00 & 0x3ff
        assert_eq!(add(y, x).to_bits(), 0xc300);
    }

    #[test]
    fn add_mantissa_carry() {
        let x = Fp16::from_bits(0b0_01111_1000000000);
        // 0x200 + 0x200 = 0x400 -> 0x200, exponent 16
        assert_eq!(add(x, x).to_bits(), 0b0_10000_1000000000);
    }

    #[test]
    fn add_large_exponent_difference() {
        let x = Fp16::from_bits(0b0_11110_0000000001);
        let y = Fp16::from_bits(0b0_00000_1111111111);
        // The shift amount is 30, beyond the width of `u16`
        assert_eq!(add(x, y), x);
        assert_eq!(add(y, x).to_bits(), 0b0_11110_0000000001);
    }

    #[test]
    fn add_overflow_drops_sign() {
        let x = Fp16::from_bits(0b1_11111_1000000000);
        assert_eq!(add(x, x), Fp16::INFINITY);
        assert_eq!(
            add(Fp16::NEG_INFINITY, Fp16::NEG_INFINITY),
            Fp16::NEG_INFINITY
        );
    }

    #[test]
    fn add_assign() {
        let mut x = Fp16::from_bits(0x4280);
        x += Fp16::from_bits(0x3e00);
        assert_eq!(x.to_bits(), 0x4380);
    }

    #[quickcheck]
    fn add_keeps_sign_of_lhs(x: u16, y: u16) -> bool {
        let z = add(Fp16::from_bits(x), Fp16::from_bits(y));
        z == Fp16::INFINITY || z.sign() == x >> 15
    }

    #[quickcheck]
    fn add_exponent_is_max_or_next(x: u16, y: u16) -> bool {
        let (x, y) = (Fp16::from_bits(x), Fp16::from_bits(y));
        let z = add(x, y);
        let e = x.exponent().max(y.exponent());
        z == Fp16::INFINITY || z.exponent() == e || z.exponent() == e + 1
    }
}
