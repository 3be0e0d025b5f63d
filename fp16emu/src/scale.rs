//! Multiplication and division by two.
use crate::Fp16;

/// Multiply a value by two.
///
/// Infinity and NaN are returned unchanged. For a normalized value the
/// exponent is incremented; reaching the Infinity exponent yields positive
/// [`Fp16::INFINITY`] regardless of the sign of `x`.
///
/// A subnormal value (exponent field `0`) is shifted left as a whole 16-bit
/// pattern. The sign bit is shifted out in the process, so the result is
/// always non-negative.
///
/// # Examples
///
///     use fp16emu::{scale_up, Fp16};
///
///     // 0.75 * 2 = 1.5
///     assert_eq!(scale_up(Fp16::from_bits(0x3a00)).to_bits(), 0x3e00);
///     // -32768 * 2 overflows, and the sign is lost
///     assert_eq!(scale_up(Fp16::from_bits(0xf800)), Fp16::INFINITY);
///
pub fn scale_up(x: Fp16) -> Fp16 {
    if x.is_exponent_saturated() {
        return x;
    }

    let sign = x.to_bits() & Fp16::SIGN_MASK;
    let magnitude = x.magnitude_bits();

    let exponent = x.exponent();
    if exponent != 0 {
        let exponent = exponent + 1;
        if exponent == Fp16::EXP_MAX {
            log::trace!("scale_up({:?}): overflow", x);
            return Fp16::INFINITY;
        }
        Fp16::from_bits(sign | (exponent << Fp16::EXP_SHIFT) | (magnitude & Fp16::MANT_MASK))
    } else {
        Fp16::from_bits(magnitude << 1)
    }
}

/// Divide a value by two.
///
/// Infinity and NaN are returned unchanged. For a normalized value the
/// exponent is decremented. A subnormal value is shifted right as a whole
/// 16-bit pattern, which moves a set sign bit into the exponent field.
///
/// # Examples
///
///     use fp16emu::{scale_down, Fp16};
///
///     // 6.5 / 2 = 3.25
///     assert_eq!(scale_down(Fp16::from_bits(0x4680)).to_bits(), 0x4280);
///     assert_eq!(scale_down(Fp16::from_bits(0x0002)).to_bits(), 0x0001);
///
pub fn scale_down(x: Fp16) -> Fp16 {
    if x.is_exponent_saturated() {
        return x;
    }

    let exponent = x.exponent();
    if exponent != 0 {
        Fp16::from_bits(
            (x.to_bits() & Fp16::SIGN_MASK)
                | ((exponent - 1) << Fp16::EXP_SHIFT)
                | x.mantissa(),
        )
    } else {
        Fp16::from_bits(x.to_bits() >> 1)
    }
}
