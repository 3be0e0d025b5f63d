//! Conversion from single-precision bit patterns.
use crate::Fp16;

/// The bit of `int_part` the normalization loop searches for.
const INT_MSB: u16 = 0x80;

/// Cast a 32-bit pattern laid out as IEEE-754 single precision to a
/// half-precision value.
///
/// This is not a faithful format conversion. The 8-bit exponent field of the
/// input is used as-is (without removing its bias) as an integer part, which
/// is left-normalized together with the fraction while the exponent counter
/// is decremented from 15. Only the low 16 bits of the fraction field take
/// part in the normalization; the mantissa is taken from bits 13..16 of the
/// shifted 16-bit working value.
///
/// An input whose exponent field is zero runs the counter all the way down
/// and produces the stored exponent 15 rather than a zero or subnormal
/// encoding.
///
/// # Examples
///
///     use fp16emu::encode;
///
///     assert_eq!(encode(6).to_bits(), 0b0_01111_0000000000);
///     assert_eq!(encode(0x4000_0000).to_bits(), 0b0_11110_0000000000);
///     assert_eq!(encode(0x8000_0000).to_bits(), 0b1_01111_0000000000);
///
pub fn encode(value: u32) -> Fp16 {
    let sign = ((value >> 31) & 1) as u16;

    let mut int_part = ((value >> 23) & 0xff) as u16;
    // The working register is 16 bits wide; the upper fraction bits are lost
    // here
    let mut frac_part = (value & 0x7f_ffff) as u16;

    let mut exponent = Fp16::EXP_BIAS;
    while int_part & INT_MSB == 0 && exponent > 0 {
        int_part <<= 1;
        frac_part <<= 1;
        exponent -= 1;
    }

    let exponent = (exponent + Fp16::EXP_BIAS) & Fp16::EXP_MAX;
    let mantissa = (frac_part >> 13) & Fp16::MANT_MASK;

    Fp16::from_bits((sign << 15) | (exponent << Fp16::EXP_SHIFT) | mantissa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn small_integer() {
        assert_eq!(encode(6), Fp16::from_bits(0b0011110000000000));
    }

    #[test]
    fn zero_exponent_field_yields_bias() {
        assert_eq!(encode(0).to_bits(), 0x3c00);
        assert_eq!(encode(0x0000_e000).to_bits(), 0x3c00);
        // Only bit 0 of the fraction survives the 15 shifts
        assert_eq!(encode(0x007f_ffff).to_bits(), 0x3c04);
    }

    #[test]
    fn normalized_without_shift() {
        // `int_part & 0x80` is already set; the loop doesn't run
        assert_eq!(encode(0x40c0_0000).to_bits(), 0x7800);
        assert_eq!(encode(0x4000_e000).to_bits(), 0x7807);
        assert_eq!(encode(0x7f80_0000).to_bits(), 0x7800);
    }

    #[test]
    fn one_shift() {
        // `int_part = 0x40`, shifted once; the fraction bit 13 moves to bit 14
        assert_eq!(encode(0x2000_2000).to_bits(), 0x7402);
    }

    #[test]
    fn sign_is_copied() {
        assert_eq!(encode(0x8000_0000).to_bits(), 0xbc00);
        assert_eq!(encode(0xc0c0_0000).to_bits(), 0xf800);
    }

    #[quickcheck]
    fn exponent_stays_in_range(value: u32) -> bool {
        (15..=30).contains(&encode(value).exponent())
    }

    #[quickcheck]
    fn sign_follows_input(value: u32) -> bool {
        encode(value).sign() as u32 == value >> 31
    }
}
