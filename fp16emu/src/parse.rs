//! Parsing bit patterns from strings.
//!
//! A bit pattern is written as an unsigned integer, either in binary with a
//! `0b` prefix, in hexadecimal with a `0x` prefix, or in decimal. Underscores
//! are accepted as digit separators. The text is never interpreted as a real
//! number; `"6"` is the bit pattern `0b110`, not six.
use quick_error::quick_error;
use std::{num::ParseIntError, str::FromStr};

use crate::Fp16;

quick_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ParseBitsError {
        /// The input contains no digits.
        Empty {
            display("cannot parse a bit pattern from an empty string")
        }
        /// The digits are malformed or don't fit in 32 bits.
        Int(err: ParseIntError) {
            from()
            cause(err)
            display("invalid bit pattern: {}", err)
        }
        /// The value doesn't fit in the target type.
        OutOfRange(value: u32) {
            display("bit pattern {:#x} does not fit in 16 bits", value)
        }
    }
}

/// Parse a 32-bit pattern.
///
/// # Examples
///
///     use fp16emu::parse_bits_u32;
///
///     assert_eq!(parse_bits_u32("6"), Ok(6));
///     assert_eq!(parse_bits_u32("0x40c0_0000"), Ok(0x40c0_0000));
///     assert_eq!(parse_bits_u32("0b110"), Ok(6));
///     assert!(parse_bits_u32("0b").is_err());
///
pub fn parse_bits_u32(s: &str) -> Result<u32, ParseBitsError> {
    let s = s.trim();

    let (digits, radix) = if let Some(rest) = strip_prefix_ci(s, "0b") {
        (rest, 2)
    } else if let Some(rest) = strip_prefix_ci(s, "0x") {
        (rest, 16)
    } else {
        (s, 10)
    };

    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(ParseBitsError::Empty);
    }

    Ok(u32::from_str_radix(&digits, radix)?)
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

impl FromStr for Fp16 {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_bits_u32(s)?;
        if value > u16::max_value() as u32 {
            return Err(ParseBitsError::OutOfRange(value));
        }
        Ok(Fp16::from_bits(value as u16))
    }
}
