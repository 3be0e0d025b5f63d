//! Ordering of packed values.
use std::{cmp::Ordering, fmt};

use crate::Fp16;

/// The result of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fp16Ordering {
    Less,
    Equal,
    Greater,
    /// At least one of the operands is NaN.
    Unordered,
}

impl Fp16Ordering {
    /// Convert to `std::cmp::Ordering`. Returns `None` for `Unordered`.
    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Fp16Ordering::Less => Some(Ordering::Less),
            Fp16Ordering::Equal => Some(Ordering::Equal),
            Fp16Ordering::Greater => Some(Ordering::Greater),
            Fp16Ordering::Unordered => None,
        }
    }

    pub fn is_unordered(self) -> bool {
        self == Fp16Ordering::Unordered
    }

    /// Swap `Less` and `Greater`.
    pub fn reverse(self) -> Self {
        match self {
            Fp16Ordering::Less => Fp16Ordering::Greater,
            Fp16Ordering::Greater => Fp16Ordering::Less,
            x => x,
        }
    }
}

impl From<Ordering> for Fp16Ordering {
    fn from(x: Ordering) -> Self {
        match x {
            Ordering::Less => Fp16Ordering::Less,
            Ordering::Equal => Fp16Ordering::Equal,
            Ordering::Greater => Fp16Ordering::Greater,
        }
    }
}

impl fmt::Display for Fp16Ordering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Fp16Ordering::Less => "less",
            Fp16Ordering::Equal => "equal",
            Fp16Ordering::Greater => "greater",
            Fp16Ordering::Unordered => "unordered",
        })
    }
}

/// Compare two values.
///
///  - If either operand is NaN, the result is `Unordered`.
///  - Otherwise, an Infinity is greater than any non-Infinity operand and
///    equal to another Infinity. The sign of an Infinity is not taken into
///    account, i.e., negative Infinity is greater than `1.0`.
///  - Otherwise, the raw bit patterns are compared as unsigned integers. This
///    doesn't match the numeric order for negative values.
///
/// # Examples
///
///     use fp16emu::{compare, Fp16, Fp16Ordering};
///
///     let one = Fp16::from_bits(0x3c00);
///     let two = Fp16::from_bits(0x4000);
///     assert_eq!(compare(one, two), Fp16Ordering::Less);
///     assert_eq!(compare(Fp16::NEG_INFINITY, one), Fp16Ordering::Greater);
///     assert_eq!(compare(Fp16::from_bits(0x7e00), one), Fp16Ordering::Unordered);
///
pub fn compare(x: Fp16, y: Fp16) -> Fp16Ordering {
    if x.is_nan_like() || y.is_nan_like() {
        return Fp16Ordering::Unordered;
    }

    match (x.is_infinite_like(), y.is_infinite_like()) {
        (true, false) => Fp16Ordering::Greater,
        (true, true) => Fp16Ordering::Equal,
        (false, true) => Fp16Ordering::Less,
        (false, false) => x.to_bits().cmp(&y.to_bits()).into(),
    }
}
