//! Runs every operation once and prints the results.
use fp16emu::{add, compare, encode, negate, scale_down, scale_up, Fp16, Fp16Ordering};
use std::io::{self, Write};

/// How bit patterns are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// 16 binary digits, e.g., `0100001010000000`
    Binary,
    /// `0x` followed by four hexadecimal digits, e.g., `0x4280`
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub add: Fp16,
    pub mul2: Fp16,
    pub div2: Fp16,
    pub neg: Fp16,
    pub cmp: Fp16Ordering,
    pub cast: Fp16,
}

impl Report {
    /// Compute `x + y`, `y * 2`, `x / 2`, `-y`, `x <=> y`, and `encode(cast)`.
    pub fn compute(x: Fp16, y: Fp16, cast: u32) -> Self {
        Self {
            add: add(x, y),
            mul2: scale_up(y),
            div2: scale_down(x),
            neg: negate(y),
            cmp: compare(x, y),
            cast: encode(cast),
        }
    }

    pub fn write_to(&self, out: &mut impl Write, radix: Radix) -> io::Result<()> {
        let fmt_bits = |x: Fp16| match radix {
            Radix::Binary => format!("{:016b}", x),
            Radix::Hex => format!("{:#06x}", x),
        };

        writeln!(out, "add:  {}", fmt_bits(self.add))?;
        writeln!(out, "mul2: {}", fmt_bits(self.mul2))?;
        writeln!(out, "div2: {}", fmt_bits(self.div2))?;
        writeln!(out, "neg:  {}", fmt_bits(self.neg))?;
        writeln!(out, "cmp:  {}", self.cmp)?;
        writeln!(out, "cast: {}", fmt_bits(self.cast))?;
        Ok(())
    }
}
