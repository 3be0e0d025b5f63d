use fp16emu::{parse_bits_u32, Fp16};
use log::debug;
use std::io;
use structopt::StructOpt;

mod report;

use self::report::{Radix, Report};

/// Runs the emulated half-precision operations on a pair of operands and
/// prints the resulting bit patterns.
///
/// Operands are bit patterns written in binary (`0b…`), hexadecimal (`0x…`),
/// or decimal.
#[derive(Debug, StructOpt)]
#[structopt(name = "fp16demo")]
struct Opt {
    /// The first operand. Defaults to 3.25.
    #[structopt(short = "x", default_value = "0b0100001010000000")]
    lhs: Fp16,

    /// The second operand. Defaults to 1.5.
    #[structopt(short = "y", default_value = "0b0011111000000000")]
    rhs: Fp16,

    /// A single-precision bit pattern to cast to half precision.
    #[structopt(
        short = "c",
        long = "cast",
        default_value = "6",
        parse(try_from_str = parse_bits_u32)
    )]
    cast: u32,

    /// Print bit patterns in hexadecimal instead of binary.
    #[structopt(long = "hex")]
    hex: bool,
}

impl Opt {
    fn radix(&self) -> Radix {
        if self.hex {
            Radix::Hex
        } else {
            Radix::Binary
        }
    }
}

fn main() {
    // Enable logging only in debug builds
    #[cfg(debug_assertions)]
    {
        env_logger::init();
    }

    let opt = Opt::from_args();
    debug!("{:?}", opt);

    let report = Report::compute(opt.lhs, opt.rhs, opt.cast);
    debug!("{:?}", report);

    let stdout = io::stdout();
    if let Err(e) = report.write_to(&mut stdout.lock(), opt.radix()) {
        eprintln!("error: Could not write the output: {}", e);
        std::process::exit(1);
    }
}
