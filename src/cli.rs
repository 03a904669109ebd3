use clap::{Parser, ValueEnum};

use crate::{bytes::options::DisplayOptions, config::Config};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert a file size to a human-readable format.",
    long_about = None
)]
pub struct Args {
    /// The file size in bytes.
    #[arg(
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub size: i64,

    /// Use binary (base-1024) units (KiB, MiB, etc.).
    #[arg(name = "binary", long = "binary", short = 'b', help_heading = "Unit options")]
    pub binary: bool,
    /// Use SI units (kB, MB, etc.), base-1000 with case-significant symbols.
    #[arg(name = "si-units", long = "si-units", short = 'S', help_heading = "Unit options")]
    pub si_units: bool,
    /// Use uppercase (KB, MB) or lowercase (kb, mb) unit symbols.
    #[arg(
        name = "unit-case",
        long = "unit-case",
        short = 'u',
        value_enum,
        default_value_t = UnitCase::Upper,
        help_heading = "Unit options"
    )]
    pub unit_case: UnitCase,
    /// Use verbose unit names (Bytes, Kilobytes, etc.).
    #[arg(name = "verbose", long = "verbose", short = 'v', help_heading = "Unit options")]
    pub verbose: bool,
    /// Use single-letter Unix-style unit names (B, K, M, G, T, P).
    #[arg(name = "unix-style", long = "unix-style", short = 'x', help_heading = "Unit options")]
    pub unix_style: bool,

    /// The number of decimal places to include in the formatted size.
    #[arg(
        name = "precision",
        long = "precision",
        short = 'p',
        allow_negative_numbers = true,
        default_value_t = 1
    )]
    pub precision: i64,
    /// A suffix to append to the formatted size string.
    #[arg(name = "suffix", long = "suffix", short = 's', default_value = "")]
    pub suffix: String,
    /// Strip trailing zeros from the formatted size.
    #[arg(name = "strip-trailing-zeros", long = "strip-trailing-zeros", short = 't')]
    pub strip_trailing_zeros: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum UnitCase {
    #[default]
    Upper,
    Lower,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let options = DisplayOptions::default()
            .binary(args.binary)
            .si(args.si_units)
            .uppercase(args.unit_case == UnitCase::Upper)
            .verbose(args.verbose)
            .unix_style(args.unix_style)
            .precision(args.precision)
            .suffix(args.suffix)
            .strip_trailing_zeros(args.strip_trailing_zeros);

        Config {
            size: args.size,
            options,
        }
    }
}
