use std::ffi::OsString;

use clap::Parser;

use crate::{bytes::options::DisplayOptions, cli::Args};

pub struct Config {
    pub size: i64,
    pub options: DisplayOptions,
}

impl Config {
    /// Parses an argv-style iterator. Usage errors (including a negative
    /// size) come back as `clap::Error` so the caller can print and exit.
    pub fn parse<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(itr).map(Config::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::family::UnitFamily;

    #[test]
    fn defaults_match_formatter_defaults() {
        let config = Config::parse(["byte-formatter", "1024"]).unwrap();
        assert_eq!(config.size, 1024);
        assert_eq!(config.options, DisplayOptions::default());
    }

    #[test]
    fn flags_forwarded() {
        let config = Config::parse([
            "byte-formatter",
            "2048",
            "-b",
            "-v",
            "-u",
            "lower",
            "-p",
            "3",
            "-s",
            "/s",
            "-t",
        ])
        .unwrap();
        let opts = config.options;
        assert_eq!(opts.family(), UnitFamily::Binary);
        assert!(opts.verbose);
        assert!(!opts.uppercase);
        assert_eq!(opts.precision, 3);
        assert_eq!(opts.suffix, "/s");
        assert!(opts.strip_trailing_zeros);
    }

    #[test]
    fn unix_and_si_flags() {
        let config = Config::parse(["byte-formatter", "5", "-x", "-S"]).unwrap();
        assert!(config.options.unix_style);
        assert!(config.options.use_si);
        assert_eq!(config.options.family(), UnitFamily::Unix);
    }

    #[test]
    fn negative_size_is_usage_error() {
        let err = Config::parse(["byte-formatter", "-1"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn negative_precision_reaches_formatter() {
        let config = Config::parse(["byte-formatter", "10", "-p", "-1"]).unwrap();
        assert_eq!(config.options.precision, -1);
    }

    #[test]
    fn size_is_required() {
        let err = Config::parse(["byte-formatter"]).err().unwrap();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
