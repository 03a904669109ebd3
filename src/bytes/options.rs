use std::borrow::Cow;

use crate::bytes::{family::UnitFamily, TIERS};

/// Everything that controls how a size is rendered. Built once, read-only
/// afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayOptions {
    pub use_binary: bool,
    pub use_si: bool,
    pub verbose: bool,
    pub uppercase: bool,
    pub unix_style: bool,
    pub precision: i64,
    pub suffix: String,
    pub strip_trailing_zeros: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_binary: false,
            use_si: false,
            verbose: false,
            uppercase: true,
            unix_style: false,
            precision: 1,
            suffix: String::new(),
            strip_trailing_zeros: false,
        }
    }
}

impl DisplayOptions {
    pub fn binary(mut self, use_binary: bool) -> Self {
        self.use_binary = use_binary;
        self
    }

    pub fn si(mut self, use_si: bool) -> Self {
        self.use_si = use_si;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn unix_style(mut self, unix_style: bool) -> Self {
        self.unix_style = unix_style;
        self
    }

    pub fn precision(mut self, precision: i64) -> Self {
        self.precision = precision;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn strip_trailing_zeros(mut self, strip: bool) -> Self {
        self.strip_trailing_zeros = strip;
        self
    }

    /// Resolves the family by precedence: unix, binary, SI, then decimal.
    pub fn family(&self) -> UnitFamily {
        if self.unix_style {
            UnitFamily::Unix
        } else if self.use_binary {
            UnitFamily::Binary
        } else if self.use_si {
            UnitFamily::SI
        } else {
            UnitFamily::Decimal
        }
    }

    /// Scaling factor between tiers. Only the binary flag matters here, so
    /// Unix-style labels still scale by 1024 when binary is also set.
    pub fn factor(&self) -> f64 {
        if self.use_binary {
            1024.0
        } else {
            1000.0
        }
    }

    /// Lower-casing applies only when uppercase is off and neither the SI
    /// flag nor unix style is set, whichever family won.
    pub fn lowercase_labels(&self) -> bool {
        !self.uppercase && !self.use_si && !self.unix_style
    }

    pub fn resolve_labels(&self) -> [Cow<'static, str>; TIERS] {
        let labels = self.family().labels(self.verbose);
        let lowercase = self.lowercase_labels();

        labels.map(|label| {
            if lowercase {
                Cow::Owned(label.to_lowercase())
            } else {
                Cow::Borrowed(label)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.precision, 1);
        assert!(opts.uppercase);
        assert!(opts.suffix.is_empty());
        assert_eq!(opts.family(), UnitFamily::Decimal);
        assert_eq!(opts.factor(), 1000.0);
    }

    #[test]
    fn family_precedence() {
        let all = DisplayOptions::default()
            .unix_style(true)
            .binary(true)
            .si(true);
        assert_eq!(all.family(), UnitFamily::Unix);
        assert_eq!(all.clone().unix_style(false).family(), UnitFamily::Binary);
        assert_eq!(
            all.unix_style(false).binary(false).family(),
            UnitFamily::SI
        );
    }

    #[test]
    fn binary_factor_applies_to_unix_style() {
        let opts = DisplayOptions::default().unix_style(true).binary(true);
        assert_eq!(opts.factor(), 1024.0);
    }

    #[test]
    fn lowercase_decimal_and_binary() {
        let opts = DisplayOptions::default().uppercase(false);
        assert_eq!(opts.resolve_labels()[1], "kb");

        let opts = opts.binary(true).verbose(true);
        assert_eq!(opts.resolve_labels()[1], "kibibytes");
    }

    #[test]
    fn case_fixed_for_si_and_unix() {
        let si = DisplayOptions::default().si(true).uppercase(false);
        assert_eq!(si.resolve_labels()[1], "kB");

        let unix = DisplayOptions::default().unix_style(true).uppercase(false);
        assert_eq!(unix.resolve_labels()[1], "K");
    }

    #[test]
    fn si_flag_keeps_case_even_when_binary_wins() {
        let opts = DisplayOptions::default()
            .binary(true)
            .si(true)
            .uppercase(false);
        assert_eq!(opts.family(), UnitFamily::Binary);
        assert_eq!(opts.resolve_labels()[1], "KiB");
    }
}
