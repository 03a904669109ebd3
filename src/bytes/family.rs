use crate::bytes::*;

/// The vocabulary a size is rendered in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UnitFamily {
    Binary,
    Decimal,
    SI,
    Unix,
}

impl UnitFamily {
    pub const BINARY_UNITS: [&str; TIERS] = [B, KIB, MIB, GIB, TIB, PIB];
    pub const DECIMAL_UNITS: [&str; TIERS] = [B, KB, MB, GB, TB, PB];
    pub const SI_UNITS: [&str; TIERS] = [B, SI_KB, MB, GB, TB, PB];
    pub const UNIX_UNITS: [&str; TIERS] = [B, UNIX_K, UNIX_M, UNIX_G, UNIX_T, UNIX_P];

    pub const BINARY_VERBOSE: [&str; TIERS] =
        [BYTES, KIBIBYTES, MEBIBYTES, GIBIBYTES, TEBIBYTES, PEBIBYTES];
    pub const DECIMAL_VERBOSE: [&str; TIERS] =
        [BYTES, KILOBYTES, MEGABYTES, GIGABYTES, TERABYTES, PETABYTES];

    /// Short labels, or verbose ones when asked and the family has them.
    /// Unix has no verbose form and always answers with its short labels.
    pub fn labels(&self, verbose: bool) -> &'static [&'static str; TIERS] {
        match (self, verbose) {
            (Self::Binary, false) => &Self::BINARY_UNITS,
            (Self::Binary, true) => &Self::BINARY_VERBOSE,
            (Self::Decimal, false) => &Self::DECIMAL_UNITS,
            (Self::SI, false) => &Self::SI_UNITS,
            (Self::Decimal | Self::SI, true) => &Self::DECIMAL_VERBOSE,
            (Self::Unix, _) => &Self::UNIX_UNITS,
        }
    }
}
