pub mod family;
pub mod format;
pub mod options;

/// Number of tiers every family defines (bytes through peta).
pub const TIERS: usize = 6;
pub const LAST_TIER: usize = TIERS - 1;

const B: &str = "B";

const KB: &str = "KB";
const SI_KB: &str = "kB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";

const BYTES: &str = "Bytes";

const KILOBYTES: &str = "Kilobytes";
const MEGABYTES: &str = "Megabytes";
const GIGABYTES: &str = "Gigabytes";
const TERABYTES: &str = "Terabytes";
const PETABYTES: &str = "Petabytes";

const KIBIBYTES: &str = "Kibibytes";
const MEBIBYTES: &str = "Mebibytes";
const GIBIBYTES: &str = "Gibibytes";
const TEBIBYTES: &str = "Tebibytes";
const PEBIBYTES: &str = "Pebibytes";

const UNIX_K: &str = "K";
const UNIX_M: &str = "M";
const UNIX_G: &str = "G";
const UNIX_T: &str = "T";
const UNIX_P: &str = "P";
