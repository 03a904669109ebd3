pub mod bytes;
pub mod cli;
pub mod config;
pub mod error;

pub use bytes::{family::UnitFamily, format::format_size, options::DisplayOptions};
pub use error::FormatError;
