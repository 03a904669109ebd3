use thiserror::Error;

/// Rejected inputs. Both variants belong to the invalid-argument category
/// and are raised before any unit resolution happens.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FormatError {
    #[error("invalid argument: negative size not allowed ({0})")]
    NegativeSize(i64),

    #[error("invalid argument: precision cannot be negative ({0})")]
    NegativePrecision(i64),
}

impl FormatError {
    /// Every variant is an invalid-argument failure; this names that category.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NegativeSize(_) | Self::NegativePrecision(_))
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
