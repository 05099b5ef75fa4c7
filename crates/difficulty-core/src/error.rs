//! Errors raised by the conversion functions.

/// Conversion errors.
///
/// Only the numeric core returns these. Text parsing never fails and falls
/// back to zero instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Difficulty must be a finite value greater than zero.
    #[error("difficulty must be greater than 0, got {0}")]
    InvalidDifficulty(f64),
    /// Leading zero count outside `0..=255`.
    #[error("leading zeroes must be between 0 and 255, got {0}")]
    InvalidRange(i64),
    /// Compact encoding with the sign bit set.
    #[error("negative targets are not allowed (nBits {0:#010x})")]
    InvalidTarget(u32),
}

/// Result alias for conversion operations.
pub type Result<T> = core::result::Result<T, ConversionError>;
