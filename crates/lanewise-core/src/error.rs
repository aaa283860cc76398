//! Error types for SIMD type resolution
//!
//! The type-level layer rejects invalid uses at build time. These errors belong
//! to the runtime mirror ([`crate::table`]) and to instruction-set checks, where
//! the same rejections have to be reported as values.

use thiserror::Error;

use crate::scalar::ElementKind;

/// Core error type for lanewise operations
#[derive(Error, Debug)]
pub enum Error {
    /// Element kind outside the closed set of SIMD scalar kinds
    #[error("Unsupported scalar: {0} has no SIMD resolution")]
    UnsupportedScalar(ElementKind),

    /// Binary promotion between participants that are not compatible
    #[error("Incompatible promotion: {lhs} with {rhs}")]
    IncompatiblePromotion { lhs: String, rhs: String },

    /// Slice or descriptor does not carry the expected number of lanes
    #[error("Lane mismatch: expected {expected} lanes, got {actual}")]
    LaneMismatch { expected: usize, actual: usize },

    /// Instruction set not available on the running CPU
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an incompatible promotion pair
    pub fn incompatible(lhs: impl std::fmt::Display, rhs: impl std::fmt::Display) -> Self {
        Self::IncompatiblePromotion {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// Create an error for a slice shorter than a register
    pub fn short_slice(expected: usize, actual: usize) -> Self {
        Self::LaneMismatch { expected, actual }
    }
}
