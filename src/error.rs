//! Error taxonomy for block configuration
//!
//! Every failure is detected when a block is constructed; apply paths trust
//! the invariants established here and return nothing.

use thiserror::Error;

/// Errors returned by block constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DspError {
    /// Transform or window length outside the supported set
    #[error("length {0} is not supported (power of two in 32..=4096 for transforms, non-zero for windows)")]
    InvalidLength(usize),

    /// Zero size or otherwise malformed scalar argument
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Caller-supplied buffer length does not match the block configuration
    #[error("buffer length {actual} does not match expected {expected}")]
    SizeMismatch {
        /// Length the block configuration requires
        expected: usize,
        /// Length the caller actually supplied
        actual: usize,
    },
}
