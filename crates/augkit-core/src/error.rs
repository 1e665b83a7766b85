//! Error type for the pure parts of augkit.
//!
//! Anything that touches real I/O goes through `anyhow` instead.

use thiserror::Error;

/// Usage errors raised by conversions and target parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A target-format string that is not `mask`, `image` or `image_4_channels`.
    #[error("Unknown target {0}")]
    UnknownTarget(String),
    /// A conversion was asked to operate on zero arrays.
    #[error("Expected at least one array")]
    EmptyInput,
    /// A channel count of zero was requested.
    #[error("Number of channels must be at least 1")]
    ZeroChannels,
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
