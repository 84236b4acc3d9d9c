//! Error type shared by the library.

use thiserror::Error;

/// Errors reported by key validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("invalid AES key length: expected 16, 24 or 32 bytes, got {found}")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        found: usize,
    },
}

/// Result alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
