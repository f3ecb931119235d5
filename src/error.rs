//! Error types for the cubecipher library.

use thiserror::Error;

use crate::state::STATE_SIZE;

/// Errors produced by the cubecipher library.
///
/// Every failure is terminal for the single encrypt/decrypt call that
/// produced it; there is no retry or recovery policy.
#[derive(Debug, Error)]
pub enum CubeCipherError {
    /// Ciphertext does not contain exactly one `|` separator.
    #[error("ciphertext must contain exactly one '|' separator")]
    InvalidFormat,

    /// The metadata block is not valid base64.
    #[error("metadata block is not valid base64")]
    MetadataNotBase64,

    /// The decoded metadata block is not valid UTF-8.
    #[error("metadata block is not valid UTF-8")]
    MetadataNotUtf8,

    /// The decoded metadata has no `:` between length and move list.
    #[error("metadata is missing the ':' length separator")]
    MetadataMissingSeparator,

    /// The metadata length segment is not a valid non-negative integer.
    #[error("invalid message length in metadata: {0:?}")]
    InvalidMessageLength(String),

    /// A move token does not match the `BaseName ['] [2]` grammar.
    #[error("unknown move token: {0:?}")]
    UnknownMove(String),

    /// The cipher body holds more characters than the state has cells.
    #[error("cipher body is {0} characters, exceeding the {STATE_SIZE}-character state")]
    BodyTooLong(usize),

    /// Reading or writing a ciphertext file failed.
    #[error("ciphertext file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
