//! CubeCipher: the encrypt/decrypt facade.
//!
//! Orchestrates the full pipeline: message → state → scrambled state →
//! ciphertext body, with the length and key embedded as base64 metadata so
//! the ciphertext fully describes its own reversal.

use tracing::debug;

use crate::error::CubeCipherError;
use crate::metadata::Metadata;
use crate::moves::MoveToken;
use crate::permutation::PermutationTable;
use crate::state::StateBuffer;

/// Separator between the cipher body and the metadata block.
const META_SEPARATOR: char = '|';

/// Permutation cipher over the 54-cell cube state.
///
/// Each instance borrows the shared process-wide [`PermutationTable`];
/// every encrypt/decrypt call builds and discards its own state buffer, so
/// instances carry no state between calls and are freely shareable.
///
/// # Examples
///
/// ```
/// use cubecipher::{CubeCipher, MoveToken};
///
/// let key: Vec<MoveToken> = ["U", "R'", "F2"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
///
/// let cipher = CubeCipher::new();
/// let ciphertext = cipher.encrypt("HELLO", &key);
///
/// // A fresh instance recovers the message from the ciphertext alone.
/// let recovered = CubeCipher::new().decrypt(&ciphertext).unwrap();
/// assert_eq!(recovered, "HELLO");
/// ```
pub struct CubeCipher {
    table: &'static PermutationTable,
}

impl Default for CubeCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeCipher {
    /// Creates a cipher bound to the shared permutation table.
    pub fn new() -> Self {
        CubeCipher {
            table: PermutationTable::shared(),
        }
    }

    /// Encrypts a message under the given key.
    ///
    /// The message is encoded into the state (truncated to capacity,
    /// padded with the sentinel if shorter), each key token is applied in
    /// order, and the scrambled state is emitted together with the
    /// metadata block: `<54-char body>|<base64(metadata)>`.
    ///
    /// Infallible: typed tokens always resolve in the move table.
    pub fn encrypt(&self, message: &str, key: &[MoveToken]) -> String {
        let message_len = message.chars().count();
        debug!(message_len, moves = key.len(), "encrypting message");

        let mut state = StateBuffer::from_message(message);
        for &token in key {
            state.apply_move(token, self.table);
        }
        let body = state.to_text();
        let meta = Metadata::new(message_len, key.to_vec()).encode();
        format!("{body}{META_SEPARATOR}{meta}")
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// Splits off the metadata block, restores the state from the body,
    /// applies the inverted key tokens in reverse order, and truncates the
    /// decoded text to the recorded message length.
    ///
    /// # Errors
    /// - [`CubeCipherError::InvalidFormat`] — not exactly one `|`
    ///   separator; nothing else is attempted.
    /// - [`CubeCipherError::BodyTooLong`] — body exceeds the state
    ///   capacity (short bodies are padded instead).
    /// - Any metadata decoding error; see [`Metadata` errors in
    ///   `CubeCipherError`](CubeCipherError).
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CubeCipherError> {
        let (body, blob) = split_ciphertext(ciphertext)?;
        let meta = Metadata::decode(blob)?;
        debug!(
            message_len = meta.message_len,
            moves = meta.key.len(),
            "decrypting ciphertext"
        );

        let mut state = StateBuffer::from_cipher_body(body)?;
        for token in meta.key.iter().rev() {
            state.apply_move(token.inverted(), self.table);
        }
        let decoded = state.to_text();
        let keep = meta.message_len.min(decoded.chars().count());
        Ok(decoded.chars().take(keep).collect())
    }
}

/// Splits a ciphertext into `(body, metadata blob)`.
///
/// Exactly one separator is required; zero or several is an invalid
/// format, reported before any permutation logic runs.
fn split_ciphertext(ciphertext: &str) -> Result<(&str, &str), CubeCipherError> {
    let mut parts = ciphertext.split(META_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(body), Some(blob), None) => Ok((body, blob)),
        _ => Err(CubeCipherError::InvalidFormat),
    }
}
