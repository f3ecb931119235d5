//! Metadata codec: the self-describing payload embedded in a ciphertext.
//!
//! A ciphertext carries everything needed to reverse it: the original
//! message length and the key that scrambled the state, serialized as
//! `"<length>:<comma-joined tokens>"` and wrapped in standard base64 for
//! text-safe transport.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CubeCipherError;
use crate::moves::MoveToken;
use crate::state::STATE_SIZE;

/// The recorded message length and the key, as embedded in a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    /// Original message length in characters, clamped to [`STATE_SIZE`].
    pub(crate) message_len: usize,
    /// The move sequence applied during encryption, in application order.
    pub(crate) key: Vec<MoveToken>,
}

impl Metadata {
    /// Builds metadata for a message of `message_len` characters.
    ///
    /// Lengths beyond [`STATE_SIZE`] clamp to it; the state cannot hold
    /// more.
    pub(crate) fn new(message_len: usize, key: Vec<MoveToken>) -> Self {
        Metadata {
            message_len: message_len.min(STATE_SIZE),
            key,
        }
    }

    /// Serializes to the base64 transport form.
    ///
    /// An empty key serializes as `"<length>:"` — the move list is simply
    /// empty, not absent.
    pub(crate) fn encode(&self) -> String {
        let tokens: Vec<String> = self.key.iter().map(ToString::to_string).collect();
        let plain = format!("{}:{}", self.message_len, tokens.join(","));
        STANDARD.encode(plain.as_bytes())
    }

    /// Reverses [`encode`](Self::encode), splitting on the first `:`.
    ///
    /// # Errors
    /// - [`CubeCipherError::MetadataNotBase64`] — blob is not base64.
    /// - [`CubeCipherError::MetadataNotUtf8`] — decoded bytes are not UTF-8.
    /// - [`CubeCipherError::MetadataMissingSeparator`] — no `:` present.
    /// - [`CubeCipherError::InvalidMessageLength`] — length segment is not
    ///   a non-negative integer.
    /// - [`CubeCipherError::UnknownMove`] — a token fails to parse.
    pub(crate) fn decode(blob: &str) -> Result<Self, CubeCipherError> {
        let bytes = STANDARD
            .decode(blob)
            .map_err(|_| CubeCipherError::MetadataNotBase64)?;
        let plain = String::from_utf8(bytes).map_err(|_| CubeCipherError::MetadataNotUtf8)?;
        let (len_part, moves_part) = plain
            .split_once(':')
            .ok_or(CubeCipherError::MetadataMissingSeparator)?;
        let message_len: usize = len_part
            .parse()
            .map_err(|_| CubeCipherError::InvalidMessageLength(len_part.to_string()))?;
        let key = if moves_part.is_empty() {
            Vec::new()
        } else {
            moves_part
                .split(',')
                .map(str::parse)
                .collect::<Result<Vec<MoveToken>, _>>()?
        };
        Ok(Metadata { message_len, key })
    }
}
