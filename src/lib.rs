//! cubecipher: permutation cipher over a 54-cell cube state.
//!
//! Encodes a short text message into a fixed-size symbolic state, scrambles
//! it through a sequence of named, exactly-invertible permutations
//! ("moves"), and emits a self-describing ciphertext that reverses back to
//! the original message with no key material beyond the move sequence —
//! which travels inside the ciphertext itself.
//!
//! Not a cryptographically strong scheme; the engineering content is the
//! exact-invertibility machinery: deterministic move tables, token
//! parsing/inversion, and the metadata protocol guaranteeing lossless
//! round trips.
//!
//! # Architecture
//!
//! ```text
//! PermutationTable  (six named bijections over [0, 54) + exact inverses,
//!     │              built once per process from a fixed seed)
//!     ▼
//! StateBuffer       (54-cell symbol buffer — encodes the message, applies
//!     │              moves as gather operations)
//!     ▼
//! CubeCipher        (facade — encrypt: encode → apply key → body|metadata;
//!                    decrypt: parse → inverted key in reverse → truncate)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use cubecipher::{CubeCipher, MoveToken};
//!
//! let key: Vec<MoveToken> = ["U", "R'", "F2"]
//!     .iter()
//!     .map(|t| t.parse().unwrap())
//!     .collect();
//!
//! let cipher = CubeCipher::new();
//! let ciphertext = cipher.encrypt("HELLO", &key);
//! assert_eq!(CubeCipher::new().decrypt(&ciphertext).unwrap(), "HELLO");
//! ```
//!
//! Generate a random key instead of writing one by hand:
//!
//! ```
//! use cubecipher::{generate_key, CubeCipher};
//!
//! let key = generate_key(6);
//! let cipher = CubeCipher::new();
//! let ciphertext = cipher.encrypt("attack at dawn", &key);
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "attack at dawn");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod permutation;
pub mod storage;

mod cube_cipher;
mod metadata;
mod moves;
mod state;

pub use cube_cipher::CubeCipher;
pub use moves::{generate_key, BaseMove, Modifier, MoveToken};
pub use state::{PAD_SYMBOL, STATE_SIZE};
