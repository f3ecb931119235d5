//! Ciphertext file persistence.
//!
//! A ciphertext is a single self-describing line of text; it is written
//! and read back verbatim with no additional framing.

use std::fs;
use std::path::Path;

use crate::error::CubeCipherError;

/// Writes a ciphertext string verbatim to `path`.
///
/// # Errors
/// Returns [`CubeCipherError::Io`] if the file cannot be written.
pub fn save_ciphertext<P: AsRef<Path>>(path: P, ciphertext: &str) -> Result<(), CubeCipherError> {
    fs::write(path, ciphertext)?;
    Ok(())
}

/// Reads a ciphertext string verbatim from `path`.
///
/// # Errors
/// Returns [`CubeCipherError::Io`] if the file cannot be read or is not
/// valid UTF-8.
pub fn load_ciphertext<P: AsRef<Path>>(path: P) -> Result<String, CubeCipherError> {
    Ok(fs::read_to_string(path)?)
}
