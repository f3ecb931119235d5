//! StateBuffer: the fixed 54-cell symbol buffer the cipher transforms.
//!
//! Holds one message's worth of symbols while a key is applied. Each
//! Encrypt/Decrypt call owns its buffer exclusively; nothing survives the
//! call. Move application lives here too: the buffer is the only thing a
//! permutation can act on.

use crate::error::CubeCipherError;
use crate::moves::{Modifier, MoveToken};
use crate::permutation::PermutationTable;

/// Number of cells in the state (a 3x3x3 cube has 54 facelets).
pub const STATE_SIZE: usize = 54;

/// Padding symbol for unused state cells.
pub const PAD_SYMBOL: char = '_';

/// Fixed-capacity mutable symbol buffer, mutated in place by moves.
#[derive(Debug)]
pub(crate) struct StateBuffer {
    cells: [char; STATE_SIZE],
}

impl StateBuffer {
    /// Encodes a message into a full state.
    ///
    /// Messages longer than [`STATE_SIZE`] characters are truncated;
    /// shorter ones are right-padded with [`PAD_SYMBOL`].
    pub(crate) fn from_message(message: &str) -> Self {
        let mut cells = [PAD_SYMBOL; STATE_SIZE];
        for (cell, ch) in cells.iter_mut().zip(message.chars()) {
            *cell = ch;
        }
        StateBuffer { cells }
    }

    /// Loads a cipher body for decryption.
    ///
    /// Short bodies are right-padded with [`PAD_SYMBOL`] like messages;
    /// overlong bodies are rejected, never truncated.
    ///
    /// # Errors
    /// Returns [`CubeCipherError::BodyTooLong`] if `body` holds more than
    /// [`STATE_SIZE`] characters.
    pub(crate) fn from_cipher_body(body: &str) -> Result<Self, CubeCipherError> {
        let len = body.chars().count();
        if len > STATE_SIZE {
            return Err(CubeCipherError::BodyTooLong(len));
        }
        Ok(Self::from_message(body))
    }

    /// Applies one move token to the state.
    ///
    /// Selects the forward permutation, or the inverse for reversed
    /// modifiers, and applies it once — twice for double modifiers.
    pub(crate) fn apply_move(&mut self, token: MoveToken, table: &PermutationTable) {
        let perm = table.lookup(token.base);
        let map = match token.modifier {
            Modifier::Normal | Modifier::Double => perm.forward(),
            Modifier::Reversed | Modifier::ReversedDouble => perm.inverse(),
        };
        let times = match token.modifier {
            Modifier::Normal | Modifier::Reversed => 1,
            Modifier::Double | Modifier::ReversedDouble => 2,
        };
        for _ in 0..times {
            self.apply(map);
        }
    }

    /// Applies a raw index map as a gather: `next[i] = cells[map[i]]`.
    fn apply(&mut self, map: &[usize; STATE_SIZE]) {
        let mut next = [PAD_SYMBOL; STATE_SIZE];
        for (cell, &src) in next.iter_mut().zip(map.iter()) {
            *cell = self.cells[src];
        }
        self.cells = next;
    }

    /// Projects the state back to text verbatim, padding included.
    pub(crate) fn to_text(&self) -> String {
        self.cells.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{PermutationTable, TABLE_SEED};

    fn token(text: &str) -> MoveToken {
        text.parse().unwrap()
    }

    #[test]
    fn test_from_message_pads_short() {
        let state = StateBuffer::from_message("HELLO");
        let text = state.to_text();
        assert_eq!(text.len(), STATE_SIZE);
        assert!(text.starts_with("HELLO"));
        assert!(text[5..].chars().all(|c| c == PAD_SYMBOL));
    }

    #[test]
    fn test_from_message_truncates_long() {
        let long: String = "ABCDEFGHIJ".chars().cycle().take(80).collect();
        let state = StateBuffer::from_message(&long);
        let text = state.to_text();
        assert_eq!(text.chars().count(), STATE_SIZE);
        assert_eq!(text, long[..STATE_SIZE]);
    }

    #[test]
    fn test_from_message_exact_capacity_unpadded() {
        let exact: String = "Q".repeat(STATE_SIZE);
        let state = StateBuffer::from_message(&exact);
        assert_eq!(state.to_text(), exact);
    }

    #[test]
    fn test_from_cipher_body_pads_short() {
        let state = StateBuffer::from_cipher_body("AB").unwrap();
        let text = state.to_text();
        assert_eq!(text.chars().count(), STATE_SIZE);
        assert!(text.starts_with("AB"));
    }

    #[test]
    fn test_from_cipher_body_rejects_long() {
        let long = "X".repeat(STATE_SIZE + 1);
        let err = StateBuffer::from_cipher_body(&long).unwrap_err();
        assert!(matches!(err, CubeCipherError::BodyTooLong(n) if n == STATE_SIZE + 1));
    }

    #[test]
    fn test_forward_then_reversed_restores_state() {
        let table = PermutationTable::generate(TABLE_SEED);
        for base in crate::moves::BaseMove::ALL {
            let mut state = StateBuffer::from_message("involution check");
            let original = state.to_text();
            state.apply_move(MoveToken::new(base, Modifier::Normal), &table);
            assert_ne!(state.to_text(), original, "{} left the state unchanged", base);
            state.apply_move(MoveToken::new(base, Modifier::Reversed), &table);
            assert_eq!(state.to_text(), original, "{}' did not undo {}", base, base);
        }
    }

    #[test]
    fn test_reversed_then_forward_restores_state() {
        let table = PermutationTable::generate(TABLE_SEED);
        let mut state = StateBuffer::from_message("the other direction");
        let original = state.to_text();
        state.apply_move(token("R'"), &table);
        state.apply_move(token("R"), &table);
        assert_eq!(state.to_text(), original);
    }

    #[test]
    fn test_double_equals_two_singles() {
        let table = PermutationTable::generate(TABLE_SEED);
        let mut doubled = StateBuffer::from_message("double move symmetry");
        doubled.apply_move(token("F2"), &table);

        let mut twice = StateBuffer::from_message("double move symmetry");
        twice.apply_move(token("F"), &table);
        twice.apply_move(token("F"), &table);

        assert_eq!(doubled.to_text(), twice.to_text());
    }

    #[test]
    fn test_reversed_double_equals_two_reversed() {
        let table = PermutationTable::generate(TABLE_SEED);
        let mut doubled = StateBuffer::from_message("reversed double");
        doubled.apply_move(token("F'2"), &table);

        let mut twice = StateBuffer::from_message("reversed double");
        twice.apply_move(token("F'"), &table);
        twice.apply_move(token("F'"), &table);

        assert_eq!(doubled.to_text(), twice.to_text());
    }

    #[test]
    fn test_double_then_reversed_double_restores_state() {
        let table = PermutationTable::generate(TABLE_SEED);
        let mut state = StateBuffer::from_message("U2 then U'2");
        let original = state.to_text();
        state.apply_move(token("U2"), &table);
        state.apply_move(token("U'2"), &table);
        assert_eq!(state.to_text(), original);
    }

    #[test]
    fn test_apply_gathers_from_forward_map() {
        let table = PermutationTable::generate(TABLE_SEED);
        // 54 distinct symbols make the gather fully observable.
        let distinct: String = ('!'..)
            .filter(char::is_ascii_graphic)
            .take(STATE_SIZE)
            .collect();
        let mut state = StateBuffer::from_message(&distinct);
        state.apply_move(token("U"), &table);

        let moved: Vec<char> = state.to_text().chars().collect();
        let original: Vec<char> = distinct.chars().collect();
        let forward = table.lookup(crate::moves::BaseMove::U).forward();
        for i in 0..STATE_SIZE {
            assert_eq!(
                moved[i], original[forward[i]],
                "cell {} was not gathered from forward[{}]",
                i, i
            );
        }
    }

    #[test]
    fn test_unicode_symbols_survive_moves() {
        let table = PermutationTable::generate(TABLE_SEED);
        let mut state = StateBuffer::from_message("héllo wörld 🙂");
        let original = state.to_text();
        state.apply_move(token("L"), &table);
        state.apply_move(token("L'"), &table);
        assert_eq!(state.to_text(), original);
    }
}
