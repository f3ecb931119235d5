//! Move permutation table: named bijections over the cube state.
//!
//! Each of the six base moves owns a total bijection over the 54 cell
//! indices together with its precomputed exact inverse. The table is
//! generated from a fixed seed, so every process computes the identical
//! table and no table material ever travels with a ciphertext.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::moves::BaseMove;
use crate::state::STATE_SIZE;

/// Seed for the shared process-wide table. Both the encrypting and the
/// decrypting session derive their tables from this value, which is what
/// makes ciphertexts portable between sessions.
pub const TABLE_SEED: u64 = 42;

/// A base move's forward bijection over `[0, STATE_SIZE)` and its inverse.
///
/// Invariant: `inverse[forward[i]] == i` for every `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [usize; STATE_SIZE],
    inverse: [usize; STATE_SIZE],
}

impl Permutation {
    /// Builds a permutation from its forward map, precomputing the inverse.
    fn from_forward(forward: [usize; STATE_SIZE]) -> Self {
        let mut inverse = [0usize; STATE_SIZE];
        for (i, &f) in forward.iter().enumerate() {
            inverse[f] = i;
        }
        Permutation { forward, inverse }
    }

    /// The forward index map: applying the move gathers `state[forward[i]]`
    /// into position `i`.
    pub fn forward(&self) -> &[usize; STATE_SIZE] {
        &self.forward
    }

    /// The inverse index map, exact undo of [`forward`](Self::forward).
    pub fn inverse(&self) -> &[usize; STATE_SIZE] {
        &self.inverse
    }
}

/// The full move table: one [`Permutation`] per base move.
///
/// Built once per process from [`TABLE_SEED`] and shared read-only by every
/// cipher instance; see [`shared`](Self::shared). Immutable after
/// construction, so unsynchronized concurrent reads are safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    moves: [Permutation; BaseMove::ALL.len()],
}

impl PermutationTable {
    /// Generates a table from an arbitrary seed.
    ///
    /// One `StdRng` stream drives Fisher–Yates shuffles for all six moves
    /// in fixed `U, R, L, F, D, B` order, so the entire table is a pure
    /// function of the seed.
    ///
    /// # Parameters
    /// - `seed`: Seed for the deterministic generator.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let moves: [Permutation; BaseMove::ALL.len()] = std::array::from_fn(|_| {
            let mut map: [usize; STATE_SIZE] = std::array::from_fn(|i| i);
            map.shuffle(&mut rng);
            Permutation::from_forward(map)
        });
        debug!(seed, "generated move permutation table");
        PermutationTable { moves }
    }

    /// The process-wide table seeded with [`TABLE_SEED`].
    ///
    /// Lazily initialized exactly once; all later calls return the same
    /// `&'static` reference.
    pub fn shared() -> &'static PermutationTable {
        static TABLE: OnceLock<PermutationTable> = OnceLock::new();
        TABLE.get_or_init(|| PermutationTable::generate(TABLE_SEED))
    }

    /// Resolves a base move to its permutation pair.
    ///
    /// Total: every [`BaseMove`] has an entry, so no lookup can miss.
    pub fn lookup(&self, base: BaseMove) -> &Permutation {
        &self.moves[base as usize]
    }
}
