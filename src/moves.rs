//! Move tokens: base move names, modifiers, parsing and inversion.
//!
//! A key is an ordered list of [`MoveToken`]s. Token text follows the
//! grammar `BaseName ['] [2]` — an optional reversed marker `'` followed by
//! an optional double marker `2`, in that order (`U`, `R'`, `F2`, `B'2`).

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::CubeCipherError;

/// The six canonical base move names. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseMove {
    /// Up face turn.
    U,
    /// Right face turn.
    R,
    /// Left face turn.
    L,
    /// Front face turn.
    F,
    /// Down face turn.
    D,
    /// Back face turn.
    B,
}

impl BaseMove {
    /// All base moves in table-generation order.
    pub const ALL: [BaseMove; 6] = [
        BaseMove::U,
        BaseMove::R,
        BaseMove::L,
        BaseMove::F,
        BaseMove::D,
        BaseMove::B,
    ];

    /// The canonical single-letter name.
    pub fn name(self) -> &'static str {
        match self {
            BaseMove::U => "U",
            BaseMove::R => "R",
            BaseMove::L => "L",
            BaseMove::F => "F",
            BaseMove::D => "D",
            BaseMove::B => "B",
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(BaseMove::U),
            'R' => Some(BaseMove::R),
            'L' => Some(BaseMove::L),
            'F' => Some(BaseMove::F),
            'D' => Some(BaseMove::D),
            'B' => Some(BaseMove::B),
            _ => None,
        }
    }
}

impl fmt::Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a base move is applied.
///
/// `ReversedDouble` is never produced by [`generate_key`], but inverting a
/// `Double` token yields it, so it is a first-class variant: parsed,
/// displayed, and applied like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Apply the forward permutation once.
    Normal,
    /// Apply the inverse permutation once (suffix `'`).
    Reversed,
    /// Apply the forward permutation twice (suffix `2`).
    Double,
    /// Apply the inverse permutation twice (suffix `'2`).
    ReversedDouble,
}

impl Modifier {
    /// The textual suffix appended to the base name.
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Normal => "",
            Modifier::Reversed => "'",
            Modifier::Double => "2",
            Modifier::ReversedDouble => "'2",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Modifier::Normal),
            "'" => Some(Modifier::Reversed),
            "2" => Some(Modifier::Double),
            "'2" => Some(Modifier::ReversedDouble),
            _ => None,
        }
    }
}

/// A base move plus its modifier — one element of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    /// The base move name.
    pub base: BaseMove,
    /// How the move is applied.
    pub modifier: Modifier,
}

impl MoveToken {
    /// Creates a token from its parts.
    pub fn new(base: BaseMove, modifier: Modifier) -> Self {
        MoveToken { base, modifier }
    }

    /// The token that exactly undoes this one.
    ///
    /// | token | inverted |
    /// |-------|----------|
    /// | `X`   | `X'`     |
    /// | `X'`  | `X`      |
    /// | `X2`  | `X'2`    |
    /// | `X'2` | `X2`     |
    pub fn inverted(self) -> Self {
        let modifier = match self.modifier {
            Modifier::Normal => Modifier::Reversed,
            Modifier::Reversed => Modifier::Normal,
            Modifier::Double => Modifier::ReversedDouble,
            Modifier::ReversedDouble => Modifier::Double,
        };
        MoveToken { base: self.base, modifier }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.name(), self.modifier.suffix())
    }
}

impl FromStr for MoveToken {
    type Err = CubeCipherError;

    /// Parses a token, rejecting anything outside the grammar.
    ///
    /// Unknown base names, misordered markers (`U2'`), and trailing text
    /// all fail with [`CubeCipherError::UnknownMove`] carrying the
    /// offending token text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeCipherError::UnknownMove(s.to_string());
        let mut chars = s.chars();
        let base = chars
            .next()
            .and_then(BaseMove::from_char)
            .ok_or_else(unknown)?;
        let modifier = Modifier::from_suffix(chars.as_str()).ok_or_else(unknown)?;
        Ok(MoveToken { base, modifier })
    }
}

/// Generates a random key of `len` tokens.
///
/// Base moves are chosen uniformly; the modifier is `'` with probability
/// 1/3, `2` with probability 1/3, and plain otherwise. `ReversedDouble` is
/// never generated — it only arises from key inversion.
pub fn generate_key(len: usize) -> Vec<MoveToken> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let base = BaseMove::ALL[rng.gen_range(0..BaseMove::ALL.len())];
            let modifier = match rng.gen_range(0..3) {
                0 => Modifier::Reversed,
                1 => Modifier::Double,
                _ => Modifier::Normal,
            };
            MoveToken::new(base, modifier)
        })
        .collect()
}
