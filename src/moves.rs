//! Face-turn move algebra.
//!
//! Eighteen moves exist: each of the six faces turned a quarter clockwise,
//! a quarter counterclockwise, or a half turn. Moves are grouped by face in
//! the order `X X' X2`, so `ordinal / 3` is the face and `ordinal % 3` the
//! amount. The binary table files store moves as these ordinals.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

const FACES: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

/// One face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    U,
    UPrime,
    U2,
    D,
    DPrime,
    D2,
    F,
    FPrime,
    F2,
    B,
    BPrime,
    B2,
    L,
    LPrime,
    L2,
    R,
    RPrime,
    R2,
}

/// All eighteen moves in ordinal order.
pub const ALL_MOVES: [Move; 18] = [
    Move::U,
    Move::UPrime,
    Move::U2,
    Move::D,
    Move::DPrime,
    Move::D2,
    Move::F,
    Move::FPrime,
    Move::F2,
    Move::B,
    Move::BPrime,
    Move::B2,
    Move::L,
    Move::LPrime,
    Move::L2,
    Move::R,
    Move::RPrime,
    Move::R2,
];

/// The ten moves that keep a cube inside the G1 subgroup: any U or D turn,
/// and only half turns of the other four faces.
pub const PHASE2_MOVES: [Move; 10] = [
    Move::U,
    Move::UPrime,
    Move::U2,
    Move::D,
    Move::DPrime,
    Move::D2,
    Move::F2,
    Move::B2,
    Move::L2,
    Move::R2,
];

const MOVE_TOKENS: [&str; 18] = [
    "U", "U'", "U2", "D", "D'", "D2", "F", "F'", "F2", "B", "B'", "B2", "L", "L'", "L2", "R",
    "R'", "R2",
];

impl Move {
    /// Ordinal of this move, 0..18.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The move with the given ordinal, if it is in range.
    pub fn from_index(index: u8) -> Option<Move> {
        ALL_MOVES.get(index as usize).copied()
    }

    /// The face this move turns.
    #[inline]
    pub fn face(self) -> Face {
        FACES[self.index() / 3]
    }

    /// The move undoing this one: quarter turns swap direction, half turns
    /// are their own inverse.
    pub fn invert(self) -> Move {
        let base = self.index() / 3 * 3;
        let amount = match self.index() % 3 {
            2 => 2,
            amount => 1 - amount,
        };
        ALL_MOVES[base + amount]
    }

    fn token(self) -> &'static str {
        MOVE_TOKENS[self.index()]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ALL_MOVES
            .iter()
            .copied()
            .find(|m| m.token() == s)
            .ok_or_else(|| Error::ParseMove(s.to_string()))
    }
}

/// Joins a move sequence into the whitespace-separated token form.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.token())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parse_roundtrip() {
        for m in ALL_MOVES {
            let parsed: Move = m.to_string().parse().unwrap();
            assert_eq!(parsed, m);
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        for token in ["X", "U3", "u", "R''", ""] {
            assert!(token.parse::<Move>().is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn test_invert_is_involution() {
        for m in ALL_MOVES {
            assert_eq!(m.invert().invert(), m);
            assert_eq!(m.invert().face(), m.face());
        }
    }

    #[test]
    fn test_invert_pairs() {
        assert_eq!(Move::U.invert(), Move::UPrime);
        assert_eq!(Move::RPrime.invert(), Move::R);
        assert_eq!(Move::F2.invert(), Move::F2);
    }

    #[test]
    fn test_face_extraction() {
        assert_eq!(Move::U.face(), Face::U);
        assert_eq!(Move::DPrime.face(), Face::D);
        assert_eq!(Move::R2.face(), Face::R);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, m) in ALL_MOVES.into_iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Move::from_index(i as u8), Some(m));
        }
        assert_eq!(Move::from_index(18), None);
    }

    #[test]
    fn test_move_tokens() {
        insta::assert_snapshot!("move_tokens", format_moves(&ALL_MOVES));
    }
}
