//! Cube state as cubie permutations and orientations.
//!
//! The cube is eight corner slots and twelve edge slots, each holding a
//! piece id and an orientation. Move semantics live entirely in the static
//! [`MOVE_EFFECTS`] table: a 4-cycle on corner slots, a 4-cycle on edge
//! slots, and per-slot orientation deltas. The coordinate move tables in
//! [`crate::tables`] are derived mechanically from this table.

use crate::error::Error;
use crate::moves::Move;

// Corner slots, in fixed order.
pub(crate) const UFL: usize = 0;
pub(crate) const UBL: usize = 1;
pub(crate) const UBR: usize = 2;
pub(crate) const UFR: usize = 3;
pub(crate) const DFL: usize = 4;
pub(crate) const DBL: usize = 5;
pub(crate) const DBR: usize = 6;
pub(crate) const DFR: usize = 7;

// Edge slots, in fixed order. Slots 8..12 form the middle (UD) slice.
pub(crate) const UF: usize = 0;
pub(crate) const UL: usize = 1;
pub(crate) const UB: usize = 2;
pub(crate) const UR: usize = 3;
pub(crate) const DF: usize = 4;
pub(crate) const DL: usize = 5;
pub(crate) const DB: usize = 6;
pub(crate) const DR: usize = 7;
pub(crate) const FL: usize = 8;
pub(crate) const BL: usize = 9;
pub(crate) const BR: usize = 10;
pub(crate) const FR: usize = 11;

/// First edge piece id belonging to the middle slice.
pub(crate) const FIRST_SLICE_EDGE: u8 = 8;

/// A corner cubie: which piece occupies a corner slot, and its twist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub piece: u8,
    pub orientation: u8,
}

/// An edge cubie: which piece occupies an edge slot, and its flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub piece: u8,
    pub orientation: u8,
}

/// Effect of one move. The piece in `sources[i]` lands in `targets[i]`;
/// the orientation deltas are then added at the `sources` slots.
struct MoveEffect {
    corner_sources: [usize; 4],
    corner_targets: [usize; 4],
    corner_twist: [u8; 4],
    edge_sources: [usize; 4],
    edge_targets: [usize; 4],
    edge_flip: [u8; 4],
}

/// Ground truth for move semantics, indexed by move ordinal.
#[rustfmt::skip]
const MOVE_EFFECTS: [MoveEffect; 18] = [
    // U
    MoveEffect {
        corner_sources: [UFL, UBL, UBR, UFR], corner_targets: [UBL, UBR, UFR, UFL],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UF, UL, UB, UR], edge_targets: [UL, UB, UR, UF],
        edge_flip: [0, 0, 0, 0],
    },
    // U'
    MoveEffect {
        corner_sources: [UFL, UFR, UBR, UBL], corner_targets: [UFR, UBR, UBL, UFL],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UF, UR, UB, UL], edge_targets: [UR, UB, UL, UF],
        edge_flip: [0, 0, 0, 0],
    },
    // U2
    MoveEffect {
        corner_sources: [UFL, UBR, UFR, UBL], corner_targets: [UBR, UFL, UBL, UFR],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UF, UB, UL, UR], edge_targets: [UB, UF, UR, UL],
        edge_flip: [0, 0, 0, 0],
    },
    // D
    MoveEffect {
        corner_sources: [DFL, DFR, DBR, DBL], corner_targets: [DFR, DBR, DBL, DFL],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [DF, DR, DB, DL], edge_targets: [DR, DB, DL, DF],
        edge_flip: [0, 0, 0, 0],
    },
    // D'
    MoveEffect {
        corner_sources: [DFL, DBL, DBR, DFR], corner_targets: [DBL, DBR, DFR, DFL],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [DF, DL, DB, DR], edge_targets: [DL, DB, DR, DF],
        edge_flip: [0, 0, 0, 0],
    },
    // D2
    MoveEffect {
        corner_sources: [DFL, DBR, DFR, DBL], corner_targets: [DBR, DFL, DBL, DFR],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [DF, DB, DL, DR], edge_targets: [DB, DF, DR, DL],
        edge_flip: [0, 0, 0, 0],
    },
    // F
    MoveEffect {
        corner_sources: [UFL, UFR, DFR, DFL], corner_targets: [UFR, DFR, DFL, UFL],
        corner_twist: [2, 1, 2, 1],
        edge_sources: [UF, FR, DF, FL], edge_targets: [FR, DF, FL, UF],
        edge_flip: [1, 1, 1, 1],
    },
    // F'
    MoveEffect {
        corner_sources: [UFL, DFL, DFR, UFR], corner_targets: [DFL, DFR, UFR, UFL],
        corner_twist: [2, 1, 2, 1],
        edge_sources: [UF, FL, DF, FR], edge_targets: [FL, DF, FR, UF],
        edge_flip: [1, 1, 1, 1],
    },
    // F2
    MoveEffect {
        corner_sources: [UFL, DFR, UFR, DFL], corner_targets: [DFR, UFL, DFL, UFR],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UF, DF, FL, FR], edge_targets: [DF, UF, FR, FL],
        edge_flip: [0, 0, 0, 0],
    },
    // B
    MoveEffect {
        corner_sources: [UBL, DBL, DBR, UBR], corner_targets: [DBL, DBR, UBR, UBL],
        corner_twist: [1, 2, 1, 2],
        edge_sources: [UB, BL, DB, BR], edge_targets: [BL, DB, BR, UB],
        edge_flip: [1, 1, 1, 1],
    },
    // B'
    MoveEffect {
        corner_sources: [UBL, UBR, DBR, DBL], corner_targets: [UBR, DBR, DBL, UBL],
        corner_twist: [1, 2, 1, 2],
        edge_sources: [UB, BR, DB, BL], edge_targets: [BR, DB, BL, UB],
        edge_flip: [1, 1, 1, 1],
    },
    // B2
    MoveEffect {
        corner_sources: [UBL, DBR, UBR, DBL], corner_targets: [DBR, UBL, DBL, UBR],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UB, DB, BL, BR], edge_targets: [DB, UB, BR, BL],
        edge_flip: [0, 0, 0, 0],
    },
    // L
    MoveEffect {
        corner_sources: [UFL, DFL, DBL, UBL], corner_targets: [DFL, DBL, UBL, UFL],
        corner_twist: [1, 2, 1, 2],
        edge_sources: [UL, FL, DL, BL], edge_targets: [FL, DL, BL, UL],
        edge_flip: [0, 0, 0, 0],
    },
    // L'
    MoveEffect {
        corner_sources: [UFL, UBL, DBL, DFL], corner_targets: [UBL, DBL, DFL, UFL],
        corner_twist: [1, 2, 1, 2],
        edge_sources: [UL, BL, DL, FL], edge_targets: [BL, DL, FL, UL],
        edge_flip: [0, 0, 0, 0],
    },
    // L2
    MoveEffect {
        corner_sources: [UFL, DBL, UBL, DFL], corner_targets: [DBL, UFL, DFL, UBL],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UL, DL, FL, BL], edge_targets: [DL, UL, BL, FL],
        edge_flip: [0, 0, 0, 0],
    },
    // R
    MoveEffect {
        corner_sources: [UFR, UBR, DBR, DFR], corner_targets: [UBR, DBR, DFR, UFR],
        corner_twist: [2, 1, 2, 1],
        edge_sources: [UR, BR, DR, FR], edge_targets: [BR, DR, FR, UR],
        edge_flip: [0, 0, 0, 0],
    },
    // R'
    MoveEffect {
        corner_sources: [UFR, DFR, DBR, UBR], corner_targets: [DFR, DBR, UBR, UFR],
        corner_twist: [2, 1, 2, 1],
        edge_sources: [UR, FR, DR, BR], edge_targets: [FR, DR, BR, UR],
        edge_flip: [0, 0, 0, 0],
    },
    // R2
    MoveEffect {
        corner_sources: [UFR, DBR, UBR, DFR], corner_targets: [DBR, UFR, DFR, UBR],
        corner_twist: [0, 0, 0, 0],
        edge_sources: [UR, DR, FR, BR], edge_targets: [DR, UR, BR, FR],
        edge_flip: [0, 0, 0, 0],
    },
];

/// Moves the cubies in `sources` to the matching `targets` slots.
fn cycle4<T: Copy>(slots: &mut [T], sources: &[usize; 4], targets: &[usize; 4]) {
    let moved = [
        slots[sources[0]],
        slots[sources[1]],
        slots[sources[2]],
        slots[sources[3]],
    ];
    for (cubie, &target) in moved.into_iter().zip(targets) {
        slots[target] = cubie;
    }
}

/// Full cube state: a permutation with orientation of the eight corners and
/// twelve edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    pub(crate) corners: [Corner; 8],
    pub(crate) edges: [Edge; 12],
}

impl Cube {
    /// The solved cube: every piece in its own slot, all orientations zero.
    pub fn new() -> Self {
        let mut corners = [Corner {
            piece: 0,
            orientation: 0,
        }; 8];
        let mut edges = [Edge {
            piece: 0,
            orientation: 0,
        }; 12];
        for (i, corner) in corners.iter_mut().enumerate() {
            corner.piece = i as u8;
        }
        for (i, edge) in edges.iter_mut().enumerate() {
            edge.piece = i as u8;
        }
        Cube { corners, edges }
    }

    /// Builds a cube by applying a whitespace-separated scramble sequence
    /// to the solved state. Empty tokens are skipped.
    pub fn from_scramble(scramble: &str) -> Result<Cube, Error> {
        let mut cube = Cube::new();
        for token in scramble.split_whitespace() {
            cube.apply_move(token.parse()?);
        }
        Ok(cube)
    }

    /// Applies one face turn.
    pub fn apply_move(&mut self, m: Move) {
        let effect = &MOVE_EFFECTS[m.index()];
        cycle4(&mut self.corners, &effect.corner_sources, &effect.corner_targets);
        cycle4(&mut self.edges, &effect.edge_sources, &effect.edge_targets);
        for i in 0..4 {
            let corner = &mut self.corners[effect.corner_sources[i]];
            corner.orientation = (corner.orientation + effect.corner_twist[i]) % 3;
            let edge = &mut self.edges[effect.edge_sources[i]];
            edge.orientation = (edge.orientation + effect.edge_flip[i]) % 2;
        }
    }

    /// Applies a move sequence in order.
    pub fn apply_sequence(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// True when every piece is home with zero orientation.
    pub fn is_solved(&self) -> bool {
        self.corners
            .iter()
            .enumerate()
            .all(|(i, c)| c.piece == i as u8 && c.orientation == 0)
            && self
                .edges
                .iter()
                .enumerate()
                .all(|(i, e)| e.piece == i as u8 && e.orientation == 0)
    }

    /// Read access to the corner slots.
    pub fn corners(&self) -> &[Corner; 8] {
        &self.corners
    }

    /// Read access to the edge slots.
    pub fn edges(&self) -> &[Edge; 12] {
        &self.edges
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Move, ALL_MOVES};

    #[test]
    fn test_new_cube_is_solved() {
        assert!(Cube::new().is_solved());
    }

    #[test]
    fn test_any_single_move_breaks_solved() {
        for m in ALL_MOVES {
            let mut cube = Cube::new();
            cube.apply_move(m);
            assert!(!cube.is_solved(), "{m} left the cube solved");
        }
    }

    #[test]
    fn test_move_then_inverse_is_identity() {
        let scrambled = Cube::from_scramble("F R U' B L D2").unwrap();
        for m in ALL_MOVES {
            let mut cube = scrambled;
            cube.apply_move(m);
            cube.apply_move(m.invert());
            assert_eq!(cube, scrambled, "{m} then {} did not cancel", m.invert());
        }
    }

    #[test]
    fn test_quarter_turn_has_order_four() {
        for m in [Move::U, Move::RPrime, Move::F, Move::BPrime, Move::L, Move::D] {
            let mut cube = Cube::new();
            for _ in 0..4 {
                cube.apply_move(m);
            }
            assert!(cube.is_solved(), "{m} applied four times is not identity");
        }
    }

    #[test]
    fn test_half_turn_has_order_two() {
        for m in [Move::U2, Move::D2, Move::F2, Move::B2, Move::L2, Move::R2] {
            let mut cube = Cube::new();
            cube.apply_move(m);
            cube.apply_move(m);
            assert!(cube.is_solved(), "{m} applied twice is not identity");
        }
    }

    #[test]
    fn test_half_turn_equals_two_quarters() {
        let pairs = [
            (Move::U2, Move::U),
            (Move::D2, Move::D),
            (Move::F2, Move::F),
            (Move::B2, Move::B),
            (Move::L2, Move::L),
            (Move::R2, Move::R),
        ];
        for (half, quarter) in pairs {
            let mut a = Cube::new();
            a.apply_move(half);
            let mut b = Cube::new();
            b.apply_move(quarter);
            b.apply_move(quarter);
            assert_eq!(a, b, "{half} differs from {quarter} {quarter}");
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let sequence: Vec<Move> = "R U R' U'"
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        let mut cube = Cube::new();
        for _ in 0..6 {
            cube.apply_sequence(&sequence);
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_orientation_sums_stay_invariant() {
        let cube = Cube::from_scramble("F R U' B L D2 F' R2 U D B2 L2").unwrap();
        let corner_sum: u32 = cube.corners().iter().map(|c| c.orientation as u32).sum();
        let edge_sum: u32 = cube.edges().iter().map(|e| e.orientation as u32).sum();
        assert_eq!(corner_sum % 3, 0);
        assert_eq!(edge_sum % 2, 0);
    }

    #[test]
    fn test_scramble_parsing() {
        assert!(Cube::from_scramble("").unwrap().is_solved());
        assert!(Cube::from_scramble("   ").unwrap().is_solved());
        assert!(Cube::from_scramble("U U'").unwrap().is_solved());
        assert!(matches!(
            Cube::from_scramble("R X"),
            Err(Error::ParseMove(token)) if token == "X"
        ));
    }

    #[test]
    fn test_pieces_stay_a_permutation() {
        let cube = Cube::from_scramble("R U2 F' L D B R2 U D' F2 B' L2").unwrap();
        let mut corner_seen = [false; 8];
        for corner in cube.corners() {
            assert!(!corner_seen[corner.piece as usize]);
            corner_seen[corner.piece as usize] = true;
        }
        let mut edge_seen = [false; 12];
        for edge in cube.edges() {
            assert!(!edge_seen[edge.piece as usize]);
            edge_seen[edge.piece as usize] = true;
        }
    }
}
