//! Coordinate encodings projecting cube substates onto small integers.
//!
//! Each of the six axes maps an independent aspect of the cube state onto a
//! dense integer range, so that state transitions become table lookups.
//! Phase 1 uses corner orientation, edge orientation, and the positions of
//! the four middle-slice edges; a cube is in the G1 subgroup exactly when
//! all three are zero. Phase 2, defined inside G1, uses Lehmer-code ranks
//! of the corner, U/D-edge, and slice-edge permutations.
//!
//! Decoding does not reconstruct the full cube; it produces a
//! representative of the coordinate's equivalence class, which is all the
//! move-table builder needs.

use crate::cube::{Cube, FIRST_SLICE_EDGE};

/// Corner orientation states: 3^7, the eighth twist is forced.
pub const CO_COUNT: usize = 2187;
/// Edge orientation states: 2^11, the twelfth flip is forced.
pub const EO_COUNT: usize = 2048;
/// Middle-slice occupancy states: C(12, 4).
pub const UDS_COUNT: usize = 495;
/// Corner permutations: 8!.
pub const CP_COUNT: usize = 40320;
/// U/D-layer edge permutations: 8!.
pub const UDEP_COUNT: usize = 40320;
/// Middle-slice edge permutations: 4!.
pub const SEP_COUNT: usize = 24;

const FACTORIALS: [usize; 9] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];

/// Binomial coefficients C(n, k) for n, k up to 12.
const fn binomial_table() -> [[u16; 13]; 13] {
    let mut table = [[0u16; 13]; 13];
    let mut n = 0;
    while n < 13 {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
}

const BINOMIAL: [[u16; 13]; 13] = binomial_table();

const CORNER_ALPHABET: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const UD_EDGE_ALPHABET: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const SLICE_ALPHABET: [u8; 4] = [8, 9, 10, 11];

/// Base-3 rank of the first seven corner orientations.
pub fn encode_corner_orientation(cube: &Cube) -> u16 {
    cube.corners[..7]
        .iter()
        .fold(0, |rank, c| rank * 3 + c.orientation as u16)
}

/// Representative cube for a corner-orientation coordinate: identity
/// permutation, the eighth twist chosen so the sum is divisible by 3.
pub fn decode_corner_orientation(co: u16) -> Cube {
    debug_assert!((co as usize) < CO_COUNT);
    let mut cube = Cube::new();
    let mut rest = co;
    let mut sum = 0;
    for i in (0..7).rev() {
        let orientation = (rest % 3) as u8;
        rest /= 3;
        cube.corners[i].orientation = orientation;
        sum += orientation;
    }
    cube.corners[7].orientation = (3 - sum % 3) % 3;
    cube
}

/// Base-2 rank of the first eleven edge orientations.
pub fn encode_edge_orientation(cube: &Cube) -> u16 {
    cube.edges[..11]
        .iter()
        .fold(0, |rank, e| rank * 2 + e.orientation as u16)
}

/// Representative cube for an edge-orientation coordinate: identity
/// permutation, the twelfth flip chosen to make the sum even.
pub fn decode_edge_orientation(eo: u16) -> Cube {
    debug_assert!((eo as usize) < EO_COUNT);
    let mut cube = Cube::new();
    let mut rest = eo;
    let mut sum = 0;
    for i in (0..11).rev() {
        let orientation = (rest % 2) as u8;
        rest /= 2;
        cube.edges[i].orientation = orientation;
        sum += orientation;
    }
    cube.edges[11].orientation = sum % 2;
    cube
}

/// Combinatorial rank of the set of slots holding the four middle-slice
/// edges: scanning slots from the top with `k` slice edges left to place,
/// each occupied slot contributes C(11 - slot, k).
pub fn encode_ud_slice(cube: &Cube) -> u16 {
    let mut rank = 0;
    let mut k = 4;
    for (slot, edge) in cube.edges.iter().enumerate() {
        if edge.piece >= FIRST_SLICE_EDGE {
            rank += BINOMIAL[11 - slot][k];
            k -= 1;
        }
    }
    rank
}

/// Representative cube for a slice-occupancy coordinate. Slice pieces 8..12
/// fill the ranked slots from the top down; the remaining slots are
/// renumbered 0..8, which keeps them out of the slice without fixing any
/// particular identity.
pub fn decode_ud_slice(uds: u16) -> Cube {
    debug_assert!((uds as usize) < UDS_COUNT);
    let mut cube = Cube::new();
    let mut rest = uds;
    let mut k = 4;
    let mut slice_piece = FIRST_SLICE_EDGE;
    let mut other_piece = 0;
    for slot in 0..12 {
        if k > 0 && rest >= BINOMIAL[11 - slot][k] {
            rest -= BINOMIAL[11 - slot][k];
            cube.edges[slot].piece = slice_piece;
            slice_piece += 1;
            k -= 1;
        } else {
            cube.edges[slot].piece = other_piece;
            other_piece += 1;
        }
    }
    cube
}

/// Lehmer-code rank of a permutation drawn from `alphabet`.
fn permutation_rank(pieces: impl Iterator<Item = u8>, alphabet: &[u8]) -> u16 {
    let mut remaining = alphabet.to_vec();
    let n = remaining.len();
    let mut rank = 0;
    for (i, piece) in pieces.enumerate() {
        let position = remaining
            .iter()
            .position(|&p| p == piece)
            .expect("piece outside the permutation alphabet");
        rank += position * FACTORIALS[n - 1 - i];
        remaining.remove(position);
    }
    rank as u16
}

/// Inverts a Lehmer-code rank back into a permutation of `alphabet`.
fn rank_to_permutation(rank: u16, alphabet: &[u8]) -> Vec<u8> {
    let mut remaining = alphabet.to_vec();
    let n = remaining.len();
    let mut rest = rank as usize;
    let mut permutation = Vec::with_capacity(n);
    for i in 0..n {
        let factorial = FACTORIALS[n - 1 - i];
        permutation.push(remaining.remove(rest / factorial));
        rest %= factorial;
    }
    permutation
}

/// Lehmer rank of the corner permutation over pieces 0..8.
pub fn encode_corner_permutation(cube: &Cube) -> u16 {
    permutation_rank(cube.corners.iter().map(|c| c.piece), &CORNER_ALPHABET)
}

/// Representative cube for a corner-permutation coordinate.
pub fn decode_corner_permutation(cp: u16) -> Cube {
    debug_assert!((cp as usize) < CP_COUNT);
    let mut cube = Cube::new();
    for (slot, piece) in rank_to_permutation(cp, &CORNER_ALPHABET).into_iter().enumerate() {
        cube.corners[slot].piece = piece;
    }
    cube
}

/// Lehmer rank of the U/D-layer edge permutation over pieces 0..8.
pub fn encode_ud_edge_permutation(cube: &Cube) -> u16 {
    permutation_rank(cube.edges[..8].iter().map(|e| e.piece), &UD_EDGE_ALPHABET)
}

/// Representative cube for a U/D-edge-permutation coordinate.
pub fn decode_ud_edge_permutation(udep: u16) -> Cube {
    debug_assert!((udep as usize) < UDEP_COUNT);
    let mut cube = Cube::new();
    for (slot, piece) in rank_to_permutation(udep, &UD_EDGE_ALPHABET)
        .into_iter()
        .enumerate()
    {
        cube.edges[slot].piece = piece;
    }
    cube
}

/// Lehmer rank of the middle-slice edge permutation over pieces 8..12.
pub fn encode_slice_permutation(cube: &Cube) -> u16 {
    permutation_rank(cube.edges[8..].iter().map(|e| e.piece), &SLICE_ALPHABET)
}

/// Representative cube for a slice-permutation coordinate.
pub fn decode_slice_permutation(sep: u16) -> Cube {
    debug_assert!((sep as usize) < SEP_COUNT);
    let mut cube = Cube::new();
    for (offset, piece) in rank_to_permutation(sep, &SLICE_ALPHABET).into_iter().enumerate() {
        cube.edges[8 + offset].piece = piece;
    }
    cube
}

/// The phase-1 coordinate triple of a cube state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase1Coords {
    pub co: u16,
    pub eo: u16,
    pub uds: u16,
}

impl Phase1Coords {
    pub fn from_cube(cube: &Cube) -> Self {
        Phase1Coords {
            co: encode_corner_orientation(cube),
            eo: encode_edge_orientation(cube),
            uds: encode_ud_slice(cube),
        }
    }

    /// True when the cube is inside the G1 subgroup.
    pub fn is_goal(self) -> bool {
        self.co == 0 && self.eo == 0 && self.uds == 0
    }
}

/// The phase-2 coordinate triple of a cube state. Only meaningful for
/// cubes inside G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase2Coords {
    pub cp: u16,
    pub udep: u16,
    pub sep: u16,
}

impl Phase2Coords {
    pub fn from_cube(cube: &Cube) -> Self {
        Phase2Coords {
            cp: encode_corner_permutation(cube),
            udep: encode_ud_edge_permutation(cube),
            sep: encode_slice_permutation(cube),
        }
    }

    /// True when the cube is solved.
    pub fn is_goal(self) -> bool {
        self.cp == 0 && self.udep == 0 && self.sep == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn test_binomial_table() {
        assert_eq!(BINOMIAL[12][4], 495);
        assert_eq!(BINOMIAL[11][4], 330);
        assert_eq!(BINOMIAL[7][3], 35);
        assert_eq!(BINOMIAL[4][4], 1);
        assert_eq!(BINOMIAL[3][4], 0);
    }

    #[test]
    fn test_solved_cube_encodes_to_zero() {
        let cube = Cube::new();
        assert!(Phase1Coords::from_cube(&cube).is_goal());
        assert!(Phase2Coords::from_cube(&cube).is_goal());
    }

    #[test]
    fn test_corner_orientation_roundtrip() {
        for co in 0..CO_COUNT as u16 {
            let cube = decode_corner_orientation(co);
            assert_eq!(encode_corner_orientation(&cube), co);
            let sum: u32 = cube.corners().iter().map(|c| c.orientation as u32).sum();
            assert_eq!(sum % 3, 0, "twist sum broken for co {co}");
        }
    }

    #[test]
    fn test_edge_orientation_roundtrip() {
        for eo in 0..EO_COUNT as u16 {
            let cube = decode_edge_orientation(eo);
            assert_eq!(encode_edge_orientation(&cube), eo);
            let sum: u32 = cube.edges().iter().map(|e| e.orientation as u32).sum();
            assert_eq!(sum % 2, 0, "flip sum broken for eo {eo}");
        }
    }

    #[test]
    fn test_ud_slice_roundtrip() {
        for uds in 0..UDS_COUNT as u16 {
            let cube = decode_ud_slice(uds);
            assert_eq!(encode_ud_slice(&cube), uds);
            let slice_edges = cube
                .edges()
                .iter()
                .filter(|e| e.piece >= FIRST_SLICE_EDGE)
                .count();
            assert_eq!(slice_edges, 4);
        }
    }

    #[test]
    fn test_corner_permutation_roundtrip() {
        for cp in 0..CP_COUNT as u16 {
            assert_eq!(encode_corner_permutation(&decode_corner_permutation(cp)), cp);
        }
    }

    #[test]
    fn test_ud_edge_permutation_roundtrip() {
        for udep in 0..UDEP_COUNT as u16 {
            assert_eq!(
                encode_ud_edge_permutation(&decode_ud_edge_permutation(udep)),
                udep
            );
        }
    }

    #[test]
    fn test_slice_permutation_roundtrip() {
        for sep in 0..SEP_COUNT as u16 {
            assert_eq!(encode_slice_permutation(&decode_slice_permutation(sep)), sep);
        }
    }

    #[test]
    fn test_known_coordinates_after_f() {
        let mut cube = Cube::new();
        cube.apply_move(Move::F);
        // twists 2,0,0,1,1,0,0 read as base 3, flips at slots 0, 4, 8 read
        // as base 2, slice edges left in slots 0, 4, 9, 10
        assert_eq!(encode_corner_orientation(&cube), 1494);
        assert_eq!(encode_edge_orientation(&cube), 1092);
        assert_eq!(encode_ud_slice(&cube), 367);
    }

    #[test]
    fn test_known_permutation_ranks_after_u() {
        let mut cube = Cube::new();
        cube.apply_move(Move::U);
        // both top layers become the cycle 3,0,1,2 over their first four slots
        assert_eq!(encode_corner_permutation(&cube), 15120);
        assert_eq!(encode_ud_edge_permutation(&cube), 15120);
        assert_eq!(encode_slice_permutation(&cube), 0);
    }

    #[test]
    fn test_known_slice_rank_after_f2() {
        let mut cube = Cube::new();
        cube.apply_move(Move::F2);
        // F2 swaps the FL and FR slice edges
        assert_eq!(encode_slice_permutation(&cube), 21);
        assert_eq!(encode_ud_slice(&cube), 0);
    }

    #[test]
    fn test_u_preserves_phase1_goal() {
        let mut cube = Cube::new();
        cube.apply_move(Move::U);
        assert!(Phase1Coords::from_cube(&cube).is_goal());
        assert!(!Phase2Coords::from_cube(&cube).is_goal());
    }

    #[test]
    fn test_quarter_f_leaves_g1() {
        let mut cube = Cube::new();
        cube.apply_move(Move::F);
        assert!(!Phase1Coords::from_cube(&cube).is_goal());
    }
}
