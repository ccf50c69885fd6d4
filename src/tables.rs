//! Precomputed move tables, pruning tables, and endgame databases.
//!
//! [`Tables`] is built once at startup and served read-only afterwards.
//! Initialization loads each table group from the data directory when every
//! file of the group is present and well-formed, and regenerates and
//! persists the group otherwise. Generation order matters: pruning tables
//! and endgame databases are derived from the move tables, which are in
//! turn derived from [`crate::cube`]'s move-effect table through the
//! coordinate codecs.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::coords::{
    decode_corner_orientation, decode_corner_permutation, decode_edge_orientation,
    decode_slice_permutation, decode_ud_edge_permutation, decode_ud_slice,
    encode_corner_orientation, encode_corner_permutation, encode_edge_orientation,
    encode_slice_permutation, encode_ud_edge_permutation, encode_ud_slice, CO_COUNT, CP_COUNT,
    EO_COUNT, SEP_COUNT, UDEP_COUNT, UDS_COUNT,
};
use crate::cube::Cube;
use crate::error::Error;
use crate::moves::{Move, ALL_MOVES, PHASE2_MOVES};
use crate::persistence;

/// BFS depth of the phase-1 endgame database.
pub const PHASE1_ENDGAME_DEPTH: u8 = 5;
/// BFS depth of the phase-2 endgame database.
pub const PHASE2_ENDGAME_DEPTH: u8 = 6;

/// Marks a pruning entry not yet reached during generation. Never present
/// in a finished table.
const UNVISITED: u8 = 0xFF;

type MoveTable = Vec<[u16; 18]>;
type EndgameDb = FxHashMap<u64, Vec<Move>>;

/// A coordinate triple, phase-1 or phase-2 depending on context.
pub type Triple = (u16, u16, u16);

/// Packs a coordinate triple into the 48-bit endgame key.
#[inline]
pub fn endgame_key(triple: Triple) -> u64 {
    (triple.0 as u64) << 32 | (triple.1 as u64) << 16 | triple.2 as u64
}

/// All precomputed tables, read-only after construction.
pub struct Tables {
    moves: MoveTableSet,
    pruning: PruningSet,
    endgame: EndgameSet,
}

impl Tables {
    /// Loads every table group from `dir`, regenerating and persisting any
    /// group whose files are missing or malformed.
    pub fn load_or_generate(dir: &Path) -> Result<Tables, Error> {
        let moves = match MoveTableSet::load(dir) {
            Some(moves) => {
                println!("Move tables loaded.");
                moves
            }
            None => {
                fs::create_dir_all(dir)?;
                let moves = MoveTableSet::generate()?;
                moves.save(dir)?;
                println!("Move tables generated and saved.");
                moves
            }
        };

        let pruning = match PruningSet::load(dir) {
            Some(pruning) => {
                println!("Pruning tables loaded.");
                pruning
            }
            None => {
                fs::create_dir_all(dir)?;
                let pruning = PruningSet::generate(&moves)?;
                pruning.save(dir)?;
                println!("Pruning tables generated and saved.");
                pruning
            }
        };

        let endgame = match EndgameSet::load(dir) {
            Some(endgame) => {
                println!("Endgame databases loaded.");
                endgame
            }
            None => {
                fs::create_dir_all(dir)?;
                let endgame = EndgameSet::generate(&moves);
                endgame.save(dir)?;
                println!("Endgame databases generated and saved.");
                endgame
            }
        };

        Ok(Tables {
            moves,
            pruning,
            endgame,
        })
    }

    /// Builds every table in memory without touching the filesystem.
    pub fn generate() -> Result<Tables, Error> {
        let moves = MoveTableSet::generate()?;
        let pruning = PruningSet::generate(&moves)?;
        let endgame = EndgameSet::generate(&moves);
        Ok(Tables {
            moves,
            pruning,
            endgame,
        })
    }

    // Single-axis move lookups.

    #[inline]
    pub fn co_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.co[coord as usize][m.index()]
    }

    #[inline]
    pub fn eo_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.eo[coord as usize][m.index()]
    }

    #[inline]
    pub fn uds_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.uds[coord as usize][m.index()]
    }

    #[inline]
    pub fn cp_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.cp[coord as usize][m.index()]
    }

    #[inline]
    pub fn udep_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.udep[coord as usize][m.index()]
    }

    #[inline]
    pub fn sep_move(&self, coord: u16, m: Move) -> u16 {
        self.moves.sep[coord as usize][m.index()]
    }

    // Batch per-phase lookups.

    /// Advances a phase-1 triple by one move.
    #[inline]
    pub fn phase1_move(&self, triple: Triple, m: Move) -> Triple {
        (
            self.co_move(triple.0, m),
            self.eo_move(triple.1, m),
            self.uds_move(triple.2, m),
        )
    }

    /// Advances a phase-2 triple by one move. Only valid for phase-2 moves.
    #[inline]
    pub fn phase2_move(&self, triple: Triple, m: Move) -> Triple {
        (
            self.cp_move(triple.0, m),
            self.udep_move(triple.1, m),
            self.sep_move(triple.2, m),
        )
    }

    // Single-axis pruning lookups.

    #[inline]
    pub fn co_pruning(&self, coord: u16) -> u8 {
        self.pruning.co[coord as usize]
    }

    #[inline]
    pub fn eo_pruning(&self, coord: u16) -> u8 {
        self.pruning.eo[coord as usize]
    }

    #[inline]
    pub fn uds_pruning(&self, coord: u16) -> u8 {
        self.pruning.uds[coord as usize]
    }

    #[inline]
    pub fn cp_pruning(&self, coord: u16) -> u8 {
        self.pruning.cp[coord as usize]
    }

    #[inline]
    pub fn udep_pruning(&self, coord: u16) -> u8 {
        self.pruning.udep[coord as usize]
    }

    #[inline]
    pub fn sep_pruning(&self, coord: u16) -> u8 {
        self.pruning.sep[coord as usize]
    }

    /// Admissible phase-1 heuristic: the largest of the three single-axis
    /// distances, since solving the phase zeroes every axis.
    #[inline]
    pub fn phase1_pruning(&self, triple: Triple) -> u8 {
        self.co_pruning(triple.0)
            .max(self.eo_pruning(triple.1))
            .max(self.uds_pruning(triple.2))
    }

    /// Admissible phase-2 heuristic, analogous to [`Tables::phase1_pruning`].
    #[inline]
    pub fn phase2_pruning(&self, triple: Triple) -> u8 {
        self.cp_pruning(triple.0)
            .max(self.udep_pruning(triple.1))
            .max(self.sep_pruning(triple.2))
    }

    /// Looks up a phase-1 triple in the endgame database, returning the
    /// stored forward solution on a hit.
    #[inline]
    pub fn phase1_endgame(&self, triple: Triple) -> Option<&[Move]> {
        self.endgame
            .phase1
            .get(&endgame_key(triple))
            .map(Vec::as_slice)
    }

    /// Looks up a phase-2 triple in the endgame database.
    #[inline]
    pub fn phase2_endgame(&self, triple: Triple) -> Option<&[Move]> {
        self.endgame
            .phase2
            .get(&endgame_key(triple))
            .map(Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn endgame_dbs(&self) -> (&EndgameDb, &EndgameDb) {
        (&self.endgame.phase1, &self.endgame.phase2)
    }
}

struct MoveTableSet {
    co: MoveTable,
    eo: MoveTable,
    uds: MoveTable,
    cp: MoveTable,
    udep: MoveTable,
    sep: MoveTable,
}

impl MoveTableSet {
    fn generate() -> Result<MoveTableSet, Error> {
        Ok(MoveTableSet {
            co: build_move_table(
                "corner orientation",
                CO_COUNT,
                &ALL_MOVES,
                decode_corner_orientation,
                encode_corner_orientation,
            )?,
            eo: build_move_table(
                "edge orientation",
                EO_COUNT,
                &ALL_MOVES,
                decode_edge_orientation,
                encode_edge_orientation,
            )?,
            uds: build_move_table(
                "UD-slice position",
                UDS_COUNT,
                &ALL_MOVES,
                decode_ud_slice,
                encode_ud_slice,
            )?,
            cp: build_move_table(
                "corner permutation",
                CP_COUNT,
                &PHASE2_MOVES,
                decode_corner_permutation,
                encode_corner_permutation,
            )?,
            udep: build_move_table(
                "UD-edge permutation",
                UDEP_COUNT,
                &PHASE2_MOVES,
                decode_ud_edge_permutation,
                encode_ud_edge_permutation,
            )?,
            sep: build_move_table(
                "slice permutation",
                SEP_COUNT,
                &PHASE2_MOVES,
                decode_slice_permutation,
                encode_slice_permutation,
            )?,
        })
    }

    fn load(dir: &Path) -> Option<MoveTableSet> {
        Some(MoveTableSet {
            co: persistence::load_move_table(&dir.join("co_move_table.bin"), CO_COUNT).ok()?,
            eo: persistence::load_move_table(&dir.join("eo_move_table.bin"), EO_COUNT).ok()?,
            uds: persistence::load_move_table(&dir.join("uds_move_table.bin"), UDS_COUNT).ok()?,
            cp: persistence::load_move_table(&dir.join("cp_move_table.bin"), CP_COUNT).ok()?,
            udep: persistence::load_move_table(&dir.join("udep_move_table.bin"), UDEP_COUNT)
                .ok()?,
            sep: persistence::load_move_table(&dir.join("sep_move_table.bin"), SEP_COUNT).ok()?,
        })
    }

    fn save(&self, dir: &Path) -> io::Result<()> {
        persistence::save_move_table(&dir.join("co_move_table.bin"), &self.co)?;
        persistence::save_move_table(&dir.join("eo_move_table.bin"), &self.eo)?;
        persistence::save_move_table(&dir.join("uds_move_table.bin"), &self.uds)?;
        persistence::save_move_table(&dir.join("cp_move_table.bin"), &self.cp)?;
        persistence::save_move_table(&dir.join("udep_move_table.bin"), &self.udep)?;
        persistence::save_move_table(&dir.join("sep_move_table.bin"), &self.sep)
    }
}

struct PruningSet {
    co: Vec<u8>,
    eo: Vec<u8>,
    uds: Vec<u8>,
    cp: Vec<u8>,
    udep: Vec<u8>,
    sep: Vec<u8>,
}

impl PruningSet {
    fn generate(moves: &MoveTableSet) -> Result<PruningSet, Error> {
        Ok(PruningSet {
            co: build_pruning_table("corner orientation", CO_COUNT, &ALL_MOVES, |c, m| {
                moves.co[c as usize][m.index()]
            })?,
            eo: build_pruning_table("edge orientation", EO_COUNT, &ALL_MOVES, |c, m| {
                moves.eo[c as usize][m.index()]
            })?,
            uds: build_pruning_table("UD-slice position", UDS_COUNT, &ALL_MOVES, |c, m| {
                moves.uds[c as usize][m.index()]
            })?,
            cp: build_pruning_table("corner permutation", CP_COUNT, &PHASE2_MOVES, |c, m| {
                moves.cp[c as usize][m.index()]
            })?,
            udep: build_pruning_table("UD-edge permutation", UDEP_COUNT, &PHASE2_MOVES, |c, m| {
                moves.udep[c as usize][m.index()]
            })?,
            sep: build_pruning_table("slice permutation", SEP_COUNT, &PHASE2_MOVES, |c, m| {
                moves.sep[c as usize][m.index()]
            })?,
        })
    }

    fn load(dir: &Path) -> Option<PruningSet> {
        Some(PruningSet {
            co: persistence::load_pruning_table(&dir.join("co_pruning_table.bin"), CO_COUNT)
                .ok()?,
            eo: persistence::load_pruning_table(&dir.join("eo_pruning_table.bin"), EO_COUNT)
                .ok()?,
            uds: persistence::load_pruning_table(&dir.join("uds_pruning_table.bin"), UDS_COUNT)
                .ok()?,
            cp: persistence::load_pruning_table(&dir.join("cp_pruning_table.bin"), CP_COUNT)
                .ok()?,
            udep: persistence::load_pruning_table(&dir.join("udep_pruning_table.bin"), UDEP_COUNT)
                .ok()?,
            sep: persistence::load_pruning_table(&dir.join("sep_pruning_table.bin"), SEP_COUNT)
                .ok()?,
        })
    }

    fn save(&self, dir: &Path) -> io::Result<()> {
        persistence::save_pruning_table(&dir.join("co_pruning_table.bin"), &self.co)?;
        persistence::save_pruning_table(&dir.join("eo_pruning_table.bin"), &self.eo)?;
        persistence::save_pruning_table(&dir.join("uds_pruning_table.bin"), &self.uds)?;
        persistence::save_pruning_table(&dir.join("cp_pruning_table.bin"), &self.cp)?;
        persistence::save_pruning_table(&dir.join("udep_pruning_table.bin"), &self.udep)?;
        persistence::save_pruning_table(&dir.join("sep_pruning_table.bin"), &self.sep)
    }
}

struct EndgameSet {
    phase1: EndgameDb,
    phase2: EndgameDb,
}

impl EndgameSet {
    fn generate(moves: &MoveTableSet) -> EndgameSet {
        EndgameSet {
            phase1: build_endgame_db(1, PHASE1_ENDGAME_DEPTH, &ALL_MOVES, |t, m| {
                (
                    moves.co[t.0 as usize][m.index()],
                    moves.eo[t.1 as usize][m.index()],
                    moves.uds[t.2 as usize][m.index()],
                )
            }),
            phase2: build_endgame_db(2, PHASE2_ENDGAME_DEPTH, &PHASE2_MOVES, |t, m| {
                (
                    moves.cp[t.0 as usize][m.index()],
                    moves.udep[t.1 as usize][m.index()],
                    moves.sep[t.2 as usize][m.index()],
                )
            }),
        }
    }

    fn load(dir: &Path) -> Option<EndgameSet> {
        Some(EndgameSet {
            phase1: persistence::load_endgame_db(&dir.join("p1_endgame_db.bin")).ok()?,
            phase2: persistence::load_endgame_db(&dir.join("p2_endgame_db.bin")).ok()?,
        })
    }

    fn save(&self, dir: &Path) -> io::Result<()> {
        persistence::save_endgame_db(&dir.join("p1_endgame_db.bin"), &self.phase1)?;
        persistence::save_endgame_db(&dir.join("p2_endgame_db.bin"), &self.phase2)
    }
}

/// Builds one coordinate move table by decoding every coordinate, applying
/// every permitted move, and re-encoding. Columns for moves outside
/// `moves` stay zero and are never consulted by the solver.
fn build_move_table(
    axis: &'static str,
    count: usize,
    moves: &[Move],
    decode: impl Fn(u16) -> Cube,
    encode: impl Fn(&Cube) -> u16,
) -> Result<MoveTable, Error> {
    println!("Generating {axis} move table...");
    let mut table = vec![[0u16; 18]; count];
    for coord in 0..count as u16 {
        let cube = decode(coord);
        for &m in moves {
            let mut moved = cube;
            moved.apply_move(m);
            let successor = encode(&moved);
            if successor as usize >= count {
                return Err(Error::InvalidCoordinate {
                    axis,
                    coord: successor as u32,
                });
            }
            table[coord as usize][m.index()] = successor;
        }
    }
    Ok(table)
}

/// Builds one pruning table: breadth-first search backward from coordinate
/// zero, recording the minimum number of permitted moves to reach it.
fn build_pruning_table(
    axis: &'static str,
    count: usize,
    moves: &[Move],
    next: impl Fn(u16, Move) -> u16,
) -> Result<Vec<u8>, Error> {
    println!("Generating {axis} pruning table...");
    let mut table = vec![UNVISITED; count];
    let mut queue = VecDeque::new();
    table[0] = 0;
    queue.push_back(0u16);
    let mut visited = 1usize;
    let mut depth = 0u8;

    while !queue.is_empty() {
        let layer_size = queue.len();
        println!("  depth {depth}: {layer_size} states");
        for _ in 0..layer_size {
            let Some(coord) = queue.pop_front() else {
                break;
            };
            for &m in moves {
                let successor = next(coord, m);
                if successor as usize >= count {
                    return Err(Error::InvalidCoordinate {
                        axis,
                        coord: successor as u32,
                    });
                }
                if table[successor as usize] == UNVISITED {
                    table[successor as usize] = depth + 1;
                    queue.push_back(successor);
                    visited += 1;
                }
            }
        }
        depth += 1;
    }

    // every coordinate is reachable; a shortfall means the move table fed
    // to us is corrupt
    if visited != count {
        return Err(Error::InvalidCoordinate {
            axis,
            coord: count as u32,
        });
    }
    println!("  {axis}: {visited} states");
    Ok(table)
}

/// Builds one endgame database: breadth-first search outward from the
/// solved triple. The trail in the queue walks away from solved, so each
/// new state stores the inverted trail reversed, which reads as a forward
/// solution. States discovered from the deepest expanded layer are
/// recorded but not expanded, leaving a partial frontier one past
/// `max_depth`.
fn build_endgame_db(
    phase: u8,
    max_depth: u8,
    moves: &[Move],
    next: impl Fn(Triple, Move) -> Triple,
) -> EndgameDb {
    println!("Generating phase-{phase} endgame database (depth {max_depth})...");
    let mut db = EndgameDb::default();
    let mut queue = VecDeque::new();
    db.insert(endgame_key((0, 0, 0)), Vec::new());
    queue.push_back(((0u16, 0u16, 0u16), Vec::<Move>::new()));
    let mut depth = 0u8;

    while !queue.is_empty() {
        let layer_size = queue.len();
        for _ in 0..layer_size {
            let Some((triple, trail)) = queue.pop_front() else {
                break;
            };
            for &m in moves {
                let successor = next(triple, m);
                let key = endgame_key(successor);
                if db.contains_key(&key) {
                    continue;
                }
                let mut extended = trail.clone();
                extended.push(m.invert());
                if depth < max_depth {
                    queue.push_back((successor, extended.clone()));
                }
                extended.reverse();
                db.insert(key, extended);
            }
        }
        depth += 1;
    }

    println!("  phase-{phase} endgame database: {} entries", db.len());
    db
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Tables;
    use std::sync::OnceLock;

    static TABLES: OnceLock<Tables> = OnceLock::new();

    /// Tables shared across the test suite; generated once, in memory.
    pub(crate) fn tables() -> &'static Tables {
        TABLES.get_or_init(|| Tables::generate().expect("table generation failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::tables;
    use super::*;

    /// Checks a move table against a fresh decode/apply/encode of each
    /// sampled coordinate.
    fn check_agreement(
        lookup: impl Fn(u16, Move) -> u16,
        count: usize,
        stride: usize,
        moves: &[Move],
        decode: impl Fn(u16) -> Cube,
        encode: impl Fn(&Cube) -> u16,
    ) {
        for coord in (0..count as u16).step_by(stride) {
            let cube = decode(coord);
            for &m in moves {
                let mut moved = cube;
                moved.apply_move(m);
                assert_eq!(
                    lookup(coord, m),
                    encode(&moved),
                    "table disagrees at coord {coord}, move {m}"
                );
            }
        }
    }

    #[test]
    fn test_phase1_move_tables_agree_with_cube() {
        let t = tables();
        check_agreement(
            |c, m| t.co_move(c, m),
            CO_COUNT,
            1,
            &ALL_MOVES,
            decode_corner_orientation,
            encode_corner_orientation,
        );
        check_agreement(
            |c, m| t.eo_move(c, m),
            EO_COUNT,
            1,
            &ALL_MOVES,
            decode_edge_orientation,
            encode_edge_orientation,
        );
        check_agreement(
            |c, m| t.uds_move(c, m),
            UDS_COUNT,
            1,
            &ALL_MOVES,
            decode_ud_slice,
            encode_ud_slice,
        );
    }

    #[test]
    fn test_phase2_move_tables_agree_with_cube() {
        let t = tables();
        check_agreement(
            |c, m| t.cp_move(c, m),
            CP_COUNT,
            97,
            &PHASE2_MOVES,
            decode_corner_permutation,
            encode_corner_permutation,
        );
        check_agreement(
            |c, m| t.udep_move(c, m),
            UDEP_COUNT,
            97,
            &PHASE2_MOVES,
            decode_ud_edge_permutation,
            encode_ud_edge_permutation,
        );
        check_agreement(
            |c, m| t.sep_move(c, m),
            SEP_COUNT,
            1,
            &PHASE2_MOVES,
            decode_slice_permutation,
            encode_slice_permutation,
        );
    }

    #[test]
    fn test_uds_is_preserved_by_ud_and_half_turns() {
        let t = tables();
        let preserving = [
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
        for uds in 0..UDS_COUNT as u16 {
            for m in preserving {
                assert_eq!(t.uds_move(uds, m), uds, "{m} should preserve the slice set");
            }
        }
        // a quarter turn of F pulls slice edges out of the slice
        assert_ne!(t.uds_move(0, Move::F), 0);
    }

    /// BFS distances are certified by three local properties: zero at the
    /// goal, no drop greater than one along a move edge, and a decrementing
    /// move out of every nonzero coordinate.
    fn check_pruning_distances(
        pruning: impl Fn(u16) -> u8,
        lookup: impl Fn(u16, Move) -> u16,
        count: usize,
        moves: &[Move],
    ) {
        assert_eq!(pruning(0), 0);
        for coord in 0..count as u16 {
            let here = pruning(coord);
            assert_ne!(here, UNVISITED, "unreached entry at {coord}");
            if coord != 0 {
                assert!(here > 0, "nonzero coordinate {coord} scored zero");
            }
            let mut has_decrement = coord == 0;
            for &m in moves {
                let there = pruning(lookup(coord, m));
                assert!(
                    there + 1 >= here,
                    "distance drops from {here} to {there} at {coord}, {m}"
                );
                has_decrement |= there + 1 == here;
            }
            assert!(has_decrement, "no decrementing move out of {coord}");
        }
    }

    #[test]
    fn test_phase1_pruning_tables_are_exact_distances() {
        let t = tables();
        check_pruning_distances(|c| t.co_pruning(c), |c, m| t.co_move(c, m), CO_COUNT, &ALL_MOVES);
        check_pruning_distances(|c| t.eo_pruning(c), |c, m| t.eo_move(c, m), EO_COUNT, &ALL_MOVES);
        check_pruning_distances(
            |c| t.uds_pruning(c),
            |c, m| t.uds_move(c, m),
            UDS_COUNT,
            &ALL_MOVES,
        );
    }

    #[test]
    fn test_phase2_pruning_tables_are_exact_distances() {
        let t = tables();
        check_pruning_distances(
            |c| t.cp_pruning(c),
            |c, m| t.cp_move(c, m),
            CP_COUNT,
            &PHASE2_MOVES,
        );
        check_pruning_distances(
            |c| t.udep_pruning(c),
            |c, m| t.udep_move(c, m),
            UDEP_COUNT,
            &PHASE2_MOVES,
        );
        check_pruning_distances(
            |c| t.sep_pruning(c),
            |c, m| t.sep_move(c, m),
            SEP_COUNT,
            &PHASE2_MOVES,
        );
    }

    #[test]
    fn test_combined_pruning_is_the_max() {
        let t = tables();
        let triple = (100, 200, 300);
        let expected = t
            .co_pruning(100)
            .max(t.eo_pruning(200))
            .max(t.uds_pruning(300));
        assert_eq!(t.phase1_pruning(triple), expected);
    }

    #[test]
    fn test_endgame_dbs_contain_solved_with_empty_path() {
        let t = tables();
        assert_eq!(t.phase1_endgame((0, 0, 0)), Some(&[][..]));
        assert_eq!(t.phase2_endgame((0, 0, 0)), Some(&[][..]));
    }

    #[test]
    fn test_endgame_paths_stay_within_the_frontier_bound() {
        let t = tables();
        let (phase1, phase2) = t.endgame_dbs();
        assert!(phase1
            .values()
            .all(|path| path.len() <= PHASE1_ENDGAME_DEPTH as usize + 1));
        assert!(phase2
            .values()
            .all(|path| path.len() <= PHASE2_ENDGAME_DEPTH as usize + 1));
    }

    #[test]
    fn test_endgame_paths_reach_the_solved_triple() {
        let t = tables();
        let (phase1, phase2) = t.endgame_dbs();

        for (i, (&key, path)) in phase1.iter().enumerate() {
            if i % 101 != 0 {
                continue;
            }
            let mut triple = unpack(key);
            for &m in path {
                triple = t.phase1_move(triple, m);
            }
            assert_eq!(triple, (0, 0, 0), "phase-1 path fails for key {key:#x}");
        }

        for (i, (&key, path)) in phase2.iter().enumerate() {
            if i % 101 != 0 {
                continue;
            }
            let mut triple = unpack(key);
            for &m in path {
                assert!(PHASE2_MOVES.contains(&m), "illegal phase-2 move {m}");
                triple = t.phase2_move(triple, m);
            }
            assert_eq!(triple, (0, 0, 0), "phase-2 path fails for key {key:#x}");
        }
    }

    #[test]
    fn test_endgame_key_packing() {
        assert_eq!(endgame_key((0, 0, 0)), 0);
        assert_eq!(endgame_key((1, 0, 0)), 1 << 32);
        assert_eq!(endgame_key((0, 1, 0)), 1 << 16);
        assert_eq!(
            endgame_key((2186, 2047, 494)),
            (2186u64 << 32) | (2047u64 << 16) | 494
        );
    }

    fn unpack(key: u64) -> Triple {
        (
            (key >> 32) as u16,
            (key >> 16 & 0xFFFF) as u16,
            (key & 0xFFFF) as u16,
        )
    }
}
