//! Two-phase IDA* search over the coordinate tables.
//!
//! Phase 1 drives the cube into the G1 subgroup with all eighteen moves;
//! phase 2 finishes it inside G1 with the ten-move subset. Each phase runs
//! iterative deepening over a bounded depth-first search whose stack holds
//! coordinate triples, with children ordered by the pruning heuristic and
//! near-goal nodes short-circuited through the endgame databases.

use crate::coords::{Phase1Coords, Phase2Coords};
use crate::cube::Cube;
use crate::error::Error;
use crate::moves::{Move, ALL_MOVES, PHASE2_MOVES};
use crate::tables::{Tables, Triple, PHASE1_ENDGAME_DEPTH, PHASE2_ENDGAME_DEPTH};

/// Phase-1 iterative-deepening limit.
const PHASE1_LIMIT: u8 = 12;
/// Combined solution length budget that bounds phase 2.
const TOTAL_BUDGET: u8 = 25;
/// Phase 2 always gets at least this much depth.
const PHASE2_FLOOR: u8 = 8;

/// Strengthened heuristic propagation is a build-time choice: it caps how
/// fast h may fall along an edge, which tightens the bound but defers
/// solutions that overshoot the current iteration.
const ENHANCED_HEURISTIC: bool = cfg!(feature = "enhanced-heuristic");

/// One phase of the two-phase algorithm: its move set, endgame query
/// bound, and table lookups.
trait Phase {
    const INDEX: u8;
    const MOVES: &'static [Move];
    /// Largest heuristic value at which the endgame database is probed;
    /// one past the database's generation depth, covering its partial
    /// frontier.
    const ENDGAME_QUERY_DEPTH: u8;

    fn start(cube: &Cube) -> Triple;
    fn next(tables: &Tables, triple: Triple, m: Move) -> Triple;
    fn heuristic(tables: &Tables, triple: Triple) -> u8;
    fn endgame(tables: &Tables, triple: Triple) -> Option<&[Move]>;
}

struct PhaseOne;

impl Phase for PhaseOne {
    const INDEX: u8 = 1;
    const MOVES: &'static [Move] = &ALL_MOVES;
    const ENDGAME_QUERY_DEPTH: u8 = PHASE1_ENDGAME_DEPTH + 1;

    fn start(cube: &Cube) -> Triple {
        let coords = Phase1Coords::from_cube(cube);
        (coords.co, coords.eo, coords.uds)
    }

    fn next(tables: &Tables, triple: Triple, m: Move) -> Triple {
        tables.phase1_move(triple, m)
    }

    fn heuristic(tables: &Tables, triple: Triple) -> u8 {
        tables.phase1_pruning(triple)
    }

    fn endgame(tables: &Tables, triple: Triple) -> Option<&[Move]> {
        tables.phase1_endgame(triple)
    }
}

struct PhaseTwo;

impl Phase for PhaseTwo {
    const INDEX: u8 = 2;
    const MOVES: &'static [Move] = &PHASE2_MOVES;
    const ENDGAME_QUERY_DEPTH: u8 = PHASE2_ENDGAME_DEPTH + 1;

    fn start(cube: &Cube) -> Triple {
        let coords = Phase2Coords::from_cube(cube);
        (coords.cp, coords.udep, coords.sep)
    }

    fn next(tables: &Tables, triple: Triple, m: Move) -> Triple {
        tables.phase2_move(triple, m)
    }

    fn heuristic(tables: &Tables, triple: Triple) -> u8 {
        tables.phase2_pruning(triple)
    }

    fn endgame(tables: &Tables, triple: Triple) -> Option<&[Move]> {
        tables.phase2_endgame(triple)
    }
}

/// A node on the depth-first stack.
struct Node {
    triple: Triple,
    last: Option<Move>,
    depth: u8,
    h: u8,
}

/// The two-phase solver. Holds only a shared reference to the tables, so
/// concurrent solves are independent and mutate no shared state.
pub struct Solver<'a> {
    tables: &'a Tables,
}

impl<'a> Solver<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Solver { tables }
    }

    /// Solves the cube, returning the concatenated move sequence.
    pub fn solve(&self, cube: &Cube) -> Result<Vec<Move>, Error> {
        let (mut phase1, mut phase2) = self.solve_phases(cube)?;
        phase1.append(&mut phase2);
        Ok(phase1)
    }

    /// Solves the cube, returning the phase-1 and phase-2 sequences
    /// separately.
    pub fn solve_phases(&self, cube: &Cube) -> Result<(Vec<Move>, Vec<Move>), Error> {
        let phase1 = self.ida_star::<PhaseOne>(cube, PHASE1_LIMIT)?;

        let mut in_g1 = *cube;
        in_g1.apply_sequence(&phase1);

        let limit = (TOTAL_BUDGET as usize)
            .saturating_sub(phase1.len())
            .max(PHASE2_FLOOR as usize) as u8;
        let phase2 = self.ida_star::<PhaseTwo>(&in_g1, limit)?;

        Ok((phase1, phase2))
    }

    /// Iterative deepening: bounded searches with `max_depth` rising from
    /// the start heuristic to the phase limit.
    fn ida_star<P: Phase>(&self, cube: &Cube, limit: u8) -> Result<Vec<Move>, Error> {
        let start = P::start(cube);
        if start == (0, 0, 0) {
            return Ok(Vec::new());
        }

        let h0 = P::heuristic(self.tables, start);
        for max_depth in h0..=limit {
            if let Some(solution) = self.bounded_search::<P>(start, h0, max_depth) {
                return Ok(solution);
            }
        }
        Err(Error::Unsolvable {
            phase: P::INDEX,
            limit,
        })
    }

    fn bounded_search<P: Phase>(&self, start: Triple, h0: u8, max_depth: u8) -> Option<Vec<Move>> {
        // path[d] is the move that entered the node at depth d; the root
        // at depth 0 has none
        let mut path: Vec<Option<Move>> = vec![None; max_depth as usize + 1];
        let mut stack = Vec::with_capacity(max_depth as usize + 1);
        stack.push(Node {
            triple: start,
            last: None,
            depth: 0,
            h: h0,
        });

        while let Some(mut node) = stack.pop() {
            path[node.depth as usize] = node.last;

            if node.h <= P::ENDGAME_QUERY_DEPTH {
                if let Some(tail) = P::endgame(self.tables, node.triple) {
                    let mut solution = collect_moves(&path, node.depth);
                    solution.extend_from_slice(tail);
                    return Some(solution);
                }
                if ENHANCED_HEURISTIC {
                    // a miss proves the goal is beyond the whole frontier
                    if node.depth + P::ENDGAME_QUERY_DEPTH > max_depth {
                        continue;
                    }
                    node.h = P::ENDGAME_QUERY_DEPTH + 1;
                }
            }

            if node.triple == (0, 0, 0) {
                return Some(collect_moves(&path, node.depth));
            }

            let mut children: Vec<Node> = Vec::with_capacity(P::MOVES.len());
            for &m in P::MOVES {
                // consecutive turns of one face collapse into a single turn
                if node.last.is_some_and(|last| last.face() == m.face()) {
                    continue;
                }
                let triple = P::next(self.tables, node.triple, m);
                let mut h = P::heuristic(self.tables, triple);
                if ENHANCED_HEURISTIC {
                    h = h.max(node.h.saturating_sub(1));
                }
                if node.depth + 1 + h <= max_depth {
                    children.push(Node {
                        triple,
                        last: Some(m),
                        depth: node.depth + 1,
                        h,
                    });
                }
            }

            // stable sort: equal heuristics keep move-ordinal order
            children.sort_by_key(|child| child.h);
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
        None
    }
}

/// The moves along the current search path, root excluded.
fn collect_moves(path: &[Option<Move>], depth: u8) -> Vec<Move> {
    path[1..=depth as usize]
        .iter()
        .map(|m| m.expect("search path below the current depth is filled"))
        .collect()
}
