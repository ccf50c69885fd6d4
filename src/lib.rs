//! Two-Phase Rubik's Cube Solver Library
//!
//! Near-optimal solving of the 3x3x3 Rubik's Cube with Kociemba's
//! two-phase algorithm. Phase 1 searches the cube into the G1 subgroup
//! (oriented pieces, middle-slice edges home); phase 2 finishes it inside
//! G1. Both phases run IDA* over small coordinate spaces backed by
//! precomputed move tables, pruning tables, and endgame databases, so a
//! typical solve of 20 moves or fewer takes tens of milliseconds once the
//! tables exist.

pub mod coords;
pub mod cube;
pub mod error;
pub mod moves;
pub mod persistence;
pub mod render;
pub mod solver;
pub mod tables;
