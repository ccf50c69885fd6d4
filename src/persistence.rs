//! File I/O for saving and loading the precomputed tables.
//!
//! All files are little-endian:
//! - move table: `N x 18` u16 entries, row-major
//! - pruning table: `N` bytes
//! - endgame database:
//!   - u64: entry count
//!   - repeat per entry:
//!     - u64: packed coordinate key
//!     - u64: path length `L`
//!     - `L` bytes: move ordinals in the range 0..=17
//!
//! Loaders validate sizes and ranges; any violation is an `InvalidData`
//! error, which the table manager treats the same as a missing file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::moves::Move;

/// Upper bound on a plausible endgame entry count, to reject garbage
/// headers before reserving memory.
const MAX_ENDGAME_ENTRIES: u64 = 1 << 26;

/// Saves a move table as rows of little-endian u16 entries.
pub fn save_move_table(path: &Path, table: &[[u16; 18]]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for row in table {
        for &entry in row {
            file.write_all(&entry.to_le_bytes())?;
        }
    }
    file.flush()
}

/// Loads a move table, requiring exactly `rows` rows.
pub fn load_move_table(path: &Path, rows: usize) -> io::Result<Vec<[u16; 18]>> {
    let file = File::open(path)?;
    let expected = (rows * 18 * 2) as u64;
    if file.metadata()?.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "move table file has the wrong size",
        ));
    }

    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 2];
    let mut table = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut row = [0u16; 18];
        for entry in &mut row {
            reader.read_exact(&mut buffer)?;
            *entry = u16::from_le_bytes(buffer);
        }
        table.push(row);
    }
    Ok(table)
}

/// Saves a pruning table as raw bytes.
pub fn save_pruning_table(path: &Path, table: &[u8]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(table)?;
    file.flush()
}

/// Loads a pruning table, requiring exactly `len` bytes.
pub fn load_pruning_table(path: &Path, len: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    if file.metadata()?.len() != len as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "pruning table file has the wrong size",
        ));
    }
    let mut table = vec![0u8; len];
    BufReader::new(file).read_exact(&mut table)?;
    Ok(table)
}

/// Saves an endgame database as length-prefixed records.
pub fn save_endgame_db(path: &Path, db: &FxHashMap<u64, Vec<Move>>) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&(db.len() as u64).to_le_bytes())?;
    for (&key, moves) in db {
        file.write_all(&key.to_le_bytes())?;
        file.write_all(&(moves.len() as u64).to_le_bytes())?;
        for &m in moves {
            file.write_all(&[m.index() as u8])?;
        }
    }
    file.flush()
}

/// Loads an endgame database, validating counts and move ordinals.
pub fn load_endgame_db(path: &Path) -> io::Result<FxHashMap<u64, Vec<Move>>> {
    let mut reader = BufReader::new(File::open(path)?);

    let count = read_u64(&mut reader)?;
    if count > MAX_ENDGAME_ENTRIES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "endgame database entry count is implausible",
        ));
    }

    let mut db = FxHashMap::default();
    db.reserve(count as usize);
    let mut byte = [0u8; 1];
    for _ in 0..count {
        let key = read_u64(&mut reader)?;
        let length = read_u64(&mut reader)?;
        // generation depth bounds keep real paths far below this
        if length > 32 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "endgame path length is implausible",
            ));
        }
        let mut moves = Vec::with_capacity(length as usize);
        for _ in 0..length {
            reader.read_exact(&mut byte)?;
            let m = Move::from_index(byte[0]).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "invalid move ordinal")
            })?;
            moves.push(m);
        }
        db.insert(key, moves);
    }

    if reader.read(&mut byte)? != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "trailing bytes after the last endgame record",
        ));
    }
    Ok(db)
}

fn read_u64(reader: &mut impl Read) -> io::Result<u64> {
    let mut buffer = [0u8; 8];
    reader.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}
