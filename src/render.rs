//! Flat-net terminal rendering of a cube state.
//!
//! Sticker colors follow the standard white-top, red-front orientation.
//! The net unfolds as U on top, the L F R B band in the middle, and D at
//! the bottom, with each sticker drawn as a colored background block.

use colored::{ColoredString, Colorize};

use crate::cube::{
    Cube, BL, BR, DB, DBL, DBR, DF, DFL, DFR, DL, DR, FL, FR, UB, UBL, UBR, UF, UFL, UFR, UL, UR,
};
use crate::moves::Face;

/// The six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    /// Center color of a face.
    pub fn of_face(face: Face) -> Color {
        match face {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Red,
            Face::B => Color::Orange,
            Face::L => Color::Green,
            Face::R => Color::Blue,
        }
    }

    fn block(self) -> ColoredString {
        match self {
            Color::White => "  ".on_white(),
            Color::Yellow => "  ".on_yellow(),
            Color::Red => "  ".on_red(),
            Color::Orange => "  ".on_truecolor(255, 135, 0),
            Color::Green => "  ".on_green(),
            Color::Blue => "  ".on_blue(),
        }
    }
}

/// Colors of each corner piece in the solved state. The first entry is the
/// U/D-face sticker; the rest follow the twist direction.
const CORNER_COLORS: [[Color; 3]; 8] = [
    [Color::White, Color::Red, Color::Green],     // UFL
    [Color::White, Color::Green, Color::Orange],  // UBL
    [Color::White, Color::Orange, Color::Blue],   // UBR
    [Color::White, Color::Blue, Color::Red],      // UFR
    [Color::Yellow, Color::Green, Color::Red],    // DFL
    [Color::Yellow, Color::Orange, Color::Green], // DBL
    [Color::Yellow, Color::Blue, Color::Orange],  // DBR
    [Color::Yellow, Color::Red, Color::Blue],     // DFR
];

/// Colors of each edge piece in the solved state.
const EDGE_COLORS: [[Color; 2]; 12] = [
    [Color::White, Color::Red],     // UF
    [Color::White, Color::Green],   // UL
    [Color::White, Color::Orange],  // UB
    [Color::White, Color::Blue],    // UR
    [Color::Yellow, Color::Red],    // DF
    [Color::Yellow, Color::Green],  // DL
    [Color::Yellow, Color::Orange], // DB
    [Color::Yellow, Color::Blue],   // DR
    [Color::Red, Color::Green],     // FL
    [Color::Orange, Color::Green],  // BL
    [Color::Orange, Color::Blue],   // BR
    [Color::Red, Color::Blue],      // FR
];

/// The color showing at sticker position `sticker` of the given corner
/// slot, accounting for the piece's twist.
pub fn corner_sticker(cube: &Cube, slot: usize, sticker: u8) -> Color {
    let corner = cube.corners()[slot];
    let index = (sticker + 3 - corner.orientation) % 3;
    CORNER_COLORS[corner.piece as usize][index as usize]
}

/// The color showing at sticker position `sticker` of the given edge slot.
pub fn edge_sticker(cube: &Cube, slot: usize, sticker: u8) -> Color {
    let edge = cube.edges()[slot];
    let index = (sticker + edge.orientation) % 2;
    EDGE_COLORS[edge.piece as usize][index as usize]
}

/// The nine sticker colors of a face, row by row from its top-left.
pub fn face_colors(cube: &Cube, face: Face) -> [Color; 9] {
    let center = Color::of_face(face);
    match face {
        Face::U => [
            corner_sticker(cube, UBL, 0),
            edge_sticker(cube, UB, 0),
            corner_sticker(cube, UBR, 0),
            edge_sticker(cube, UL, 0),
            center,
            edge_sticker(cube, UR, 0),
            corner_sticker(cube, UFL, 0),
            edge_sticker(cube, UF, 0),
            corner_sticker(cube, UFR, 0),
        ],
        Face::D => [
            corner_sticker(cube, DFL, 0),
            edge_sticker(cube, DF, 0),
            corner_sticker(cube, DFR, 0),
            edge_sticker(cube, DL, 0),
            center,
            edge_sticker(cube, DR, 0),
            corner_sticker(cube, DBL, 0),
            edge_sticker(cube, DB, 0),
            corner_sticker(cube, DBR, 0),
        ],
        Face::F => [
            corner_sticker(cube, UFL, 1),
            edge_sticker(cube, UF, 1),
            corner_sticker(cube, UFR, 2),
            edge_sticker(cube, FL, 0),
            center,
            edge_sticker(cube, FR, 0),
            corner_sticker(cube, DFL, 2),
            edge_sticker(cube, DF, 1),
            corner_sticker(cube, DFR, 1),
        ],
        Face::B => [
            corner_sticker(cube, UBR, 1),
            edge_sticker(cube, UB, 1),
            corner_sticker(cube, UBL, 2),
            edge_sticker(cube, BR, 0),
            center,
            edge_sticker(cube, BL, 0),
            corner_sticker(cube, DBR, 2),
            edge_sticker(cube, DB, 1),
            corner_sticker(cube, DBL, 1),
        ],
        Face::L => [
            corner_sticker(cube, UBL, 1),
            edge_sticker(cube, UL, 1),
            corner_sticker(cube, UFL, 2),
            edge_sticker(cube, BL, 1),
            center,
            edge_sticker(cube, FL, 1),
            corner_sticker(cube, DBL, 2),
            edge_sticker(cube, DL, 1),
            corner_sticker(cube, DFL, 1),
        ],
        Face::R => [
            corner_sticker(cube, UFR, 1),
            edge_sticker(cube, UR, 1),
            corner_sticker(cube, UBR, 2),
            edge_sticker(cube, FR, 1),
            center,
            edge_sticker(cube, BR, 1),
            corner_sticker(cube, DFR, 2),
            edge_sticker(cube, DR, 1),
            corner_sticker(cube, DBR, 1),
        ],
    }
}

/// Renders the cube as an unfolded net with colored sticker blocks.
pub fn render(cube: &Cube) -> String {
    let u = face_colors(cube, Face::U);
    let d = face_colors(cube, Face::D);
    let f = face_colors(cube, Face::F);
    let b = face_colors(cube, Face::B);
    let l = face_colors(cube, Face::L);
    let r = face_colors(cube, Face::R);

    let mut out = String::new();
    for row in 0..3 {
        out.push_str("      ");
        push_row(&mut out, &u, row);
        out.push('\n');
    }
    out.push('\n');
    for row in 0..3 {
        push_row(&mut out, &l, row);
        push_row(&mut out, &f, row);
        push_row(&mut out, &r, row);
        push_row(&mut out, &b, row);
        out.push('\n');
    }
    out.push('\n');
    for row in 0..3 {
        out.push_str("      ");
        push_row(&mut out, &d, row);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, face: &[Color; 9], row: usize) {
    for &color in &face[row * 3..row * 3 + 3] {
        out.push_str(&color.block().to_string());
    }
}
