//! Applies face turns to a [`FaceletCube`].
//!
//! A turn does two things: it rotates the nine stickers of the turning face
//! and it carries the four three-sticker bands that border that face around
//! to the next neighbor. Both halves are read into a snapshot before any
//! slot is written, so a move is never observable half-applied.

use log::trace;

use crate::{
    face::Face,
    facelets::{Facelet, FaceletCube, SLOTS_PER_FACE},
    moves::Move,
};

/// `GRID_SOURCES[q][i]` is the slot whose sticker lands in slot `i` after
/// `q` clockwise quarter turns of a face's own grid.
///
/// Clockwise cycles corners 0→2→8→6 and edges 1→5→7→3; the center never
/// moves.
const GRID_SOURCES: [[usize; SLOTS_PER_FACE]; 4] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line {
    Row(usize),
    Column(usize),
}

/// Three stickers of a neighboring face that border the turning face.
///
/// `reversed` says whether the row or column is walked backwards, so that
/// the slots come out in clockwise order around the turning face.
#[derive(Clone, Copy, Debug)]
struct Band {
    face: Face,
    line: Line,
    reversed: bool,
}

impl Band {
    const fn new(face: Face, line: Line, reversed: bool) -> Self {
        Band {
            face,
            line,
            reversed,
        }
    }

    const fn slots(self) -> [usize; 3] {
        let [a, b, c] = match self.line {
            Line::Row(row) => [row * 3, row * 3 + 1, row * 3 + 2],
            Line::Column(column) => [column, column + 3, column + 6],
        };
        if self.reversed { [c, b, a] } else { [a, b, c] }
    }
}

/// For every face (indexed like `Face::ALL`), the four bands that border
/// it, listed clockwise as seen looking at that face from outside the cube.
/// Each band's slots also run clockwise, so a clockwise quarter turn moves
/// slot `j` of band `k` into slot `j` of band `k + 1`.
///
/// The shared edges, in the net layout of [`crate::facelets`]:
///
/// - U: top row of B, R, F and L, each read right to left.
/// - R: right column of U and D and F read upwards, left column of B read
///   downwards.
/// - F: bottom row of U left to right, left column of R downwards, top row
///   of D right to left, right column of L upwards.
/// - D: bottom row of F, R, B and L, each read left to right.
/// - L: left column of U, F and D read downwards, right column of B read
///   upwards.
/// - B: top row of U right to left, left column of L downwards, bottom row
///   of D left to right, right column of R upwards.
const ADJACENT_BANDS: [[Band; 4]; 6] = {
    use Line::{Column, Row};

    let bands = [
        // U
        [
            Band::new(Face::B, Row(0), true),
            Band::new(Face::R, Row(0), true),
            Band::new(Face::F, Row(0), true),
            Band::new(Face::L, Row(0), true),
        ],
        // R
        [
            Band::new(Face::U, Column(2), true),
            Band::new(Face::B, Column(0), false),
            Band::new(Face::D, Column(2), true),
            Band::new(Face::F, Column(2), true),
        ],
        // F
        [
            Band::new(Face::U, Row(2), false),
            Band::new(Face::R, Column(0), false),
            Band::new(Face::D, Row(0), true),
            Band::new(Face::L, Column(2), true),
        ],
        // D
        [
            Band::new(Face::F, Row(2), false),
            Band::new(Face::R, Row(2), false),
            Band::new(Face::B, Row(2), false),
            Band::new(Face::L, Row(2), false),
        ],
        // L
        [
            Band::new(Face::U, Column(0), false),
            Band::new(Face::F, Column(0), false),
            Band::new(Face::D, Column(0), false),
            Band::new(Face::B, Column(2), true),
        ],
        // B
        [
            Band::new(Face::U, Row(0), true),
            Band::new(Face::L, Column(0), false),
            Band::new(Face::D, Row(2), false),
            Band::new(Face::R, Column(2), true),
        ],
    ];

    // A turning face never borders itself or its opposite
    let mut i = 0;
    while i < bands.len() {
        let mut k = 0;
        while k < 4 {
            let neighbor = bands[i][k].face as usize;
            assert!(neighbor != i);
            assert!(neighbor != Face::ALL[i].opposite() as usize);
            k += 1;
        }
        i += 1;
    }

    bands
};

/// Apply a single face turn in place.
pub fn apply_move(cube: &mut FaceletCube, move_: Move) {
    trace!("Applying {move_}");

    let quarters = move_.turn.clockwise_quarters();
    rotate_grid(cube.face_mut(move_.face), quarters);
    cycle_bands(cube, ADJACENT_BANDS[move_.face.index()], quarters);
}

/// Apply each move in order.
pub fn apply_moves(cube: &mut FaceletCube, moves: &[Move]) {
    for &move_ in moves {
        apply_move(cube, move_);
    }
}

fn rotate_grid(grid: &mut [Facelet; SLOTS_PER_FACE], quarters: usize) {
    let before = *grid;
    let sources = &GRID_SOURCES[quarters % 4];
    *grid = std::array::from_fn(|i| before[sources[i]]);
}

fn cycle_bands(cube: &mut FaceletCube, bands: [Band; 4], quarters: usize) {
    let before = bands.map(|band| band.slots().map(|slot| cube.get(band.face, slot)));

    for (k, stickers) in before.iter().enumerate() {
        let dest = bands[(k + quarters) % 4];
        for (slot, &sticker) in dest.slots().into_iter().zip(stickers) {
            cube.set(dest.face, slot, sticker);
        }
    }
}
