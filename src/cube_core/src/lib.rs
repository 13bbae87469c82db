#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]

//! Facelet-level model of the 3x3x3 cube.
//!
//! The cube is stored as 54 stickers and every face turn is applied as a
//! permutation of those stickers. Nothing in this crate performs I/O; callers
//! feed colors in, request moves, and read the stickers back out.

pub mod engine;
pub mod face;
pub mod facelets;
pub mod moves;
pub mod scramble;
pub mod solution;
pub mod solver;
pub mod validate;

pub use engine::{apply_move, apply_moves};
pub use face::{Color, Face, ParseColorError};
pub use facelets::{FaceletCube, ParseFaceletsError};
pub use moves::{InvalidMoveError, Move, MoveSequence, Turn};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, scramble};
pub use solution::{Phase, Solution, SolutionRecorder};
pub use solver::{SolveError, SolvePhase, Solver};
pub use validate::{ColorCounts, is_complete, is_plausible, validate};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
