use log::{debug, info};
use thiserror::Error;

use crate::{
    engine::apply_move,
    face::{Color, Face},
    facelets::FaceletCube,
    moves::{Move, MoveSequence, Turn},
    solution::{Phase, Solution, SolutionRecorder},
    start, success,
    validate::{ColorCounts, validate},
    working,
};

/// Why a solve could not start. The cube is left untouched in both cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Please fill in all cube pieces before solving ({unassigned} unassigned)")]
    Incomplete { unassigned: usize },
    #[error("Invalid cube configuration, every color must appear exactly 9 times ({counts})")]
    InvalidColorDistribution { counts: ColorCounts },
}

/// One stage of a solve.
///
/// A phase looks at the cube, turns it through the move engine, and returns
/// the moves it made in the order it made them.
pub trait SolvePhase {
    fn solve(&self, cube: &mut FaceletCube) -> MoveSequence;
}

impl<F: Fn(&mut FaceletCube) -> MoveSequence> SolvePhase for F {
    fn solve(&self, cube: &mut FaceletCube) -> MoveSequence {
        self(cube)
    }
}

/// Runs the seven phases in order over a validated cube.
pub struct Solver {
    phases: [Box<dyn SolvePhase>; 7],
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            phases: Phase::ALL.map(|phase| -> Box<dyn SolvePhase> {
                match phase {
                    Phase::WhiteCross => Box::new(white_cross),
                    _ => Box::new(no_moves),
                }
            }),
        }
    }
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the implementation of one phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase, implementation: impl SolvePhase + 'static) -> Self {
        self.phases[phase.index()] = Box::new(implementation);
        self
    }

    /// Validate `cube`, then run every phase on it in order.
    ///
    /// # Errors
    ///
    /// If the cube is incomplete or its color counts are wrong. Validation
    /// happens before any move, so on error `cube` is unchanged.
    pub fn solve(&self, cube: &mut FaceletCube) -> Result<Solution, SolveError> {
        validate(cube)?;

        info!(start!("Solving"));

        let mut recorder = SolutionRecorder::new();
        for (phase, implementation) in Phase::ALL.into_iter().zip(&self.phases) {
            debug!(working!("Running phase {}"), phase);
            let moves = implementation.solve(cube);
            debug!("{phase}: {} moves", moves.len());
            recorder.record(phase, &moves);
        }

        let solution = recorder.finish();
        info!(success!("Solved in {} moves"), solution.len());
        Ok(solution)
    }
}

fn apply_recorded(cube: &mut FaceletCube, moves: &mut MoveSequence, move_: Move) {
    apply_move(cube, move_);
    moves.push(move_);
}

/// Placeholder white cross: nudge the front face once when the sticker on
/// the up-front edge is not white.
fn white_cross(cube: &mut FaceletCube) -> MoveSequence {
    let mut moves = MoveSequence::new();

    if cube.get(Face::U, 7) != Some(Color::White) {
        apply_recorded(cube, &mut moves, Move::new(Face::F, Turn::Clockwise));
    }

    moves
}

fn no_moves(_: &mut FaceletCube) -> MoveSequence {
    MoveSequence::new()
}
