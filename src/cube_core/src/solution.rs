use std::fmt::Display;

use crate::moves::{Move, MoveSequence};

/// The stages of a layer-by-layer solve, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    WhiteCross,
    WhiteCorners,
    MiddleLayer,
    YellowCross,
    OrientEdges,
    PositionCorners,
    OrientCorners,
}

impl Phase {
    pub const ALL: [Self; 7] = {
        use Phase::*;
        let v = [
            WhiteCross,
            WhiteCorners,
            MiddleLayer,
            YellowCross,
            OrientEdges,
            PositionCorners,
            OrientCorners,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::WhiteCross => "White cross",
            Phase::WhiteCorners => "White corners",
            Phase::MiddleLayer => "Middle layer",
            Phase::YellowCross => "Yellow cross",
            Phase::OrientEdges => "Orient edges",
            Phase::PositionCorners => "Position corners",
            Phase::OrientCorners => "Orient corners",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Collects the moves of each phase as the solver produces them.
///
/// Phases must be recorded in `Phase::ALL` order; a phase that is never
/// recorded is treated as empty when the recorder is finished.
#[derive(Debug, Clone, Default)]
pub struct SolutionRecorder {
    moves: MoveSequence,
    boundaries: Vec<usize>,
}

impl SolutionRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase the next call to `record` is expected to be for.
    #[must_use]
    pub fn next_phase(&self) -> Option<Phase> {
        Phase::ALL.get(self.boundaries.len()).copied()
    }

    /// Append the moves of `phase`, closing off every phase before it.
    ///
    /// # Panics
    ///
    /// Panics if `phase` comes before a phase that was already recorded.
    pub fn record(&mut self, phase: Phase, moves: &[Move]) {
        assert!(
            self.boundaries.len() <= phase.index(),
            "{phase} recorded out of order"
        );

        while self.boundaries.len() < phase.index() {
            self.boundaries.push(self.moves.len());
        }

        self.moves.extend_from_slice(moves);
        self.boundaries.push(self.moves.len());
    }

    #[must_use]
    pub fn finish(mut self) -> Solution {
        while self.boundaries.len() < Phase::ALL.len() {
            self.boundaries.push(self.moves.len());
        }

        let mut boundaries = [0; 7];
        boundaries.copy_from_slice(&self.boundaries);

        Solution {
            moves: self.moves,
            boundaries,
        }
    }
}

/// All the moves of a solve, split into phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: MoveSequence,
    /// `boundaries[i]` is the index one past the last move of `Phase::ALL[i]`.
    boundaries: [usize; 7],
}

impl Solution {
    #[must_use]
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn boundaries(&self) -> &[usize; 7] {
        &self.boundaries
    }

    #[must_use]
    pub fn phase_moves(&self, phase: Phase) -> &[Move] {
        let start = match phase.index() {
            0 => 0,
            i => self.boundaries[i - 1],
        };
        &self.moves[start..self.boundaries[phase.index()]]
    }

    pub fn phases(&self) -> impl Iterator<Item = (Phase, &[Move])> + '_ {
        Phase::ALL
            .into_iter()
            .map(move |phase| (phase, self.phase_moves(phase)))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Cube is already solved!");
        }

        writeln!(f, "Solution ({} moves): {}", self.len(), self.moves)?;
        write!(f, "Move breakdown:")?;
        for (i, (phase, moves)) in self.phases().enumerate() {
            write!(f, "\n{}. {phase}:", i + 1)?;
            for move_ in moves {
                write!(f, " {move_}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(s: &str) -> MoveSequence {
        s.parse().unwrap()
    }

    #[test]
    fn boundaries_follow_real_lengths() {
        let mut recorder = SolutionRecorder::new();
        recorder.record(Phase::WhiteCross, &moves("F R"));
        recorder.record(Phase::WhiteCorners, &moves(""));
        recorder.record(Phase::MiddleLayer, &moves("U R U' R'"));
        let solution = recorder.finish();

        assert_eq!(solution.boundaries(), &[2, 2, 6, 6, 6, 6, 6]);
        assert_eq!(solution.len(), 6);
        assert_eq!(solution.phase_moves(Phase::WhiteCross), &*moves("F R"));
        assert!(solution.phase_moves(Phase::WhiteCorners).is_empty());
        assert_eq!(
            solution.phase_moves(Phase::MiddleLayer),
            &*moves("U R U' R'")
        );
        assert!(solution.phase_moves(Phase::OrientCorners).is_empty());
    }

    #[test]
    fn skipped_phases_are_empty() {
        let mut recorder = SolutionRecorder::new();
        recorder.record(Phase::YellowCross, &moves("F"));
        assert_eq!(recorder.next_phase(), Some(Phase::OrientEdges));
        recorder.record(Phase::OrientCorners, &moves("R2 D"));
        assert_eq!(recorder.next_phase(), None);

        let solution = recorder.finish();
        assert_eq!(solution.boundaries(), &[0, 0, 0, 1, 1, 1, 3]);
        assert_eq!(solution.phase_moves(Phase::YellowCross), &*moves("F"));
        assert_eq!(solution.phase_moves(Phase::OrientCorners), &*moves("R2 D"));
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn out_of_order_panics() {
        let mut recorder = SolutionRecorder::new();
        recorder.record(Phase::MiddleLayer, &moves("F"));
        recorder.record(Phase::WhiteCross, &moves("F"));
    }

    #[test]
    fn display() {
        let solution = SolutionRecorder::new().finish();
        assert_eq!(solution.boundaries(), &[0; 7]);
        assert_eq!(solution.to_string(), "Cube is already solved!");

        let mut recorder = SolutionRecorder::new();
        recorder.record(Phase::WhiteCross, &moves("F"));
        recorder.record(Phase::OrientEdges, &moves("R U"));
        assert_eq!(
            recorder.finish().to_string(),
            "Solution (3 moves): F R U\n\
             Move breakdown:\n\
             1. White cross: F\n\
             2. White corners:\n\
             3. Middle layer:\n\
             4. Yellow cross:\n\
             5. Orient edges: R U\n\
             6. Position corners:\n\
             7. Orient corners:"
        );
    }
}
