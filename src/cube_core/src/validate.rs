//! Checks run before solving.
//!
//! Plausibility only counts colors. A cube that passes can still be
//! impossible to reach by turning (a flipped edge, a twisted corner, two
//! swapped pieces); telling those apart needs piece-level analysis that this
//! crate does not do.

use std::fmt::Display;

use itertools::Itertools;

use crate::{face::Color, facelets::FaceletCube, solver::SolveError};

/// How many slots hold each color, plus how many are unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCounts {
    /// Indexed like `Color::ALL`.
    pub colors: [usize; 6],
    pub unassigned: usize,
}

impl ColorCounts {
    #[must_use]
    pub fn of(cube: &FaceletCube) -> Self {
        let mut counts = ColorCounts::default();
        for (.., facelet) in cube.iter() {
            match facelet {
                Some(color) => counts.colors[color.index()] += 1,
                None => counts.unassigned += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.colors[color.index()]
    }

    /// Colors that do not appear exactly nine times, with their counts.
    pub fn uneven(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.count(color)))
            .filter(|&(_, count)| count != 9)
    }
}

impl Display for ColorCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Color::ALL
                .iter()
                .map(|&color| format!("{color}: {}", self.count(color)))
                .join(", ")
        )?;
        if self.unassigned > 0 {
            write!(f, ", unassigned: {}", self.unassigned)?;
        }
        Ok(())
    }
}

/// Every slot has a color.
#[must_use]
pub fn is_complete(cube: &FaceletCube) -> bool {
    cube.iter().all(|(.., facelet)| facelet.is_some())
}

/// Each of the six colors appears exactly nine times.
#[must_use]
pub fn is_plausible(cube: &FaceletCube) -> bool {
    ColorCounts::of(cube).uneven().next().is_none()
}

/// Completeness first, then plausibility.
///
/// # Errors
///
/// `SolveError::Incomplete` if any slot is unassigned, otherwise
/// `SolveError::InvalidColorDistribution` if any color count is not nine.
pub fn validate(cube: &FaceletCube) -> Result<(), SolveError> {
    let counts = ColorCounts::of(cube);

    if counts.unassigned > 0 {
        return Err(SolveError::Incomplete {
            unassigned: counts.unassigned,
        });
    }

    if counts.uneven().next().is_some() {
        return Err(SolveError::InvalidColorDistribution { counts });
    }

    Ok(())
}
