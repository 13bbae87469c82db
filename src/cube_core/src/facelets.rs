//! The 54-sticker state of the cube.
//!
//! Each face holds nine slots in row-major order as seen from outside the
//! cube in the usual net layout:
//!
//! ```text
//!           U0 U1 U2
//!           U3 U4 U5
//!           U6 U7 U8
//! L0 L1 L2  F0 F1 F2  R0 R1 R2  B0 B1 B2
//! L3 L4 L5  F3 F4 F5  R3 R4 R5  B3 B4 B5
//! L6 L7 L8  F6 F7 F8  R6 R7 R8  B6 B7 B8
//!           D0 D1 D2
//!           D3 D4 D5
//!           D6 D7 D8
//! ```

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::face::{Color, Face};

pub const SLOTS_PER_FACE: usize = 9;
pub const FACELET_COUNT: usize = SLOTS_PER_FACE * 6;

/// A sticker slot that has not been given a color yet is `None`.
pub type Facelet = Option<Color>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    faces: [[Facelet; SLOTS_PER_FACE]; 6],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFaceletsError {
    #[error("Expected 54 facelets but got {0}")]
    WrongLength(usize),
    #[error("Invalid facelet `{character}` at position {position}, expected one of URFDLB or `.`")]
    InvalidFacelet { character: char, position: usize },
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceletCube {
    /// A cube with every slot unassigned.
    #[must_use]
    pub const fn new() -> Self {
        FaceletCube {
            faces: [[None; SLOTS_PER_FACE]; 6],
        }
    }

    /// A cube with every face showing its home color.
    #[must_use]
    pub fn solved() -> Self {
        FaceletCube {
            faces: Face::ALL.map(|face| [Some(face.home_color()); SLOTS_PER_FACE]),
        }
    }

    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    #[must_use]
    pub fn get(&self, face: Face, index: usize) -> Facelet {
        self.faces[face.index()][index]
    }

    /// Assign a color to one slot. No validation happens here; see
    /// [`crate::validate`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn set(&mut self, face: Face, index: usize, color: Facelet) {
        self.faces[face.index()][index] = color;
    }

    pub fn reset_all(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Facelet; SLOTS_PER_FACE] {
        &self.faces[face.index()]
    }

    pub fn set_face(&mut self, face: Face, facelets: [Facelet; SLOTS_PER_FACE]) {
        self.faces[face.index()] = facelets;
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut [Facelet; SLOTS_PER_FACE] {
        &mut self.faces[face.index()]
    }

    /// Every face is uniform in its home color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            self.face(face)
                .iter()
                .all(|&facelet| facelet == Some(face.home_color()))
        })
    }

    /// Iterate over every slot as `(face, index, facelet)`.
    pub fn iter(&self) -> impl Iterator<Item = (Face, usize, Facelet)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self.face(face)
                .iter()
                .enumerate()
                .map(move |(index, &facelet)| (face, index, facelet))
        })
    }

    /// Number of slots whose color differs between the two cubes.
    #[must_use]
    pub fn diff_count(&self, other: &FaceletCube) -> usize {
        self.iter()
            .zip(other.iter())
            .filter(|((.., a), (.., b))| a != b)
            .count()
    }

    /// Render as a facelet string: faces in U R F D L B order, each sticker
    /// written as the letter of its color's home face, `.` for unassigned.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        self.iter()
            .map(|(.., facelet)| facelet.map_or('.', |color| color.home_face().letter()))
            .collect()
    }
}

impl FromStr for FaceletCube {
    type Err = ParseFaceletsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<Vec<_>>();

        if chars.len() != FACELET_COUNT {
            return Err(ParseFaceletsError::WrongLength(chars.len()));
        }

        let mut cube = FaceletCube::new();
        for (position, &character) in chars.iter().enumerate() {
            let facelet = match character {
                '.' | '-' => None,
                letter => Some(
                    Face::from_letter(letter.to_ascii_uppercase())
                        .ok_or(ParseFaceletsError::InvalidFacelet {
                            character,
                            position,
                        })?
                        .home_color(),
                ),
            };
            cube.faces[position / SLOTS_PER_FACE][position % SLOTS_PER_FACE] = facelet;
        }

        Ok(cube)
    }
}

impl Display for FaceletCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_facelet_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn new_is_unassigned() {
        let cube = FaceletCube::new();
        assert!(cube.iter().all(|(.., facelet)| facelet.is_none()));
        assert_eq!(cube.iter().count(), FACELET_COUNT);
        assert!(!cube.is_solved());
    }

    #[test]
    fn get_and_set() {
        let mut cube = FaceletCube::new();
        cube.set(Face::F, 4, Some(Color::Green));
        cube.set(Face::B, 8, Some(Color::Red));
        assert_eq!(cube.get(Face::F, 4), Some(Color::Green));
        assert_eq!(cube.get(Face::B, 8), Some(Color::Red));
        assert_eq!(cube.get(Face::B, 7), None);

        cube.set(Face::B, 8, None);
        assert_eq!(cube.get(Face::B, 8), None);
    }

    #[test]
    #[should_panic]
    fn out_of_range_slot_panics() {
        let mut cube = FaceletCube::new();
        cube.set(Face::U, 9, Some(Color::White));
    }

    #[test]
    fn reset_clears_everything() {
        let mut cube = FaceletCube::solved();
        cube.reset_all();
        assert_eq!(cube, FaceletCube::new());
    }

    #[test]
    fn facelet_string_round_trip() {
        let cube: FaceletCube = SOLVED.parse().unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube, FaceletCube::solved());
        assert_eq!(cube.to_facelet_string(), SOLVED);

        let partial = format!("{}.{}", &SOLVED[..10], &SOLVED[11..]);
        let cube: FaceletCube = partial.parse().unwrap();
        assert_eq!(cube.get(Face::R, 1), None);
        assert_eq!(cube.to_string(), partial);
    }

    #[test]
    fn facelet_string_ignores_whitespace() {
        let spaced = SOLVED
            .as_bytes()
            .chunks(9)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(spaced.parse::<FaceletCube>(), Ok(FaceletCube::solved()));
    }

    #[test]
    fn facelet_string_errors() {
        assert_eq!(
            "UUU".parse::<FaceletCube>(),
            Err(ParseFaceletsError::WrongLength(3))
        );

        let bad = format!("{}X{}", &SOLVED[..20], &SOLVED[21..]);
        assert_eq!(
            bad.parse::<FaceletCube>(),
            Err(ParseFaceletsError::InvalidFacelet {
                character: 'X',
                position: 20
            })
        );
    }
}
