//! Face turns and sequences of them, in the usual `F`, `F'`, `F2` notation.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::face::Face;

/// How far a face is turned. `CounterClockwise` is written with a prime and
/// `Double` is a half turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// The signed turn amount: +1, -1 or +2.
    #[must_use]
    pub const fn amount(self) -> i8 {
        match self {
            Turn::Clockwise => 1,
            Turn::CounterClockwise => -1,
            Turn::Double => 2,
        }
    }

    /// The number of clockwise quarter turns this is equivalent to.
    #[must_use]
    pub const fn clockwise_quarters(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

impl TryFrom<i8> for Turn {
    type Error = InvalidMoveError;

    fn try_from(amount: i8) -> Result<Self, Self::Error> {
        match amount {
            1 => Ok(Turn::Clockwise),
            -1 => Ok(Turn::CounterClockwise),
            2 => Ok(Turn::Double),
            _ => Err(InvalidMoveError::TurnAmount(amount)),
        }
    }
}

/// Rejected raw move input. Nothing is applied when one of these is
/// produced.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown face `{0}`, expected one of U D F B L R")]
    Face(char),
    #[error("Invalid turn amount {0}, expected 1, -1 or 2")]
    TurnAmount(i8),
    #[error("Invalid move `{0}`, expected a face letter optionally followed by ' or 2")]
    Notation(String),
}

/// A single face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Build a move from a face letter and a signed turn amount.
    ///
    /// # Errors
    ///
    /// If the letter is not one of the six faces or the amount is not one of
    /// +1, -1 or +2.
    pub fn try_from_parts(face: char, amount: i8) -> Result<Self, InvalidMoveError> {
        let face = Face::from_letter(face).ok_or(InvalidMoveError::Face(face))?;
        Ok(Self::new(face, Turn::try_from(amount)?))
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }

    /// All 18 moves, grouped by face.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .flat_map(|face| Turn::ALL.into_iter().map(move |turn| Move::new(face, turn)))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(InvalidMoveError::Empty)?;
        let face = Face::from_letter(letter).ok_or(InvalidMoveError::Face(letter))?;

        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Double,
            _ => return Err(InvalidMoveError::Notation(s.to_owned())),
        };

        Ok(Move::new(face, turn))
    }
}

/// An ordered list of moves, used for scrambles and solutions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        MoveSequence(self.iter().rev().map(|m| m.inverse()).collect())
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = InvalidMoveError;

    /// Whitespace separated moves. An empty string is the empty sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for m in Move::all() {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
        assert_eq!(Move::all().count(), 18);

        assert_eq!(
            "R'".parse::<Move>(),
            Ok(Move::new(Face::R, Turn::CounterClockwise))
        );
        assert_eq!("".parse::<Move>(), Err(InvalidMoveError::Empty));
        assert_eq!("X".parse::<Move>(), Err(InvalidMoveError::Face('X')));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(InvalidMoveError::Notation("R3".to_owned()))
        );
        assert_eq!(
            "R2'".parse::<Move>(),
            Err(InvalidMoveError::Notation("R2'".to_owned()))
        );
    }

    #[test]
    fn raw_parts() {
        assert_eq!(
            Move::try_from_parts('F', 2),
            Ok(Move::new(Face::F, Turn::Double))
        );
        assert_eq!(
            Move::try_from_parts('F', -2),
            Err(InvalidMoveError::TurnAmount(-2))
        );
        assert_eq!(
            Move::try_from_parts('f', 1),
            Err(InvalidMoveError::Face('f'))
        );
        assert_eq!(
            Move::try_from_parts('B', 0),
            Err(InvalidMoveError::TurnAmount(0))
        );
    }

    #[test]
    fn sequence_inverse() {
        let seq: MoveSequence = "F R U R' U' F'".parse().unwrap();
        assert_eq!(seq.inverse().to_string(), "F U R U' R' F'");
        assert_eq!(seq.inverse().inverse(), seq);

        let doubles: MoveSequence = "U2 R".parse().unwrap();
        assert_eq!(doubles.inverse().to_string(), "R' U2");

        assert!("".parse::<MoveSequence>().unwrap().is_empty());
        assert!("R Q".parse::<MoveSequence>().is_err());
    }

    #[test]
    fn turn_amounts() {
        for turn in Turn::ALL {
            assert_eq!(Turn::try_from(turn.amount()), Ok(turn));
            assert_eq!(
                (turn.clockwise_quarters() + turn.inverse().clockwise_quarters()) % 4,
                0
            );
        }
    }
}
