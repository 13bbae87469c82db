use log::debug;

use crate::{
    engine::apply_move,
    face::Face,
    facelets::FaceletCube,
    moves::{Move, MoveSequence, Turn},
};

/// The number of moves in a scramble when the caller has no preference.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// The twelve quarter turns a scramble draws from. Half turns are left out
/// so a scramble can be undone one quarter turn at a time.
pub const QUARTER_TURNS: [Move; 12] = {
    let mut moves = [Move::new(Face::U, Turn::Clockwise); 12];

    let mut i = 0;
    while i < Face::ALL.len() {
        moves[i * 2] = Move::new(Face::ALL[i], Turn::Clockwise);
        moves[i * 2 + 1] = Move::new(Face::ALL[i], Turn::CounterClockwise);
        i += 1;
    }

    moves
};

/// Draw `move_count` quarter turns uniformly and independently, applying
/// each to `cube` as it is drawn. Returns the moves in the order applied.
///
/// Repeats are allowed, including a move directly followed by its inverse.
pub fn scramble(
    cube: &mut FaceletCube,
    move_count: usize,
    rng: &mut fastrand::Rng,
) -> MoveSequence {
    let mut moves = MoveSequence(Vec::with_capacity(move_count));

    for _ in 0..move_count {
        let move_ = QUARTER_TURNS[rng.usize(..QUARTER_TURNS.len())];
        apply_move(cube, move_);
        moves.push(move_);
    }

    debug!("Scrambled with {moves}");
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_pool() {
        assert!(QUARTER_TURNS.iter().all(|m| m.turn != Turn::Double));
        for m in Move::all().filter(|m| m.turn != Turn::Double) {
            assert_eq!(QUARTER_TURNS.iter().filter(|&&q| q == m).count(), 1);
        }
    }

    #[test]
    fn empty_scramble() {
        let mut cube = FaceletCube::solved();
        let moves = scramble(&mut cube, 0, &mut fastrand::Rng::with_seed(7));
        assert!(moves.is_empty());
        assert_eq!(cube, FaceletCube::solved());
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let mut a = FaceletCube::solved();
        let mut b = FaceletCube::solved();
        let moves_a = scramble(&mut a, 20, &mut fastrand::Rng::with_seed(42));
        let moves_b = scramble(&mut b, 20, &mut fastrand::Rng::with_seed(42));

        assert_eq!(moves_a.len(), 20);
        assert_eq!(moves_a, moves_b);
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_is_undone_by_its_inverse() {
        let mut cube = FaceletCube::solved();
        let moves = scramble(&mut cube, 50, &mut fastrand::Rng::with_seed(3));
        crate::engine::apply_moves(&mut cube, &moves.inverse());
        assert!(cube.is_solved());
    }
}
