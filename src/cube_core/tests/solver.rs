use cube_core::{
    Color, DEFAULT_SCRAMBLE_LENGTH, Face, FaceletCube, MoveSequence, Phase, SolveError, Solver,
    apply_moves, scramble,
};
use itertools::Itertools;

#[test_log::test]
fn boundaries_are_consistent_on_scrambled_cubes() {
    for seed in 0..20 {
        let mut cube = FaceletCube::solved();
        let mut rng = fastrand::Rng::with_seed(seed);
        scramble(&mut cube, DEFAULT_SCRAMBLE_LENGTH, &mut rng);
        let scrambled = cube;

        let solution = Solver::new().solve(&mut cube).unwrap();
        let boundaries = solution.boundaries();

        assert!(boundaries.iter().tuple_windows().all(|(a, b)| a <= b));
        assert_eq!(boundaries[6], solution.len());
        assert_eq!(
            solution.phases().map(|(_, moves)| moves.len()).sum::<usize>(),
            solution.len()
        );

        // The returned moves are exactly what happened to the cube
        let mut replayed = scrambled;
        apply_moves(&mut replayed, solution.moves());
        assert_eq!(replayed, cube);
    }
}

#[test_log::test]
fn phases_see_the_cube_left_by_the_previous_phase() {
    let solver = Solver::new().with_phase(Phase::YellowCross, |cube: &mut FaceletCube| {
        // The built-in white cross has already fixed the up-front edge
        assert_eq!(cube.get(Face::U, 7), Some(Color::White));
        MoveSequence::new()
    });

    let mut cube = FaceletCube::solved();
    apply_moves(&mut cube, &"F".parse::<MoveSequence>().unwrap());
    apply_moves(&mut cube, &"F".parse::<MoveSequence>().unwrap());
    apply_moves(&mut cube, &"F".parse::<MoveSequence>().unwrap());

    let solution = solver.solve(&mut cube).unwrap();
    assert_eq!(solution.phase_moves(Phase::WhiteCross).len(), 1);
    assert!(cube.is_solved());
}

#[test_log::test]
fn solve_reports_why_it_cannot_start() {
    let mut empty = FaceletCube::new();
    assert_eq!(
        Solver::new().solve(&mut empty),
        Err(SolveError::Incomplete { unassigned: 54 })
    );

    let mut monochrome = FaceletCube::new();
    for face in Face::ALL {
        monochrome.set_face(face, [Some(Color::Yellow); 9]);
    }
    let before = monochrome;
    let err = Solver::new().solve(&mut monochrome).unwrap_err();
    assert!(matches!(err, SolveError::InvalidColorDistribution { .. }));
    assert!(err.to_string().contains("yellow: 54"));
    assert_eq!(monochrome, before);
}
