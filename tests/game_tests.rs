use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    random_placement, solve, solve_probabilistic, Cell, Grid, HuntAndTarget, Probabilistic,
    ShipCell, ShipSpec, Shot, SolveStatus, FLEET, MAX_SOLVE_ITERATIONS, TOTAL_SHIP_CELLS,
};

fn middle_row_board() -> (Grid, [ShipSpec; 1]) {
    let spec = ShipSpec::new(1, 3);
    let grid = Grid::new(3)
        .place_region((0, 1), (3, 2), Cell::Ship(ShipCell::intact(spec)))
        .unwrap();
    (grid, [spec])
}

#[test]
fn test_probabilistic_solve_sequence() {
    let (grid, fleet) = middle_row_board();
    let mut turns = Vec::new();
    let report = solve(grid, &mut Probabilistic::new(&fleet), MAX_SOLVE_ITERATIONS, |turn| {
        turns.push((turn.target, turn.outcome));
    })
    .unwrap();

    assert_eq!(
        turns,
        vec![
            ((2, 2), Shot::Miss),
            ((1, 1), Shot::Hit),
            ((1, 2), Shot::Miss),
            ((2, 1), Shot::Hit),
            ((0, 1), Shot::Sunk(1)),
        ]
    );
    assert_eq!(report.status, SolveStatus::Solved);
    assert_eq!(report.shots, 5);
    assert_eq!(report.hits, 3);
    assert!(report.grid.is_fleet_sunk());
}

#[test]
fn test_hunt_and_target_solve_sequence() {
    let (grid, _) = middle_row_board();
    let mut targets = Vec::new();
    let report = solve(grid, &mut HuntAndTarget, MAX_SOLVE_ITERATIONS, |turn| {
        targets.push(turn.target);
    })
    .unwrap();

    assert_eq!(targets, vec![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(report.status, SolveStatus::Solved);
    assert_eq!(report.hits, 3);
}

#[test]
fn test_iteration_cap() {
    let (grid, fleet) = middle_row_board();
    let report = solve(grid, &mut Probabilistic::new(&fleet), 2, |_| {}).unwrap();
    assert_eq!(report.status, SolveStatus::IterationLimit);
    assert_eq!(report.shots, 2);
    assert!(!report.grid.is_fleet_sunk());
}

#[test]
fn test_cap_on_final_sinking_shot_reports_solved() {
    let (grid, fleet) = middle_row_board();
    let report = solve(grid, &mut Probabilistic::new(&fleet), 5, |_| {}).unwrap();
    assert_eq!(report.shots, 5);
    assert!(report.grid.is_fleet_sunk());
    assert_eq!(report.status, SolveStatus::Solved);
}

#[test]
fn test_exhausted_when_strategy_knows_no_ships() {
    let (grid, _) = middle_row_board();
    let report = solve(grid.clone(), &mut Probabilistic::new(&[]), 10, |_| {}).unwrap();
    assert_eq!(report.status, SolveStatus::Exhausted);
    assert_eq!(report.shots, 0);
    assert_eq!(report.grid, grid);
}

#[test]
fn test_full_fleet_is_sunk() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = random_placement(&Grid::new(5), &FLEET, &mut rng).unwrap();
    let report = solve_probabilistic(board, &FLEET).unwrap();
    assert_eq!(report.status, SolveStatus::Solved);
    assert_eq!(report.hits, TOTAL_SHIP_CELLS);
    assert!(report.shots <= 25);
}
