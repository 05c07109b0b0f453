//! Driving a strategy against a ground-truth grid until it runs dry.

use log::{debug, info};

use crate::{
    common::{GridError, Shot},
    config::MAX_SOLVE_ITERATIONS,
    grid::Grid,
    ship::ShipSpec,
    strategy::{Probabilistic, Strategy, Turn},
};

/// Why the solve loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum SolveStatus {
    /// Every ship is sunk, whether or not the strategy was asked again.
    Solved,
    /// The strategy ran out of targets with ships still afloat.
    Exhausted,
    /// The iteration cap was reached with ships still afloat.
    IterationLimit,
}

/// Final state of a solve run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub grid: Grid,
    pub shots: usize,
    pub hits: usize,
    pub status: SolveStatus,
}

/// Repeatedly play `strategy` against `grid`, handing each turn to `on_turn`,
/// until the strategy returns no target or `max_iterations` shots were fired.
pub fn solve<S, F>(
    grid: Grid,
    strategy: &mut S,
    max_iterations: usize,
    mut on_turn: F,
) -> Result<SolveReport, GridError>
where
    S: Strategy + ?Sized,
    F: FnMut(&Turn),
{
    let mut grid = grid;
    let mut shots = 0;
    let mut hits = 0;
    while shots < max_iterations {
        let Some(turn) = strategy.play(&grid)? else {
            let status = if grid.is_fleet_sunk() {
                SolveStatus::Solved
            } else {
                SolveStatus::Exhausted
            };
            info!(
                "{}: {:?} after {} shots ({} hits)",
                strategy.name(),
                status,
                shots,
                hits
            );
            return Ok(SolveReport {
                grid,
                shots,
                hits,
                status,
            });
        };
        shots += 1;
        match turn.outcome {
            Shot::Miss => {}
            Shot::Hit => hits += 1,
            Shot::Sunk(id) => {
                hits += 1;
                info!("{}: sank ship {} on shot {}", strategy.name(), id, shots);
            }
        }
        debug!(
            "{}: shot {} at {:?} -> {:?}",
            strategy.name(),
            shots,
            turn.target,
            turn.outcome
        );
        on_turn(&turn);
        grid = turn.grid;
    }
    let status = if grid.is_fleet_sunk() {
        SolveStatus::Solved
    } else {
        info!("{}: stopped at iteration cap {}", strategy.name(), max_iterations);
        SolveStatus::IterationLimit
    };
    Ok(SolveReport {
        grid,
        shots,
        hits,
        status,
    })
}

/// Solve with the probabilistic strategy and the default iteration cap.
pub fn solve_probabilistic(grid: Grid, fleet: &[ShipSpec]) -> Result<SolveReport, GridError> {
    solve(grid, &mut Probabilistic::new(fleet), MAX_SOLVE_ITERATIONS, |_| {})
}
