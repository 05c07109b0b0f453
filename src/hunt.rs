//! Hunt-and-target: finish wounded ships, otherwise sweep a checkerboard.
//!
//! The strategy keeps no state between calls; pending hits are recovered by
//! scanning the grid each time.

use alloc::vec::Vec;

use log::trace;

use crate::common::{GridError, Pos};
use crate::grid::Grid;
use crate::shot::shoot;

/// Choose the next hunt-and-target shot, or `None` if no legal shot is left.
pub fn hunt_target(grid: &Grid) -> Option<Pos> {
    let pending: Vec<Pos> = grid
        .cells()
        .filter(|(_, cell)| cell.ship().is_some_and(|s| s.hit && !s.sunk))
        .map(|(pos, _)| pos)
        .collect();

    // Most recently discovered hit first.
    for &(x, y) in pending.iter().rev() {
        let neighbours = [
            x.checked_sub(1).map(|left| (left, y)),
            Some((x + 1, y)),
            y.checked_sub(1).map(|up| (x, up)),
            Some((x, y + 1)),
        ];
        for (nx, ny) in neighbours.into_iter().flatten() {
            if grid.get(nx, ny).is_some_and(|cell| cell.is_target()) {
                trace!("target ({}, {}) next to hit ({}, {})", nx, ny, x, y);
                return Some((nx, ny));
            }
        }
    }

    grid.scan(|x, y, cell| (x % 2 + y % 2 == 1 && cell.is_target()).then_some((x, y)))
}

/// Fire the next hunt-and-target shot. `Ok(None)` means the grid is exhausted.
pub fn hunt_and_target(grid: &Grid) -> Result<Option<Grid>, GridError> {
    hunt_target(grid).map(|pos| shoot(grid, pos)).transpose()
}
