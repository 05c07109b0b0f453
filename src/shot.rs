//! Applying shots to a grid and detecting sunk ships.

use alloc::vec::Vec;

use log::debug;

use crate::common::{GridError, Pos, Shot};
use crate::grid::{Cell, Grid, ShipCell};

/// Fire at `pos`, returning the updated grid.
///
/// Fails with [`GridError::InvalidShot`] if the cell is already resolved.
pub fn shoot(grid: &Grid, pos: Pos) -> Result<Grid, GridError> {
    shoot_outcome(grid, pos).map(|(grid, _)| grid)
}

/// Fire at `pos`, returning the updated grid and what the shot did.
pub fn shoot_outcome(grid: &Grid, (x, y): Pos) -> Result<(Grid, Shot), GridError> {
    let next = match *grid.cell((x, y))? {
        Cell::Empty => Cell::Miss { known: true },
        Cell::Ship(ship) if !ship.hit => Cell::Ship(ShipCell { hit: true, ..ship }),
        _ => return Err(GridError::InvalidShot { x, y }),
    };
    let shot = grid.fill((x, y), (x + 1, y + 1), next);
    let Cell::Ship(ship) = next else {
        return Ok((shot, Shot::Miss));
    };

    let segments = hit_segments(&shot, &ship);
    if segments.len() != ship.size {
        return Ok((shot, Shot::Hit));
    }
    let sunk = Cell::Ship(ShipCell { sunk: true, ..ship });
    let sunk_grid = segments
        .iter()
        .fold(shot, |acc, &(sx, sy)| acc.fill((sx, sy), (sx + 1, sy + 1), sunk));
    debug!("ship {} sunk at ({}, {})", ship.id, x, y);
    Ok((sunk_grid, Shot::Sunk(ship.id)))
}

// Segments of `ship` in scan order, or an empty list as soon as one of them
// turns out to be un-hit.
fn hit_segments(grid: &Grid, ship: &ShipCell) -> Vec<Pos> {
    let mut segments = Vec::with_capacity(ship.size);
    grid.scan(|x, y, cell| {
        let segment = cell.ship().filter(|s| s.id == ship.id)?;
        if !segment.hit {
            segments.clear();
            return Some(());
        }
        segments.push((x, y));
        (segments.len() == ship.size).then_some(())
    });
    segments
}
