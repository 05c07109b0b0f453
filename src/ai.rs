//! Probability-based targeting.
//!
//! Every arrangement of the ships still afloat that agrees with the shots
//! taken so far is enumerated, and each un-hit cell is scored by how many of
//! those arrangements put a ship on it. The highest scoring cell is fired at.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::ControlFlow;

use log::debug;

use crate::common::{GridError, Pos};
use crate::grid::{Cell, Grid};
use crate::heatmap::Heatmap;
use crate::placement::visit_placements;
use crate::ship::ShipSpec;
use crate::shot::shoot;

/// What the shots on a grid reveal, reduced for re-enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    /// [`Cell::Blocked`] for misses and sunk segments, [`Cell::Empty`] elsewhere.
    /// Hit segments of ships still afloat stay empty so a ship can be placed
    /// over them again.
    pub bitmask: Grid,
    /// Ids of ships that have been sunk.
    pub sunk: BTreeSet<usize>,
    /// Hit segments of ships still afloat, row-major.
    pub hits: Vec<Pos>,
}

fn is_hit(cell: &Cell) -> bool {
    cell.ship().is_some_and(|s| s.hit)
}

/// Build the knowledge grid for `grid`.
pub fn knowledge(grid: &Grid) -> Knowledge {
    let mut sunk = BTreeSet::new();
    let mut hits = Vec::new();
    let bitmask = Grid::from_fn(grid.size(), |x, y| match grid.get(x, y) {
        Some(Cell::Ship(ship)) if ship.sunk => {
            sunk.insert(ship.id);
            Cell::Blocked
        }
        Some(Cell::Ship(ship)) => {
            if ship.hit {
                hits.push((x, y));
            }
            Cell::Empty
        }
        Some(Cell::Miss { .. }) | Some(Cell::Blocked) => Cell::Blocked,
        Some(Cell::Empty) | None => Cell::Empty,
    });
    Knowledge {
        bitmask,
        sunk,
        hits,
    }
}

/// Score every cell of `grid` against the ships of `specs` still afloat.
///
/// Returns the normalized heatmap and the cell to fire at: the last cell in
/// row-major order with the highest count. `None` when no feasible
/// arrangement leaves an un-hit ship cell to aim at.
pub fn probability_heatmap(grid: &Grid, specs: &[ShipSpec]) -> Option<(Heatmap, Pos)> {
    let Knowledge {
        bitmask,
        sunk,
        hits,
    } = knowledge(grid);
    let afloat: Vec<ShipSpec> = specs
        .iter()
        .filter(|s| !sunk.contains(&s.id))
        .copied()
        .collect();
    let covers_hits = |candidate: &Grid| {
        hits.iter()
            .all(|&(x, y)| candidate.get(x, y).is_some_and(|c| c.ship().is_some()))
    };

    let size = grid.size();
    let mut counts = vec![0u64; size * size];
    let mut max = 0u64;
    let mut feasible = 0usize;
    let _ = visit_placements::<(), _, _>(&bitmask, &afloat, &covers_hits, &mut |placement: &Grid| {
        feasible += 1;
        for ((x, y), cell) in placement.cells() {
            if cell.ship().is_none() || grid.get(x, y).is_some_and(is_hit) {
                continue;
            }
            let count = &mut counts[y * size + x];
            *count += 1;
            max = max.max(*count);
        }
        ControlFlow::Continue(())
    });
    debug!(
        "{} feasible placements of {} ships, {} open hits, max count {}",
        feasible,
        afloat.len(),
        hits.len(),
        max
    );

    if max == 0 {
        return None;
    }
    Some(Heatmap::normalize(size, &counts, max))
}

/// Fire at the most likely cell. `Ok(None)` means nothing is left to target.
pub fn probabilistic_shot(
    grid: &Grid,
    specs: &[ShipSpec],
) -> Result<Option<(Grid, Heatmap)>, GridError> {
    let Some((heatmap, target)) = probability_heatmap(grid, specs) else {
        return Ok(None);
    };
    let next = shoot(grid, target)?;
    Ok(Some((next, heatmap)))
}
