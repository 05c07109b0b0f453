//! Backtracking enumeration of every way a fleet fits on a grid.
//!
//! Ships are placed in the order given. For each ship every anchor cell is
//! tried in row-major order, horizontal before vertical, and a placement is
//! only attempted when the whole run of cells is in bounds and empty. Complete
//! placements are offered to a filter before being reported, so callers can
//! reject arrangements that contradict what they already know.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use log::debug;
use rand::Rng;

use crate::grid::{Cell, Grid, ShipCell};
use crate::ship::{Orientation, ShipSpec};

/// Walk every complete placement of `specs` onto the empty cells of `grid`,
/// depth-first in scan order, calling `visit` for each one accepted by
/// `filter`. Returning [`ControlFlow::Break`] from `visit` stops the search.
pub fn visit_placements<B, F, V>(
    grid: &Grid,
    specs: &[ShipSpec],
    filter: &F,
    visit: &mut V,
) -> ControlFlow<B>
where
    F: Fn(&Grid) -> bool,
    V: FnMut(&Grid) -> ControlFlow<B>,
{
    let Some((spec, rest)) = specs.split_first() else {
        if filter(grid) {
            return visit(grid);
        }
        return ControlFlow::Continue(());
    };

    let value = Cell::Ship(ShipCell::intact(*spec));
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            for orientation in Orientation::ALL {
                let Some(end) = orientation.span((x, y), spec.size) else {
                    continue;
                };
                if grid.region_is_empty((x, y), end) {
                    let placed = grid.fill((x, y), end, value);
                    visit_placements(&placed, rest, filter, visit)?;
                }
            }
        }
    }
    ControlFlow::Continue(())
}

/// Every placement of `specs` on `grid`, in discovery order, optionally
/// keeping only those for which `filter` returns `true`.
pub fn enumerate(
    grid: &Grid,
    specs: &[ShipSpec],
    filter: Option<&dyn Fn(&Grid) -> bool>,
) -> Vec<Grid> {
    let keep = |candidate: &Grid| filter.map_or(true, |f| f(candidate));
    let mut found = Vec::new();
    let _ = visit_placements::<(), _, _>(grid, specs, &keep, &mut |placement: &Grid| {
        found.push(placement.clone());
        ControlFlow::Continue(())
    });
    debug!("enumerated {} placements of {} ships", found.len(), specs.len());
    found
}

/// Number of unfiltered placements, without materializing them.
pub fn count_placements(grid: &Grid, specs: &[ShipSpec]) -> usize {
    let mut count = 0usize;
    let _ = visit_placements::<(), _, _>(grid, specs, &|_: &Grid| true, &mut |_: &Grid| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

/// The `n`th unfiltered placement in discovery order.
pub fn nth_placement(grid: &Grid, specs: &[ShipSpec], n: usize) -> Option<Grid> {
    let mut index = 0usize;
    let found = visit_placements(grid, specs, &|_: &Grid| true, &mut |placement: &Grid| {
        if index == n {
            return ControlFlow::Break(placement.clone());
        }
        index += 1;
        ControlFlow::Continue(())
    });
    match found {
        ControlFlow::Break(placement) => Some(placement),
        ControlFlow::Continue(()) => None,
    }
}

/// Pick one placement uniformly at random. Returns `None` if the fleet does
/// not fit.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    specs: &[ShipSpec],
    rng: &mut R,
) -> Option<Grid> {
    let total = count_placements(grid, specs);
    if total == 0 {
        return None;
    }
    let index = rng.random_range(0..total);
    debug!("picked placement {} of {}", index, total);
    nth_placement(grid, specs, index)
}
