use crate::ship::ShipSpec;

pub const DEFAULT_GRID_SIZE: usize = 7;
pub const NUM_SHIPS: usize = 4;
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(1, 2),
    ShipSpec::new(2, 3),
    ShipSpec::new(3, 4),
    ShipSpec::new(4, 5),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;

/// Upper bound on turns taken by the solve loop.
pub const MAX_SOLVE_ITERATIONS: usize = 100;

/// Number of cells the given fleet occupies.
pub fn fleet_cells(specs: &[ShipSpec]) -> usize {
    specs.iter().map(|s| s.size).sum()
}

/// Returns `true` if the fleet has at least as few segments as an N×N grid has cells.
pub fn fleet_fits(size: usize, specs: &[ShipSpec]) -> bool {
    fleet_cells(specs) <= size * size
}
