//! Square grids of cells with copy-on-write rows.
//!
//! A [`Grid`] is an `N×N` row-major array of [`Cell`]s. Rows are held behind
//! [`Arc`] so that deriving a new grid from an old one only copies the rows it
//! writes into; every other row is shared with the source. Grids are never
//! mutated after they are handed out, so sharing is invisible to callers.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::{GridError, Pos};
use crate::ship::ShipSpec;

/// A ship segment and what is known about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipCell {
    pub id: usize,
    pub size: usize,
    pub hit: bool,
    pub sunk: bool,
}

impl ShipCell {
    /// An un-hit segment of the given ship.
    pub fn intact(spec: ShipSpec) -> Self {
        Self {
            id: spec.id,
            size: spec.size,
            hit: false,
            sunk: false,
        }
    }
}

/// State of a single grid cell.
///
/// Tags and fields are write-once; only `hit`, `sunk` and `known` ever change,
/// and only from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "snake_case"))]
pub enum Cell {
    /// Nothing placed, nothing known.
    #[default]
    Empty,
    /// Occupied by a ship segment.
    Ship(ShipCell),
    /// A shot landed on open water.
    Miss { known: bool },
    /// Unavailable in a knowledge grid: a miss or a sunk segment.
    Blocked,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The ship segment in this cell, if any.
    pub fn ship(&self) -> Option<&ShipCell> {
        match self {
            Cell::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    /// Returns `true` once a shot has resolved this cell.
    pub fn is_known(&self) -> bool {
        match self {
            Cell::Miss { known } => *known,
            Cell::Ship(ship) => ship.hit,
            Cell::Empty | Cell::Blocked => false,
        }
    }

    /// Returns `true` if shooting this cell is legal.
    pub fn is_target(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Ship(ship) => !ship.hit,
            Cell::Miss { .. } | Cell::Blocked => false,
        }
    }
}

/// Fixed-size square grid of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Create an empty `size×size` grid.
    pub fn new(size: usize) -> Self {
        Self::filled(size, Cell::Empty)
    }

    /// Create a `size×size` grid with every cell set to `cell`.
    pub fn filled(size: usize, cell: Cell) -> Self {
        let rows = (0..size).map(|_| Arc::new(vec![cell; size])).collect();
        Grid { size, rows }
    }

    /// Create a `size×size` grid whose cell at `(x, y)` is `f(x, y)`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let rows = (0..size)
            .map(|y| Arc::new((0..size).map(|x| f(x, y)).collect()))
            .collect();
        Grid { size, rows }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Cell at `pos`, failing with [`GridError::OutOfBounds`].
    pub fn cell(&self, (x, y): Pos) -> Result<&Cell, GridError> {
        self.get(x, y).ok_or(GridError::OutOfBounds { x, y })
    }

    /// Rows in order, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| ((x, y), cell)))
    }

    /// Returns `true` iff every cell in the half-open rectangle `[start, end)`
    /// is in bounds and [`Cell::Empty`].
    pub fn region_is_empty(&self, start: Pos, end: Pos) -> bool {
        for y in start.1..end.1 {
            let Some(row) = self.rows.get(y) else {
                return false;
            };
            for x in start.0..end.0 {
                match row.get(x) {
                    Some(Cell::Empty) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// New grid with every cell in `[start, end)` set to `value`.
    ///
    /// Rows outside `start.1..end.1` are shared with `self`.
    pub fn place_region(&self, start: Pos, end: Pos, value: Cell) -> Result<Grid, GridError> {
        if start.0 < end.0 && start.1 < end.1 && (end.0 > self.size || end.1 > self.size) {
            return Err(GridError::OutOfBounds {
                x: end.0 - 1,
                y: end.1 - 1,
            });
        }
        Ok(self.fill(start, end, value))
    }

    /// Unchecked variant of [`Grid::place_region`]; the region must be in bounds.
    pub(crate) fn fill(&self, start: Pos, end: Pos, value: Cell) -> Grid {
        debug_assert!(
            start.0 >= end.0 || start.1 >= end.1 || (end.0 <= self.size && end.1 <= self.size)
        );
        let mut rows = self.rows.clone();
        if start.0 < end.0 {
            for row in rows.iter_mut().take(end.1).skip(start.1) {
                Arc::make_mut(row)[start.0..end.0].fill(value);
            }
        }
        Grid {
            size: self.size,
            rows,
        }
    }

    /// Visit cells in row-major order, stopping at the first `Some` returned
    /// by `visit` and yielding it.
    pub fn scan<T, F>(&self, mut visit: F) -> Option<T>
    where
        F: FnMut(usize, usize, &Cell) -> Option<T>,
    {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(found) = visit(x, y, cell) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Returns `true` if row `y` is the same allocation in both grids.
    pub fn shares_row(&self, other: &Grid, y: usize) -> bool {
        match (self.rows.get(y), other.rows.get(y)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Positions of every segment of the ship with this id, row-major.
    pub fn ship_cells(&self, id: usize) -> Vec<Pos> {
        self.cells()
            .filter(|(_, cell)| cell.ship().is_some_and(|s| s.id == id))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Returns `true` when every ship segment on the grid is sunk.
    pub fn is_fleet_sunk(&self) -> bool {
        self.cells()
            .all(|(_, cell)| cell.ship().map_or(true, |s| s.sunk))
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        core::fmt::Display::fmt(self, f)
    }
}
