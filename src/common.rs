//! Common types: positions, grid errors and shot outcomes.

/// A cell coordinate as `(x, y)`: column first, then row.
pub type Pos = (usize, usize);

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Cell is not a legal shot target (already a miss or an already-hit ship).
    InvalidShot { x: usize, y: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
            GridError::InvalidShot { x, y } => {
                write!(f, "InvalidShot: cell x={}, y={} is already known", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Shot {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship segment that is still afloat.
    Hit,
    /// Shot hit the last intact segment of the ship with this id.
    Sunk(usize),
}
