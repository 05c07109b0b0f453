//! Fleet definitions and ship orientation.

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, in the order the enumerator tries them.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Exclusive end of a run of `size` cells anchored at `(x, y)`, or `None`
    /// for an empty run or one whose end does not fit in `usize`.
    pub fn span(self, (x, y): (usize, usize), size: usize) -> Option<(usize, usize)> {
        if size == 0 {
            return None;
        }
        match self {
            Orientation::Horizontal => Some((x.checked_add(size)?, y.checked_add(1)?)),
            Orientation::Vertical => Some((x.checked_add(1)?, y.checked_add(size)?)),
        }
    }
}

/// One ship of the fleet: an identity and a length.
///
/// `id` tells ships apart for sink detection; it is not a count. A ship of
/// size zero occupies nothing and has no placements, so a fleet containing
/// one never fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub id: usize,
    pub size: usize,
}

impl ShipSpec {
    /// Create a new ship spec.
    pub const fn new(id: usize, size: usize) -> Self {
        Self { id, size }
    }
}
