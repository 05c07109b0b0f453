//! Targeting policies behind a common interface.

use alloc::vec::Vec;

use crate::{
    ai::probability_heatmap,
    common::{GridError, Pos, Shot},
    grid::Grid,
    heatmap::Heatmap,
    hunt::hunt_target,
    ship::ShipSpec,
    shot::shoot_outcome,
};

/// One resolved shot: the grid after it, where it landed and what it did.
#[derive(Debug, Clone)]
pub struct Turn {
    pub grid: Grid,
    pub target: Pos,
    pub outcome: Shot,
    /// Heatmap behind the decision, for strategies that build one.
    pub heatmap: Option<Heatmap>,
}

/// Interface implemented by targeting policies.
pub trait Strategy {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Choose the next target, or `None` if the policy has nothing left to shoot.
    fn select_target(&mut self, grid: &Grid) -> Option<(Pos, Option<Heatmap>)>;

    /// Select a target and fire at it.
    fn play(&mut self, grid: &Grid) -> Result<Option<Turn>, GridError> {
        let Some((target, heatmap)) = self.select_target(grid) else {
            return Ok(None);
        };
        let (grid, outcome) = shoot_outcome(grid, target)?;
        Ok(Some(Turn {
            grid,
            target,
            outcome,
            heatmap,
        }))
    }
}

/// Checkerboard hunting with neighbour follow-up after hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntAndTarget;

impl Strategy for HuntAndTarget {
    fn name(&self) -> &'static str {
        "hunt-and-target"
    }

    fn select_target(&mut self, grid: &Grid) -> Option<(Pos, Option<Heatmap>)> {
        hunt_target(grid).map(|pos| (pos, None))
    }
}

/// Fires at the cell most placements of the remaining fleet agree on.
#[derive(Debug, Clone)]
pub struct Probabilistic {
    fleet: Vec<ShipSpec>,
}

impl Probabilistic {
    pub fn new(fleet: &[ShipSpec]) -> Self {
        Self {
            fleet: fleet.to_vec(),
        }
    }
}

impl Strategy for Probabilistic {
    fn name(&self) -> &'static str {
        "probabilistic"
    }

    fn select_target(&mut self, grid: &Grid) -> Option<(Pos, Option<Heatmap>)> {
        probability_heatmap(grid, &self.fleet).map(|(heatmap, pos)| (pos, Some(heatmap)))
    }
}
