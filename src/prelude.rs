//! Commonly used types and functions for ease of import.

pub use crate::{
    enumerate, probabilistic_shot, random_placement, shoot, solve, Cell, Grid, GridError,
    Heatmap, HuntAndTarget, Probabilistic, ShipSpec, SolveReport, SolveStatus, Strategy, FLEET,
};
