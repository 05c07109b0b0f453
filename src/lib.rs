#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod common;
mod config;
mod game;
mod grid;
mod heatmap;
mod hunt;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;
mod shot;
mod strategy;
pub mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use heatmap::*;
pub use hunt::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, short_target, LogFilter};
pub use placement::*;
pub use ship::*;
pub use shot::*;
pub use strategy::*;
pub use ui::{format_grid, format_heatmap};
#[cfg(feature = "std")]
pub use ui::{print_grid, print_heatmap};
