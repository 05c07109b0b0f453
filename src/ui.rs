//! Plain-text rendering of grids and heatmaps.
//!
//! Columns are lettered from `A`, rows numbered from `1`. Cell glyphs:
//! `.` empty, `o` miss, `+` blocked, the ship's size for an intact segment,
//! `X` hit and `#` sunk.

use alloc::string::{String, ToString};
use core::fmt;

use crate::grid::{Cell, Grid};
use crate::heatmap::Heatmap;

fn glyph(cell: &Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Miss { .. } => 'o',
        Cell::Blocked => '+',
        Cell::Ship(ship) if ship.sunk => '#',
        Cell::Ship(ship) if ship.hit => 'X',
        Cell::Ship(ship) => char::from_digit(ship.size as u32, 36).unwrap_or('S'),
    }
}

fn column_header(f: &mut fmt::Formatter<'_>, size: usize, width: usize) -> fmt::Result {
    write!(f, "  ")?;
    for c in 0..size {
        let ch = (b'A' + (c % 26) as u8) as char;
        write!(f, " {:>width$}", ch, width = width)?;
    }
    writeln!(f)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        column_header(f, self.size(), 1)?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "{:2}", y + 1)?;
            for cell in row {
                write!(f, " {}", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        column_header(f, self.size(), 4)?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "{:2}", y + 1)?;
            for value in row {
                write!(f, " {:4.2}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a grid as a text table.
pub fn format_grid(grid: &Grid) -> String {
    grid.to_string()
}

/// Render a heatmap as a text table of likelihoods.
pub fn format_heatmap(heatmap: &Heatmap) -> String {
    heatmap.to_string()
}

#[cfg(feature = "std")]
pub fn print_grid(grid: &Grid) {
    std::print!("{}", grid);
}

/// Print a heatmap under a heading.
#[cfg(feature = "std")]
pub fn print_heatmap(heatmap: &Heatmap) {
    std::println!("\nProbability heatmap:");
    std::print!("{}", heatmap);
}
