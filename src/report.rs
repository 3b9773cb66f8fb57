use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::maze::{Grid, WallState};

/// Writes a per-cell listing of neighbours and the wall state towards each one.
///
/// ```text
/// cell[0, 0]:
///         neighbour[0, 1]:  no wall
///         neighbour[1, 0]:  wall
/// ```
pub fn write_report<W: Write>(grid: &Grid, out: &mut W, styled: bool) -> std::io::Result<()> {
    for cell in grid.cells() {
        if styled {
            writeln!(out, "{}: ", cell.to_string().with(Color::Cyan))?;
        } else {
            writeln!(out, "{}: ", cell)?;
        }
        for neighbour in grid.neighbours_of(cell.id()) {
            let (row, col) = neighbour.coord();
            write!(out, "\t\tneighbour[{}, {}]: ", row, col)?;
            let (label, color) = match grid.wall_between(cell.id(), neighbour.id()) {
                WallState::Walled => (" wall", Color::DarkGrey),
                WallState::Open => (" no wall", Color::Green),
                // Neighbours are adjacent by construction
                WallState::NotAdjacent => (" unrelated", Color::Red),
            };
            if styled {
                writeln!(out, "{}", label.with(color))?;
            } else {
                writeln!(out, "{}", label)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
