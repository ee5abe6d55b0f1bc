//! Reading mazes from text: one line per row, one character per cell.
use crate::error::{GridError, Result};
use crate::maze_grid::{Marker, MazeGrid};

/// Converts a single text row into markers. `row` is only used for error reporting.
pub fn parse_row(row: usize, line: &str) -> Result<Vec<Marker>> {
    line.chars()
        .enumerate()
        .map(|(col, c)| {
            Marker::from_char(c).ok_or(GridError::UnknownMarker { row, col, found: c })
        })
        .collect()
}

/// Parses a maze such as
/// ```text
/// S.#
/// #.#
/// #.G
/// ```
/// where `S` marks the start, `G` the goal, `#` a wall and `.` or a blank an open cell.
/// A trailing newline and carriage returns are ignored.
pub fn parse_maze(text: &str) -> Result<MazeGrid> {
    let markers = text
        .lines()
        .enumerate()
        .map(|(row, line)| parse_row(row, line.trim_end_matches('\r')))
        .collect::<Result<Vec<_>>>()?;
    MazeGrid::new(markers)
}
