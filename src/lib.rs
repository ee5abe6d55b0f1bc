//! # maze_astar
//!
//! Shortest paths through 2-D mazes using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Movement is restricted to the four orthogonal directions and every step has unit cost,
//! which makes the heuristic admissible and consistent and therefore the returned paths optimal.
//!
//! A [MazeGrid] is built once from a matrix of [Marker]s (or parsed from text with
//! [parse_maze]), after which a [GridSolver] such as [AstarSolver] produces a
//! [SearchOutcome]: either a path from start to goal or an explicit
//! [SearchOutcome::Unreachable].
pub mod astar;
pub mod config;
mod error;
pub mod maze_grid;
pub mod parse;
pub mod render;
pub mod solver;

use core::fmt;

pub use crate::astar::{astar, reconstruct_path, SearchOutcome};
pub use crate::error::{GridError, Result};
pub use crate::maze_grid::{Marker, MazeGrid};
pub use crate::parse::parse_maze;
pub use crate::solver::{AstarSolver, DijkstraSolver, GridSolver};

pub const START_MARKER: char = 'S';
pub const GOAL_MARKER: char = 'G';
pub const WALL_MARKER: char = '#';
/// Both a blank and a dot denote an open cell in textual input.
pub const OPEN_MARKERS: [char; 2] = [' ', '.'];

/// Number of cells adjacent to a cell under orthogonal movement.
pub(crate) const N_NEIGHBOURS: usize = 4;

/// A position on the grid as (row, column). Rows grow downwards, columns to the right.
/// Ordering is lexicographic on (row, col).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The four orthogonal neighbours in canonical order: up, down, left, right.
    /// Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> [Cell; N_NEIGHBOURS] {
        [
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }

    /// True iff the cells differ by exactly one step along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        manhattan_distance(self, other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// |a.row - b.row| + |a.col - b.col|. Never overestimates the number of unit steps
/// between two cells, so it is admissible (and consistent) for orthogonal movement.
pub fn manhattan_distance(a: &Cell, b: &Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
