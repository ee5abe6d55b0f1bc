use crate::error::{GridError, Result};
use crate::*;
use core::fmt;
use itertools::Itertools;
use log::warn;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// The content of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Goal,
    Wall,
    Open,
}

impl Marker {
    /// Maps a character of the textual alphabet to its marker, [None] if it is not part of it.
    pub fn from_char(c: char) -> Option<Marker> {
        match c {
            START_MARKER => Some(Marker::Start),
            GOAL_MARKER => Some(Marker::Goal),
            WALL_MARKER => Some(Marker::Wall),
            c if OPEN_MARKERS.contains(&c) => Some(Marker::Open),
            _ => None,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Marker::Start => START_MARKER,
            Marker::Goal => GOAL_MARKER,
            Marker::Wall => WALL_MARKER,
            Marker::Open => OPEN_MARKERS[1],
        }
    }
}

/// [MazeGrid] stores the rectangular obstacle map together with the start and goal cells. It is
/// immutable after construction. Connected components of the passable cells are computed once
/// with a [UnionFind] so that reachability can be queried without searching.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    markers: Vec<Marker>,
    rows: usize,
    cols: usize,
    start: Cell,
    goal: Cell,
    components: UnionFind<usize>,
}

impl MazeGrid {
    /// Builds a grid from a row-major matrix of markers. Fails if the matrix is empty or not
    /// rectangular, or if no start or no goal marker is present. When a marker occurs more than
    /// once, the first occurrence in row-major order is used.
    pub fn new(markers: Vec<Vec<Marker>>) -> Result<MazeGrid> {
        let rows = markers.len();
        let cols = markers.first().map_or(0, |r| r.len());
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = markers.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let markers = markers.into_iter().flatten().collect::<Vec<Marker>>();
        let find = |target: Marker| -> Option<Cell> {
            let mut hits = markers.iter().positions(|&m| m == target);
            let first = hits.next()?;
            let duplicates = hits.count();
            if duplicates > 0 {
                warn!(
                    "Ignoring {} duplicate {:?} marker(s), keeping the first one",
                    duplicates, target
                );
            }
            Some(Cell::new((first / cols) as i32, (first % cols) as i32))
        };
        let start = find(Marker::Start).ok_or(GridError::MissingStart)?;
        let goal = find(Marker::Goal).ok_or(GridError::MissingGoal)?;

        let mut grid = MazeGrid {
            markers,
            rows,
            cols,
            start,
            goal,
            components: UnionFind::new(rows * cols),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// The marker at a cell, [None] when out of bounds.
    pub fn marker(&self, cell: &Cell) -> Option<Marker> {
        if self.in_bounds(cell) {
            Some(self.markers[self.get_ix(cell)])
        } else {
            None
        }
    }

    /// True iff the cell lies within bounds and is not a wall.
    pub fn is_passable(&self, cell: &Cell) -> bool {
        self.marker(cell).is_some_and(|m| m != Marker::Wall)
    }

    /// Passable orthogonal neighbours of a cell, in the order up, down, left, right.
    pub fn neighbors(&self, cell: &Cell) -> SmallVec<[Cell; N_NEIGHBOURS]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.is_passable(n))
            .collect()
    }

    /// Retrieves the component id a given passable [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        if self.is_passable(cell) {
            Some(self.components.find(self.get_ix(cell)))
        } else {
            None
        }
    }

    /// Checks if both cells are passable and on the same connected component.
    pub fn reachable(&self, a: &Cell, b: &Cell) -> bool {
        self.is_passable(a)
            && self.is_passable(b)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    /// Checks that a path is non-empty, only visits passable cells and only takes orthogonal
    /// unit steps.
    pub fn is_valid_path(&self, path: &[Cell]) -> bool {
        !path.is_empty()
            && path.iter().all(|c| self.is_passable(c))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    /// Links up passable cells with their passable right and lower neighbours.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.is_passable(&cell) {
                    continue;
                }
                let cell_ix = self.get_ix(&cell);
                for n in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if self.is_passable(&n) {
                        let n_ix = self.get_ix(&n);
                        self.components.union(cell_ix, n_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.markers.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|m| m.to_char()).collect::<String>())?;
        }
        Ok(())
    }
}
