use crate::astar::{astar, SearchOutcome};
use crate::maze_grid::MazeGrid;
use crate::{manhattan_distance, Cell};
use log::info;

/// Outcome of a search on a [MazeGrid], with the cost counted in steps.
pub type GridOutcome = SearchOutcome<Cell, u32>;

/// Binds the search engine to a [MazeGrid]. Implementors only choose the heuristic; moves are
/// always the passable orthogonal neighbours at unit cost.
pub trait GridSolver {
    /// Estimated number of steps from `p1` to `p2`. Must never overestimate.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> u32;

    /// Number of steps taken along a path.
    fn get_path_cost(&self, path: &[Cell]) -> u32 {
        path.len().saturating_sub(1) as u32
    }

    /// Computes a shortest path between two arbitrary cells of the grid. Walls and cells outside
    /// the grid are never reachable.
    fn get_path(&self, grid: &MazeGrid, start: Cell, goal: Cell) -> GridOutcome {
        if !grid.is_passable(&start) || !grid.is_passable(&goal) {
            info!("{} or {} is not a passable cell", start, goal);
            return SearchOutcome::Unreachable;
        }
        info!("Searching for a path from {} to {}", start, goal);
        let outcome = astar(
            &start,
            |cell| grid.neighbors(cell),
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
        );
        match &outcome {
            SearchOutcome::Found { cost, .. } => info!("Found a path of {} steps", cost),
            SearchOutcome::Unreachable => info!("{} is not reachable from {}", goal, start),
        }
        outcome
    }

    /// Computes a shortest path from the grid's start to its goal.
    fn solve(&self, grid: &MazeGrid) -> GridOutcome {
        self.get_path(grid, grid.start(), grid.goal())
    }
}

/// A* guided by the [Manhattan distance](manhattan_distance) to the goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> u32 {
        manhattan_distance(p1, p2)
    }
}

/// Uninformed search, A* with a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> u32 {
        0
    }
}
