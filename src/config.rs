use crate::render::Style;
use crate::solver::{AstarSolver, DijkstraSolver, GridSolver};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverKind {
    /// A* with the Manhattan distance heuristic
    Astar,
    /// A* without heuristic
    Dijkstra,
}

impl SolverKind {
    pub fn solver(self) -> Box<dyn GridSolver> {
        match self {
            SolverKind::Astar => Box::new(AstarSolver::new()),
            SolverKind::Dijkstra => Box::new(DijkstraSolver),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Text file holding the maze, one row per line
    #[arg(long)]
    pub maze: Option<PathBuf>,

    /// Choose between the sample maze and entering one row by row
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    #[arg(long, value_enum, default_value_t = SolverKind::Astar)]
    pub solver: SolverKind,

    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Config {
    pub fn style(&self) -> Style {
        if self.no_color {
            Style::Plain
        } else {
            Style::Colored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["maze_astar"]).unwrap();
        assert_eq!(config.maze, None);
        assert!(!config.interactive);
        assert_eq!(config.solver, SolverKind::Astar);
        assert_eq!(config.style(), Style::Colored);
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "maze_astar",
            "--maze",
            "maze.txt",
            "--solver",
            "dijkstra",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(config.maze, Some(PathBuf::from("maze.txt")));
        assert_eq!(config.solver, SolverKind::Dijkstra);
        assert_eq!(config.style(), Style::Plain);
        assert!(Config::try_parse_from(["maze_astar", "--solver", "bfs"]).is_err());
    }
}
