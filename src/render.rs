//! Text rendering of a maze and, optionally, a path through it. Rendering is stateless: the
//! same grid, path and style always give the same string.
use crate::maze_grid::{Marker, MazeGrid};
use crate::{Cell, GOAL_MARKER, START_MARKER, WALL_MARKER};
use crossterm::style::Stylize;
use fxhash::FxHashSet;
use itertools::Itertools;

/// The 10x10 maze solved when no other maze is given.
pub const SAMPLE_MAZE: &str = "\
S..#......
.#.#.####.
.#......#.
.######.#.
........#.
.########.
..........
######.###
..........
.########G";

pub const PATH_MARKER: char = '*';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    /// Markers wrapped in ANSI color sequences.
    Colored,
}

fn paint(c: char, style: Style) -> String {
    match style {
        Style::Plain => c.to_string(),
        Style::Colored => match c {
            START_MARKER => c.green().to_string(),
            GOAL_MARKER => c.red().to_string(),
            WALL_MARKER => c.blue().to_string(),
            PATH_MARKER => c.yellow().to_string(),
            _ => c.white().to_string(),
        },
    }
}

/// Renders the grid row by row with cells separated by a blank. Cells of `path` other than
/// its two endpoints are drawn as [PATH_MARKER].
pub fn render(grid: &MazeGrid, path: Option<&[Cell]>, style: Style) -> String {
    let on_path: FxHashSet<Cell> = match path {
        Some(p) if p.len() > 2 => p[1..p.len() - 1].iter().copied().collect(),
        _ => FxHashSet::default(),
    };
    let mut out = String::new();
    for row in 0..grid.rows() as i32 {
        let line = (0..grid.cols() as i32)
            .map(|col| {
                let cell = Cell::new(row, col);
                let c = match grid.marker(&cell) {
                    Some(Marker::Open) if on_path.contains(&cell) => PATH_MARKER,
                    Some(m) => m.to_char(),
                    None => ' ',
                };
                paint(c, style)
            })
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn legend(style: Style) -> String {
    [
        (START_MARKER, "Start"),
        (GOAL_MARKER, "Goal"),
        (WALL_MARKER, "Wall/Obstacle"),
        (PATH_MARKER, "Solution Path"),
        (Marker::Open.to_char(), "Open Space"),
    ]
    .into_iter()
    .map(|(c, what)| format!("  {} = {}", paint(c, style), what))
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_maze;
    use crate::solver::{AstarSolver, GridSolver};

    #[test]
    fn renders_without_path() {
        let grid = parse_maze("S.#\n#.#\n#.G").unwrap();
        assert_eq!(render(&grid, None, Style::Plain), "S . #\n# . #\n# . G\n");
    }

    #[test]
    fn renders_path_between_endpoints() {
        let grid = parse_maze("S.#\n#.#\n#.G").unwrap();
        let outcome = AstarSolver.solve(&grid);
        assert_eq!(
            render(&grid, outcome.path(), Style::Plain),
            "S * #\n# * #\n# * G\n"
        );
    }

    #[test]
    fn short_paths_mark_nothing() {
        let grid = parse_maze("SG").unwrap();
        let path = [grid.start(), grid.goal()];
        assert_eq!(render(&grid, Some(&path[..]), Style::Plain), "S G\n");
    }

    #[test]
    fn sample_maze_is_solvable() {
        let grid = parse_maze(SAMPLE_MAZE).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (10, 10));
        assert_eq!(AstarSolver.solve(&grid).cost(), Some(18));
    }

    #[test]
    fn colored_keeps_layout() {
        let grid = parse_maze(SAMPLE_MAZE).unwrap();
        let colored = render(&grid, None, Style::Colored);
        assert_eq!(colored.lines().count(), 10);
        assert!(colored.contains('S') && colored.contains('G'));
        assert_eq!(legend(Style::Plain).lines().count(), 5);
    }
}
