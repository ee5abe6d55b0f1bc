use clap::Parser;
use maze_astar::config::Config;
use maze_astar::maze_grid::{Marker, MazeGrid};
use maze_astar::parse::{parse_maze, parse_row};
use maze_astar::render::{legend, render, Style, SAMPLE_MAZE};
use maze_astar::solver::GridOutcome;
use maze_astar::{manhattan_distance, GridError, SearchOutcome};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Error creating maze: {0}")]
    Grid(#[from] GridError),

    #[error("input ended before the maze was complete")]
    EndOfInput,
}

type AppResult<T> = std::result::Result<T, AppError>;

/// Prints `prompt` and reads one line without its line ending.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::EndOfInput);
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_owned())
}

fn ask_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<usize> {
    loop {
        match ask(input, output, prompt)?.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            Ok(_) => writeln!(output, "Dimensions must be positive integers.")?,
            Err(_) => writeln!(output, "Invalid input. Please enter a positive integer.")?,
        }
    }
}

/// Reads a maze row by row. Rows of the wrong width or with unknown characters are asked again.
fn read_custom_maze<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<MazeGrid> {
    let rows = ask_dimension(input, output, "Enter the number of rows: ")?;
    let cols = ask_dimension(input, output, "Enter the number of columns: ")?;
    writeln!(
        output,
        "\nEnter the maze layout ({rows}x{cols}). Use 'S' for start, 'G' for goal, '#' for walls, and ' ' or '.' for open paths."
    )?;
    let mut markers: Vec<Vec<Marker>> = Vec::with_capacity(rows);
    for r in 0..rows {
        loop {
            let line = ask(input, output, &format!("Row {}: ", r + 1))?;
            if line.chars().count() != cols {
                writeln!(output, "Invalid input. Please enter exactly {cols} characters.")?;
                continue;
            }
            match parse_row(r, &line) {
                Ok(row) => {
                    markers.push(row);
                    break;
                }
                Err(e) => writeln!(output, "Invalid input: {e}")?,
            }
        }
    }
    Ok(MazeGrid::new(markers)?)
}

fn choose_maze<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<MazeGrid> {
    loop {
        let choice = ask(
            input,
            output,
            "\nWould you like to use the (d)efault maze or (c)reate a new one? ",
        )?;
        match choice.trim().to_lowercase().as_str() {
            "d" => return Ok(parse_maze(SAMPLE_MAZE)?),
            "c" => return read_custom_maze(input, output),
            _ => writeln!(output, "Invalid choice. Please enter 'd' or 'c'.")?,
        }
    }
}

fn report<W: Write>(
    output: &mut W,
    grid: &MazeGrid,
    outcome: &GridOutcome,
    style: Style,
) -> io::Result<()> {
    let rule = "=".repeat(grid.cols() * 2 + 3);
    match outcome {
        SearchOutcome::Found { path, cost } => {
            writeln!(output, "\nSUCCESS! Path found!")?;
            writeln!(output, "   Path length: {} cells", path.len())?;
            writeln!(output, "\nMaze with solution path:\n{rule}")?;
            write!(output, "{}", render(grid, Some(path.as_slice()), style))?;
            writeln!(output, "{rule}\n\nLegend:\n{}", legend(style))?;
            writeln!(output, "\nStatistics:")?;
            writeln!(output, "   Start position: {}", grid.start())?;
            writeln!(output, "   Goal position: {}", grid.goal())?;
            writeln!(output, "   Total steps: {cost}")?;
            writeln!(
                output,
                "   Manhattan distance: {}",
                manhattan_distance(&grid.start(), &grid.goal())
            )?;
        }
        SearchOutcome::Unreachable => {
            writeln!(output, "\nUNREACHABLE! No path exists from start to goal.")?;
            writeln!(
                output,
                "   The goal at {} cannot be reached from start at {}",
                grid.goal(),
                grid.start()
            )?;
        }
    }
    Ok(())
}

fn run(config: &Config) -> AppResult<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let grid = if let Some(path) = &config.maze {
        parse_maze(&std::fs::read_to_string(path)?)?
    } else if config.interactive {
        let stdin = io::stdin();
        choose_maze(&mut stdin.lock(), &mut output)?
    } else {
        parse_maze(SAMPLE_MAZE)?
    };
    let style = config.style();
    let rule = "=".repeat(grid.cols() * 2 + 3);
    writeln!(output, "\nOriginal maze:\n{rule}")?;
    write!(output, "{}", render(&grid, None, style))?;
    writeln!(output, "{rule}")?;
    writeln!(
        output,
        "\nSearching for path from {} to {} using {:?}...",
        grid.start(),
        grid.goal(),
        config.solver
    )?;
    let outcome = config.solver.solver().solve(&grid);
    report(&mut output, &grid, &outcome, style)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_astar::{AstarSolver, Cell, GridSolver};
    use std::io::Cursor;

    #[test]
    fn default_maze_from_menu() {
        let mut input = Cursor::new("x\nD\n");
        let mut output = Vec::new();
        let grid = choose_maze(&mut input, &mut output).unwrap();
        assert_eq!(grid.rows(), 10);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid choice"));
    }

    #[test]
    fn custom_maze_from_menu() {
        let mut input = Cursor::new("c\n0\n3\nthree\n3\nS.\nS.#\n#?#\n#.#\n#.G\n");
        let mut output = Vec::new();
        let grid = choose_maze(&mut input, &mut output).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.goal(), Cell::new(2, 2));
        assert_eq!(AstarSolver.solve(&grid).cost(), Some(4));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Dimensions must be positive integers."));
        assert!(text.contains("exactly 3 characters"));
        assert!(text.contains("unknown marker"));
    }

    #[test]
    fn custom_maze_without_goal() {
        let mut input = Cursor::new("c\n1\n2\nS.\n");
        let mut output = Vec::new();
        let err = choose_maze(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, AppError::Grid(GridError::MissingGoal)));
    }

    #[test]
    fn input_ends_early() {
        let mut input = Cursor::new("c\n2\n");
        let mut output = Vec::new();
        let err = choose_maze(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, AppError::EndOfInput));
    }

    #[test]
    fn report_unreachable() {
        let grid = parse_maze("S#G").unwrap();
        let outcome = AstarSolver.solve(&grid);
        let mut output = Vec::new();
        report(&mut output, &grid, &outcome, Style::Plain).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("UNREACHABLE"));
        assert!(text.contains("(0, 2)"));
    }

    #[test]
    fn report_found() {
        let grid = parse_maze("S.#\n#.#\n#.G").unwrap();
        let outcome = AstarSolver.solve(&grid);
        let mut output = Vec::new();
        report(&mut output, &grid, &outcome, Style::Plain).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Total steps: 4"));
        assert!(text.contains("# * G"));
    }
}
