use maze_astar::render::SAMPLE_MAZE;
use maze_astar::{parse_maze, AstarSolver, Cell, GridSolver, SearchOutcome};
use std::sync::Arc;
use std::thread;

#[test]
fn three_by_three() {
    let grid = parse_maze("S.#\n#.#\n#.G").unwrap();
    let outcome = AstarSolver::new().solve(&grid);
    let expected = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)].map(Cell::from);
    assert_eq!(outcome.path(), Some(&expected[..]));
    assert_eq!(outcome.cost(), Some(4));
}

#[test]
fn sample_maze() {
    let grid = parse_maze(SAMPLE_MAZE).unwrap();
    let outcome = AstarSolver::new().solve(&grid);
    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 19);
    assert!(grid.is_valid_path(path));
    assert_eq!(path[6], Cell::new(6, 0));
    assert_eq!(path[13], Cell::new(7, 6));
}

#[test]
fn separated_by_wall_row() {
    let grid = parse_maze("S......\n#######\n......G").unwrap();
    assert_eq!(AstarSolver::new().solve(&grid), SearchOutcome::Unreachable);
}

#[test]
fn start_is_goal() {
    let grid = parse_maze("S.\n.G").unwrap();
    let goal = grid.goal();
    let outcome = AstarSolver::new().get_path(&grid, goal, goal);
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            path: vec![goal],
            cost: 0
        }
    );
}

/// Independent searches may share one grid across threads.
#[test]
fn shared_grid_across_threads() {
    let grid = Arc::new(parse_maze(SAMPLE_MAZE).unwrap());
    let expected = AstarSolver::new().solve(&grid);
    let handles = (0..4)
        .map(|_| {
            let grid = Arc::clone(&grid);
            thread::spawn(move || AstarSolver::new().solve(&grid))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
