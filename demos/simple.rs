use maze_astar::{parse_maze, AstarSolver, GridSolver};

// In this example a path is found on a 3x3 maze with shape
//  ___
// |S.#|
// |#.#|
// |#.G|
//  ___
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// Moves are restricted to up, down, left and right.

fn main() {
    let grid = parse_maze("S.#\n#.#\n#.G").unwrap();
    print!("{}", grid);
    let path = AstarSolver::new().solve(&grid).into_path().unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
