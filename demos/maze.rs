//! Solves a handful of demonstration mazes and prints every shortest
//! route found.
//!
//! Run: cargo run --bin maze

use warren_core::{Cell, Grid};
use warren_paths::{Solution, Solver};

const MAZE_A: &str = "\
-----
--#--
-----
#-##-
-#---";

const MAZE_B: &str = "\
----
--#-
----
#-#-
-#--";

const MAZE_C: &str = "\
-----
--#--
-----
#-##-";

fn report(solver: &Solver, source: Cell, dest: Cell) {
    println!("{source} -> {dest}:");
    match solver.solve(source, dest) {
        Ok(Solution::Paths(paths)) => {
            for path in &paths {
                println!("  {path}");
            }
        }
        Ok(Solution::Unreachable) => println!("  unreachable"),
        Err(err) => println!("  invalid query: {err}"),
    }
    println!();
}

fn run(name: &str, text: &str, queries: &[(Cell, Cell)]) -> Result<(), warren_core::GridError> {
    let solver = Solver::new(Grid::parse(text)?);
    let grid = solver.grid();
    println!("=== {name} ({}x{}) ===", grid.rows(), grid.cols());
    println!("{grid}");
    println!();
    for &(source, dest) in queries {
        report(&solver, source, dest);
    }
    Ok(())
}

fn main() {
    let mazes = [
        (
            "maze A",
            MAZE_A,
            vec![
                (Cell::new(0, 2), Cell::new(2, 2)),
                (Cell::new(0, 0), Cell::new(4, 0)),
                (Cell::new(0, 0), Cell::new(4, 4)),
                (Cell::new(4, 4), Cell::new(0, 0)),
                (Cell::new(1, 1), Cell::new(1, 1)),
            ],
        ),
        (
            "maze B",
            MAZE_B,
            vec![
                (Cell::new(0, 0), Cell::new(4, 3)),
                (Cell::new(0, 0), Cell::new(1, 0)),
            ],
        ),
        ("maze C", MAZE_C, vec![(Cell::new(0, 0), Cell::new(3, 4))]),
    ];

    for (name, text, queries) in mazes {
        if let Err(e) = run(name, text, &queries) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
