//! Exhaustive enumeration of minimum-length paths.
//!
//! Depth-first walk over the shortest-path DAG induced by a
//! [`DistanceField`]: from a cell at depth `d`, only neighbours whose
//! recorded distance is exactly `d + 1` are candidates, so every branch
//! either reaches the destination in exactly the minimum number of steps
//! or dies out. Cells from which no branch reaches the destination are
//! marked as dead ends and never re-entered: a cell is only ever visited
//! at the depth equal to its BFS distance, so the mark stays valid no
//! matter which prefix leads there.

use warren_core::{Cell, Direction, Grid};

use crate::distance::DistanceField;
use crate::solver::ShortestPath;

/// One step of the walk: a cell on the partial path, the next direction
/// to probe from it, and whether any completed path runs through it.
struct Frame {
    cell: Cell,
    probe: usize,
    routed: bool,
}

impl Frame {
    fn new(cell: Cell) -> Self {
        Self {
            cell,
            probe: 0,
            routed: false,
        }
    }
}

/// Collect every path from `source` to `dest` of length exactly
/// `min_dist`, in discovery order (up before down before left before
/// right at every branch).
///
/// `field` must have been built from `source`, with `min_dist` the
/// distance it recorded for `dest`.
pub(crate) fn all_shortest_paths(
    grid: &Grid,
    field: &DistanceField,
    source: Cell,
    dest: Cell,
    min_dist: u32,
) -> Vec<ShortestPath> {
    let cols = grid.cols();
    let mut deadends = vec![false; (grid.rows() * cols) as usize];
    let idx = |cell: Cell| (cell.row * cols + cell.col) as usize;

    let mut results = Vec::new();
    let mut frames = vec![Frame::new(source)];
    // The partial path and its direction trail, pushed and popped in
    // lock-step with `frames`. The current position is the path tail.
    let mut path = vec![source];
    let mut trail = String::new();

    loop {
        let Some(top) = frames.len().checked_sub(1) else {
            break;
        };
        let depth = top as u32;
        let cell = frames[top].cell;

        if cell == dest {
            // Reached at depth == min_dist by construction.
            results.push(ShortestPath {
                cells: path.clone(),
                directions: trail.clone(),
            });
            frames[top].routed = true;
        } else if depth < min_dist {
            let mut stepped = false;
            while frames[top].probe < Direction::ALL.len() {
                let dir = Direction::ALL[frames[top].probe];
                frames[top].probe += 1;
                let next = cell.step(dir);
                if !grid.in_bounds(next)
                    || field.get(next) != Some(depth + 1)
                    || deadends[idx(next)]
                {
                    continue;
                }
                path.push(next);
                trail.push(dir.glyph());
                frames.push(Frame::new(next));
                stepped = true;
                break;
            }
            if stepped {
                continue;
            }
        }

        // No further moves from this cell: unwind one step. A cell that
        // routed no path cannot do so from any other prefix either, so it
        // becomes a dead end for the rest of the enumeration.
        if let Some(done) = frames.pop() {
            path.pop();
            trail.pop();
            if done.routed {
                if let Some(parent) = frames.last_mut() {
                    parent.routed = true;
                }
            } else {
                deadends[idx(done.cell)] = true;
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, source: Cell, dest: Cell) -> Vec<ShortestPath> {
        let grid = Grid::parse(text).unwrap();
        let field = DistanceField::build(&grid, source, dest);
        let min = field.get(dest).unwrap();
        all_shortest_paths(&grid, &field, source, dest, min)
    }

    fn directions(paths: &[ShortestPath]) -> Vec<&str> {
        paths.iter().map(|p| p.directions.as_str()).collect()
    }

    #[test]
    fn open_corridor_discovery_order() {
        // All three length-3 routes, down-first at every branch.
        let paths = run("---\n---", Cell::new(0, 0), Cell::new(1, 2));
        assert_eq!(directions(&paths), vec!["DRR", "RDR", "RRD"]);
        assert_eq!(
            paths[0].cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn shared_cells_are_revisited() {
        // Every route through the open 3x3 square shares interior cells;
        // none of them may be retired as dead ends.
        let paths = run("---\n---\n---", Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(
            directions(&paths),
            vec!["DDRR", "DRDR", "DRRD", "RDDR", "RDRD", "RRDD"]
        );
    }

    #[test]
    fn blocked_pocket_prunes_to_two_routes() {
        let paths = run("----\n-##-\n----", Cell::new(0, 0), Cell::new(2, 3));
        assert_eq!(directions(&paths), vec!["DDRRR", "RRRDD"]);
    }

    #[test]
    fn dead_end_arm_is_abandoned() {
        // The (3, 1) arm is reachable in time but leads nowhere; the
        // walk must retire it and still find every real route.
        let paths = run(
            "-----\n--#--\n-----\n#-##-\n-#---",
            Cell::new(0, 0),
            Cell::new(4, 4),
        );
        assert!(!paths.is_empty());
        for p in &paths {
            assert_eq!(p.steps(), 8);
            assert!(!p.cells.contains(&Cell::new(3, 1)));
        }
    }

    #[test]
    fn single_route_when_forced() {
        let paths = run("-#\n--", Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(directions(&paths), vec!["DR"]);
    }

    #[test]
    fn paths_are_simple_and_adjacent() {
        let paths = run("---\n---\n---", Cell::new(2, 0), Cell::new(0, 2));
        for p in &paths {
            for pair in p.cells.windows(2) {
                assert!(pair[1] == pair[0].step(Direction::Up)
                    || pair[1] == pair[0].step(Direction::Down)
                    || pair[1] == pair[0].step(Direction::Left)
                    || pair[1] == pair[0].step(Direction::Right));
            }
            let mut seen = p.cells.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), p.cells.len());
        }
    }
}
