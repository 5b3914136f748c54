use std::collections::VecDeque;

use warren_core::{Cell, Grid};

/// Per-cell shortest-path distances from a fixed source, as computed by
/// breadth-first search.
///
/// `Some(d)` means the cell was reached in exactly `d` steps through open
/// cells; `None` that the search never visited it, either because it is
/// unreachable or because it lies beyond the destination and the search
/// terminated early.
#[derive(Debug, Clone)]
pub struct DistanceField {
    dist: Vec<Option<u32>>,
    cols: i32,
}

impl DistanceField {
    /// Run a breadth-first search from `source`, stopping as soon as
    /// `dest` is dequeued.
    ///
    /// Every step has cost 1 and moves through open cells only, probing
    /// neighbours in the fixed order up, down, left, right. A cell's
    /// distance is recorded once, when it is first enqueued. The caller
    /// is expected to have validated that `source` is open and in bounds.
    pub fn build(grid: &Grid, source: Cell, dest: Cell) -> Self {
        let mut field = Self {
            dist: vec![None; (grid.rows() * grid.cols()) as usize],
            cols: grid.cols(),
        };
        let mut queue: VecDeque<Cell> = VecDeque::new();
        field.set(source, 0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            // The destination's distance is final once dequeued; anything
            // still in the queue can only be at the same distance or one
            // further out.
            if current == dest {
                break;
            }
            let Some(d) = field.get(current) else {
                continue;
            };
            for next in current.neighbors4() {
                if grid.is_open(next) && field.get(next).is_none() {
                    field.set(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        field
    }

    /// The recorded distance of a cell, or `None` if the search never
    /// visited it (out-of-bounds cells are never visited).
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.dist[self.idx(cell)?]
    }

    #[inline]
    fn set(&mut self, cell: Cell, d: u32) {
        if let Some(i) = self.idx(cell) {
            self.dist[i] = Some(d);
        }
    }

    /// Flat row-major index of a cell, or `None` if out of range.
    #[inline]
    fn idx(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 || cell.col >= self.cols {
            return None;
        }
        let i = (cell.row * self.cols + cell.col) as usize;
        if i < self.dist.len() { Some(i) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
-----
--#--
-----
#-##-
-#---";

    #[test]
    fn distances_from_source() {
        let grid = Grid::parse(MAZE).unwrap();
        let field = DistanceField::build(&grid, Cell::new(0, 2), Cell::new(2, 2));
        assert_eq!(field.get(Cell::new(0, 2)), Some(0));
        assert_eq!(field.get(Cell::new(0, 1)), Some(1));
        assert_eq!(field.get(Cell::new(0, 3)), Some(1));
        assert_eq!(field.get(Cell::new(1, 1)), Some(2));
        assert_eq!(field.get(Cell::new(2, 1)), Some(3));
        assert_eq!(field.get(Cell::new(2, 2)), Some(4));
        // Blocked cells are never visited.
        assert_eq!(field.get(Cell::new(1, 2)), None);
    }

    #[test]
    fn early_termination_leaves_far_cells_unvisited() {
        let grid = Grid::parse(MAZE).unwrap();
        let field = DistanceField::build(&grid, Cell::new(0, 2), Cell::new(2, 2));
        // (3, 4) would be discovered from (2, 4), which is still queued
        // when the destination is dequeued at distance 4.
        assert_eq!(field.get(Cell::new(3, 4)), None);
        assert_eq!(field.get(Cell::new(4, 2)), None);
    }

    #[test]
    fn full_field_without_early_exit() {
        let grid = Grid::parse(MAZE).unwrap();
        // (4, 0) is walled off, so the search exhausts the whole
        // component, labelling everything connected to the source.
        let field = DistanceField::build(&grid, Cell::new(0, 0), Cell::new(4, 0));
        assert_eq!(field.get(Cell::new(4, 4)), Some(8));
        assert_eq!(field.get(Cell::new(3, 4)), Some(7));
        assert_eq!(field.get(Cell::new(4, 0)), None);
    }

    #[test]
    fn unreachable_destination_stays_unvisited() {
        let grid = Grid::parse("---\n###\n---").unwrap();
        let field = DistanceField::build(&grid, Cell::new(0, 0), Cell::new(2, 0));
        assert_eq!(field.get(Cell::new(2, 0)), None);
        assert_eq!(field.get(Cell::new(0, 2)), Some(2));
    }

    #[test]
    fn source_equals_destination() {
        let grid = Grid::parse("--\n--").unwrap();
        let field = DistanceField::build(&grid, Cell::new(0, 0), Cell::new(0, 0));
        assert_eq!(field.get(Cell::new(0, 0)), Some(0));
        // Dequeued immediately, so no neighbour was ever explored.
        assert_eq!(field.get(Cell::new(0, 1)), None);
    }

    #[test]
    fn out_of_range_queries_are_none() {
        let grid = Grid::parse("--\n--").unwrap();
        let field = DistanceField::build(&grid, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(field.get(Cell::new(-1, 0)), None);
        assert_eq!(field.get(Cell::new(0, -1)), None);
        assert_eq!(field.get(Cell::new(2, 0)), None);
        assert_eq!(field.get(Cell::new(0, 2)), None);
    }
}
