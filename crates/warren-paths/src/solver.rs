use std::fmt;

use warren_core::{Cell, Grid};

use crate::distance::DistanceField;
use crate::enumerate::all_shortest_paths;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One completed minimum-length path: the visited cells in order plus the
/// direction string, one `U`/`D`/`L`/`R` character per step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    pub cells: Vec<Cell>,
    pub directions: String,
}

impl ShortestPath {
    /// Number of steps (edges) in the path. Zero for the degenerate
    /// source-equals-destination path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        if !self.directions.is_empty() {
            write!(f, "  {}", self.directions)?;
        }
        Ok(())
    }
}

/// Outcome of a [`Solver::solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    /// Every minimum-length path, in discovery order. Never empty.
    Paths(Vec<ShortestPath>),
    /// The destination cannot be reached from the source. A normal
    /// outcome, not an error.
    Unreachable,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// All-shortest-paths solver over a binary occupancy [`Grid`].
///
/// A solver owns its grid and nothing else. All working state (the
/// distance field, the dead-end set, the partial path) lives inside one
/// [`solve`](Self::solve) call, so calls are independent of each other
/// and a solver may be shared and queried from multiple threads.
#[derive(Debug, Clone)]
pub struct Solver {
    grid: Grid,
}

impl Solver {
    /// Create a solver for the given grid.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// The grid being solved over.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Find every shortest path from `source` to `dest`.
    ///
    /// Both endpoints must be in bounds and open, otherwise a
    /// [`SolveError`] is returned before any search begins. If the
    /// destination is unreachable the result is
    /// [`Solution::Unreachable`]; when source equals destination the
    /// result is a single zero-step path containing just that cell.
    pub fn solve(&self, source: Cell, dest: Cell) -> Result<Solution, SolveError> {
        self.check_endpoint(source)?;
        self.check_endpoint(dest)?;

        if source == dest {
            return Ok(Solution::Paths(vec![ShortestPath {
                cells: vec![source],
                directions: String::new(),
            }]));
        }

        let field = DistanceField::build(&self.grid, source, dest);
        let Some(min_dist) = field.get(dest) else {
            log::debug!("no route from {source} to {dest}");
            return Ok(Solution::Unreachable);
        };

        let paths = all_shortest_paths(&self.grid, &field, source, dest, min_dist);
        log::debug!(
            "{} route(s) of length {min_dist} from {source} to {dest}",
            paths.len()
        );
        Ok(Solution::Paths(paths))
    }

    fn check_endpoint(&self, cell: Cell) -> Result<(), SolveError> {
        if !self.grid.in_bounds(cell) {
            return Err(SolveError::OutOfBounds { cell });
        }
        if !self.grid.is_open(cell) {
            return Err(SolveError::Blocked { cell });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SolveError
// ---------------------------------------------------------------------------

/// Input-validation errors, raised before any search work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// An endpoint lies outside the grid rectangle.
    OutOfBounds { cell: Cell },
    /// An endpoint sits on a blocked tile.
    Blocked { cell: Cell },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "solve: {cell} is out of bounds"),
            Self::Blocked { cell } => write!(f, "solve: {cell} is blocked"),
        }
    }
}

impl std::error::Error for SolveError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn shortest_path_round_trip() {
        let path = ShortestPath {
            cells: vec![Cell::new(0, 0), Cell::new(1, 0)],
            directions: "D".to_string(),
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: ShortestPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn solution_round_trip() {
        let solution = Solution::Unreachable;
        let json = serde_json::to_string(&solution).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, back);
    }
}
