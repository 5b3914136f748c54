//! All-shortest-paths search on binary occupancy grids.
//!
//! Two cooperating phases over one immutable [`Grid`](warren_core::Grid):
//!
//! - **Distance field** ([`DistanceField`]): a breadth-first search from
//!   the source that records the shortest-path distance of every cell it
//!   reaches, stopping early once the destination is dequeued.
//! - **Path enumeration**: a depth-first, distance-guided backtracking
//!   walk that visits only cells whose recorded distance matches the
//!   current depth, retiring provably fruitless cells as dead ends, and
//!   so collects **every** minimum-length path exactly once.
//!
//! [`Solver`] ties the phases together: it validates the endpoints,
//! short-circuits the degenerate source-equals-destination query, and
//! reports an unreachable destination as a normal [`Solution`] variant
//! rather than an error. All per-query state is local to one
//! [`Solver::solve`] call, so one solver can serve any number of
//! independent queries.

mod distance;
mod enumerate;
mod solver;

pub use distance::DistanceField;
pub use solver::{ShortestPath, SolveError, Solution, Solver};
