//! Path-finding over weighted 2D grids with five interchangeable strategies:
//! breadth-first, depth-first, uniform-cost, greedy best-first and A*.
//!
//! ```
//! use gridsearch::{Algorithm, Coord, Grid};
//!
//! let grid = Grid::uniform(3, 3, 1u32, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! let solution = Algorithm::AStar.search(&grid).into_result().unwrap();
//! assert_eq!(solution.cost(), 4);
//! ```

pub mod errors;
pub mod geometry;
pub mod grid;
pub mod search;
mod collections;

pub use collections::{FxIndexMap, FxIndexSet};
pub use errors::{GridError, SearchError};
pub use grid::{Action, Cell, Coord, Grid};
pub use search::{
    AStarHeuristic, AStarSearch, Algorithm, BreadthFirstSearch, Cost, DepthFirstSearch, Explored,
    GreedyBestFirstSearch, NoSolution, Node, Outcome, SearchStats, SearchStrategy, Solution,
    UniformCostSearch,
};
