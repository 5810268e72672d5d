pub mod frontier;
pub mod node;
pub mod solution;
mod path;
mod best_first;
mod bfs;
mod dfs;
mod ucs;
mod gbfs;
mod a_star;

pub use a_star::{AStarHeuristic, AStarSearch};
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use gbfs::GreedyBestFirstSearch;
pub use ucs::UniformCostSearch;
pub use node::Node;
pub use solution::{Explored, NoSolution, Outcome, SearchStats, Solution};

use std::{fmt, fmt::Debug, str::FromStr};

use num_traits::{CheckedMul, FromPrimitive, Zero};

use crate::geometry::coord_distance;
use crate::grid::{Coord, Grid};


/// Bound for cell and path costs
/// Ord keeps the priority queue total; FromPrimitive and CheckedMul let heuristics
/// express distances as costs. Path costs (plus heuristic) must fit in the type.
pub trait Cost: Zero + Ord + Copy + Debug + FromPrimitive + CheckedMul {}
impl<T> Cost for T where T: Zero + Ord + Copy + Debug + FromPrimitive + CheckedMul {}

/// Manhattan distance in cost units, zero if it does not fit in `C`
pub(crate) fn manhattan<C: Cost>(a: Coord, b: Coord) -> C {
    C::from_usize(coord_distance(a, b)).unwrap_or_else(C::zero)
}

/// Lower bound on the cost of moving from `a` to `b` when every move costs at least `step`
/// Zero if the product does not fit in `C`
pub(crate) fn min_path_cost<C: Cost>(a: Coord, b: Coord, step: C) -> C {
    manhattan::<C>(a, b).checked_mul(&step).unwrap_or_else(C::zero)
}


/// A path-finding strategy over a [`Grid`]
/// Each call is independent: the grid is only read, and all search state is local to the call.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    /// Run from `grid.start()` until `grid.end()` is reached or the frontier is exhausted
    fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C>;
}


/// Strategy selector, for choosing an algorithm by name at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => BreadthFirstSearch.name(),
            Algorithm::DepthFirst => DepthFirstSearch.name(),
            Algorithm::UniformCost => UniformCostSearch.name(),
            Algorithm::GreedyBestFirst => GreedyBestFirstSearch.name(),
            Algorithm::AStar => AStarSearch::default().name(),
        }
    }

    /// Whether the returned path is guaranteed cheapest on any grid with non-negative costs
    /// (A* with its default, goal-directed heuristic)
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::UniformCost | Algorithm::AStar)
    }

    pub fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C> {
        match self {
            Algorithm::BreadthFirst => BreadthFirstSearch.search(grid),
            Algorithm::DepthFirst => DepthFirstSearch.search(grid),
            Algorithm::UniformCost => UniformCostSearch.search(grid),
            Algorithm::GreedyBestFirst => GreedyBestFirstSearch.search(grid),
            Algorithm::AStar => AStarSearch::default().search(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "bfs" | "breadth_first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth_first" => Ok(Algorithm::DepthFirst),
            "ucs" | "uniform_cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "gbfs" | "greedy" | "greedy_best_first" => Ok(Algorithm::GreedyBestFirst),
            "astar" | "a_star" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
