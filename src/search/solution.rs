use std::fmt;

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::SearchError;
use crate::grid::{Action, Coord};

use super::node::Node;


/// States a search committed to
/// Uninformed strategies only record visits, cost-aware ones record the best cost seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explored<C> {
    Visited(FxIndexSet<Coord>),
    Costs(FxIndexMap<Coord, C>),
}

impl<C: Copy> Explored<C> {
    pub fn contains(&self, state: &Coord) -> bool {
        match self {
            Explored::Visited(set) => set.contains(state),
            Explored::Costs(map) => map.contains_key(state),
        }
    }

    /// Best known cost, only available for cost-aware strategies
    pub fn cost(&self, state: &Coord) -> Option<C> {
        match self {
            Explored::Visited(_) => None,
            Explored::Costs(map) => map.get(state).copied(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Explored::Visited(set) => set.len(),
            Explored::Costs(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explored states in the order they were first recorded
    pub fn states(&self) -> Vec<Coord> {
        match self {
            Explored::Visited(set) => set.iter().copied().collect(),
            Explored::Costs(map) => map.keys().copied().collect(),
        }
    }
}


/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes removed from the frontier and expanded
    pub generated: usize, // nodes created, root included
    pub max_frontier: usize, // largest frontier size observed
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expanded {}, generated {}, max frontier {}", self.expanded, self.generated, self.max_frontier)
    }
}


/// Goal reached: the path from start to goal plus the explored record
#[derive(Debug, Clone)]
pub struct Solution<C> {
    path: Vec<Node<C>>, // root first, parents index into this vector
    explored: Explored<C>,
    stats: SearchStats,
}

impl<C: Copy> Solution<C> {

    pub(crate) fn new(path: Vec<Node<C>>, explored: Explored<C>, stats: SearchStats) -> Self {
        debug_assert!(!path.is_empty());
        Self { path, explored, stats }
    }

    /// Terminal node, its state is the goal
    pub fn node(&self) -> &Node<C> {
        &self.path[self.path.len() - 1]
    }

    /// Nodes from start to goal
    pub fn path(&self) -> &[Node<C>] {
        &self.path
    }

    pub fn parent(&self, node: &Node<C>) -> Option<&Node<C>> {
        node.parent.map(|i| &self.path[i])
    }

    pub fn states(&self) -> Vec<Coord> {
        self.path.iter().map(|n| n.state).collect()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.path.iter().filter_map(|n| n.action).collect()
    }

    /// Total path cost: sum of entry costs of every cell after the start
    pub fn cost(&self) -> C {
        self.node().cost
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn explored(&self) -> &Explored<C> {
        &self.explored
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}


/// Frontier exhausted without reaching the goal
#[derive(Debug, Clone)]
pub struct NoSolution<C> {
    explored: Explored<C>,
    stats: SearchStats,
}

impl<C: Copy> NoSolution<C> {

    pub(crate) fn new(explored: Explored<C>, stats: SearchStats) -> Self {
        Self { explored, stats }
    }

    pub fn explored(&self) -> &Explored<C> {
        &self.explored
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}


/// Result of running a strategy
#[derive(Debug, Clone)]
pub enum Outcome<C> {
    Solution(Solution<C>),
    NoSolution(NoSolution<C>),
}

impl<C: Copy> Outcome<C> {

    pub fn is_solution(&self) -> bool {
        matches!(self, Outcome::Solution(_))
    }

    pub fn solution(&self) -> Option<&Solution<C>> {
        match self {
            Outcome::Solution(s) => Some(s),
            Outcome::NoSolution(_) => None,
        }
    }

    pub fn explored(&self) -> &Explored<C> {
        match self {
            Outcome::Solution(s) => s.explored(),
            Outcome::NoSolution(n) => n.explored(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Outcome::Solution(s) => s.stats(),
            Outcome::NoSolution(n) => n.stats(),
        }
    }

    pub fn into_result(self) -> Result<Solution<C>, SearchError> {
        match self {
            Outcome::Solution(s) => Ok(s),
            Outcome::NoSolution(_) => Err(SearchError::NoPathFound),
        }
    }
}
