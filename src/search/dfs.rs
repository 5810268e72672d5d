use log::{debug, trace};

use crate::collections::FxIndexSet;
use crate::grid::Grid;

use super::frontier::{Frontier, StackFrontier};
use super::node::SearchTree;
use super::path::trace_path;
use super::solution::{Explored, NoSolution, Outcome, SearchStats, Solution};
use super::{Cost, SearchStrategy};


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
///
/// States are marked explored when popped, not when pushed: the stack may hold
/// several entries for one state and the stale ones are dropped on pop.
/// Successors are goal-tested before being pushed. No optimality guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl SearchStrategy for DepthFirstSearch {

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }

    fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C> {
        debug!("{}: {} -> {}", self.name(), grid.start(), grid.end());

        let mut tree = SearchTree::new();
        let mut stats = SearchStats::default();

        let root = tree.root(grid.start(), C::zero());
        stats.generated += 1;

        let mut explored = FxIndexSet::default();

        if grid.start() == grid.end() {
            return Outcome::Solution(Solution::new(trace_path(&tree, root), Explored::Visited(explored), stats));
        }

        let mut frontier = StackFrontier::new();
        frontier.add(root);
        stats.max_frontier = 1;

        while let Some(index) = frontier.remove() {
            let (state, cost) = {
                let node = tree.get(index);
                (node.state, node.cost)
            };

            // already expanded through another entry
            if !explored.insert(state) {
                continue;
            }
            stats.expanded += 1;
            trace!("expand {state} at cost {cost:?}");

            for (action, new_state) in grid.get_neighbours(state) {
                if explored.contains(&new_state) {
                    continue;
                }

                let child = tree.child(index, new_state, cost + grid.get_cost(new_state), action);
                stats.generated += 1;

                if new_state == grid.end() {
                    debug!("{}: goal reached, {stats}", self.name());
                    return Outcome::Solution(Solution::new(trace_path(&tree, child), Explored::Visited(explored), stats));
                }

                frontier.add(child);
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        debug!("{}: frontier exhausted, {stats}", self.name());
        Outcome::NoSolution(NoSolution::new(Explored::Visited(explored), stats))
    }
}
