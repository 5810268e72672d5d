use crate::grid::Grid;

use super::best_first::best_first;
use super::solution::Outcome;
use super::{manhattan, Cost, SearchStrategy};


/// Greedy Best-First Search
/// Orders the queue by Manhattan distance to the goal only. Path cost is still
/// tracked and still prunes dominated successors through the explored map.
/// Stops at the first goal popped, with no optimality guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirstSearch;

impl SearchStrategy for GreedyBestFirstSearch {

    fn name(&self) -> &'static str {
        "Greedy Best-First Search"
    }

    fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C> {
        let end = grid.end();
        best_first(self.name(), grid, |state, _, _| manhattan(state, end))
    }
}
