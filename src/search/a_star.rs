use crate::grid::Grid;

use super::best_first::best_first;
use super::solution::Outcome;
use super::{manhattan, min_path_cost, Cost, SearchStrategy};


/// Heuristic used to order the A* queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AStarHeuristic {
    /// Manhattan distance from the node to the goal, times the grid's cheapest cell cost.
    /// Never overestimates, so paths are cheapest on any grid with non-negative costs;
    /// it degrades to zero (uniform-cost order) when some cell is free.
    #[default]
    Goal,
    /// Manhattan distance from the node to its parent (always 1 on a 4-connected
    /// grid, 0 for the root). Reproduces the legacy ordering, which is a constant
    /// offset on cost and so behaves like uniform-cost search.
    ParentStep,
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Priority is accumulated cost plus the heuristic; everything else matches
/// uniform-cost search (goal test on pop, cost-based pruning).
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSearch {
    pub heuristic: AStarHeuristic,
}

impl AStarSearch {
    pub fn new(heuristic: AStarHeuristic) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStarSearch {

    fn name(&self) -> &'static str {
        "A* Search"
    }

    fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C> {
        let end = grid.end();
        match self.heuristic {
            AStarHeuristic::Goal => {
                let step = grid.min_cost();
                best_first(self.name(), grid, |state, _, cost| cost + min_path_cost(state, end, step))
            }
            AStarHeuristic::ParentStep => {
                best_first(self.name(), grid, |state, parent, cost| match parent {
                    Some(parent) => cost + manhattan(state, parent),
                    None => cost,
                })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Coord};
    use crate::search::UniformCostSearch;

    fn detour_grid() -> Grid<u32> {
        // s 9 9 g
        // 1 1 1 1
        let cells = vec![
            Cell::Open(1), Cell::Open(9), Cell::Open(9), Cell::Open(1),
            Cell::Open(1), Cell::Open(1), Cell::Open(1), Cell::Open(1),
        ];
        Grid::new(4, 2, cells, Coord::new(0, 0), Coord::new(3, 0)).unwrap()
    }

    #[test]
    fn test_a_star_finds_cheapest_path() {
        let grid = detour_grid();
        let solution = AStarSearch::default().search(&grid).into_result().unwrap();
        assert_eq!(solution.cost(), 5);
        assert_eq!(solution.len(), 5);
    }

    #[test]
    fn test_a_star_with_free_cells_stays_cheapest() {
        // s(0) 1 1 g
        // 0    # # 0
        // 0    0 0 0
        // Plain Manhattan distance would overestimate along the free detour
        let cells = vec![
            Cell::Open(0u32), Cell::Open(1), Cell::Open(1), Cell::Open(1),
            Cell::Open(0), Cell::Wall, Cell::Wall, Cell::Open(0),
            Cell::Open(0), Cell::Open(0), Cell::Open(0), Cell::Open(0),
        ];
        let grid = Grid::new(4, 3, cells, Coord::new(0, 0), Coord::new(3, 0)).unwrap();
        assert_eq!(grid.min_cost(), 0);

        let a_star = AStarSearch::default().search(&grid).into_result().unwrap();
        let uniform = UniformCostSearch.search(&grid).into_result().unwrap();

        assert_eq!(uniform.cost(), 1);
        assert_eq!(a_star.cost(), 1);
        assert_eq!(a_star.len(), 7);
    }

    #[test]
    fn test_heuristic_scales_with_cheapest_cell() {
        let grid = Grid::uniform(12, 12, 3u32, Coord::new(0, 0), Coord::new(11, 11)).unwrap();

        let a_star = AStarSearch::default().search(&grid);
        let uniform = UniformCostSearch.search(&grid);

        assert_eq!(a_star.solution().unwrap().cost(), 66);
        assert_eq!(uniform.solution().unwrap().cost(), 66);
        assert!(a_star.stats().expanded <= uniform.stats().expanded);
    }

    #[test]
    fn test_a_star_expands_no_more_than_ucs() {
        let grid = Grid::uniform(12, 12, 1u32, Coord::new(0, 0), Coord::new(11, 11)).unwrap();

        let a_star = AStarSearch::default().search(&grid);
        let uniform = UniformCostSearch.search(&grid);

        assert_eq!(a_star.solution().unwrap().cost(), 22);
        assert!(a_star.stats().expanded <= uniform.stats().expanded);
    }

    #[test]
    fn test_parent_step_heuristic_matches_ucs() {
        let grid = detour_grid();

        let legacy = AStarSearch::new(AStarHeuristic::ParentStep).search(&grid).into_result().unwrap();
        let uniform = UniformCostSearch.search(&grid).into_result().unwrap();

        assert_eq!(legacy.cost(), uniform.cost());
        assert_eq!(legacy.states(), uniform.states());
    }
}
