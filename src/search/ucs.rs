use crate::grid::Grid;

use super::best_first::best_first;
use super::solution::Outcome;
use super::{Cost, SearchStrategy};


/// Uniform-Cost Search (Dijkstra without a precomputed distance table)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Nodes are ordered by accumulated cost and goal-tested on pop, which makes
/// the returned path cost minimal for non-negative cell costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSearch;

impl SearchStrategy for UniformCostSearch {

    fn name(&self) -> &'static str {
        "Uniform-Cost Search"
    }

    fn search<C: Cost>(&self, grid: &Grid<C>) -> Outcome<C> {
        best_first(self.name(), grid, |_, _, cost| cost)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Coord};

    #[test]
    fn test_ucs_goes_around_expensive_cells() {
        // s 9 g
        // 1 1 1
        let cells = vec![
            Cell::Open(1u32), Cell::Open(9), Cell::Open(1),
            Cell::Open(1), Cell::Open(1), Cell::Open(1),
        ];
        let grid = Grid::new(3, 2, cells, Coord::new(0, 0), Coord::new(2, 0)).unwrap();
        let solution = UniformCostSearch.search(&grid).into_result().unwrap();

        assert_eq!(solution.cost(), 4);
        assert_eq!(
            solution.states(),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_ucs_explored_map_holds_best_costs() {
        let grid = Grid::uniform(3, 3, 2u32, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let solution = UniformCostSearch.search(&grid).into_result().unwrap();

        assert_eq!(solution.cost(), 8);
        assert_eq!(solution.explored().cost(&Coord::new(0, 0)), Some(0));
        assert_eq!(solution.explored().cost(&Coord::new(1, 1)), Some(4));
        assert_eq!(solution.explored().cost(&Coord::new(2, 2)), Some(8));
    }

    #[test]
    fn test_ucs_with_wide_costs() {
        let grid = Grid::uniform(5, 1, 1_000_000_000u64, Coord::new(0, 0), Coord::new(4, 0)).unwrap();
        let solution = UniformCostSearch.search(&grid).into_result().unwrap();
        assert_eq!(solution.cost(), 4_000_000_000);
    }
}
