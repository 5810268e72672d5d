use log::{debug, trace};

use crate::collections::FxIndexMap;
use crate::grid::{Coord, Grid};

use super::frontier::{Frontier, PriorityQueueFrontier};
use super::node::SearchTree;
use super::path::trace_path;
use super::solution::{Explored, NoSolution, Outcome, SearchStats, Solution};
use super::Cost;


/// Priority-queue search loop shared by the cost-aware strategies
///
/// `priority(state, parent_state, cost)` is evaluated once per node, when it is queued.
/// The explored map holds the best cost seen per state; a successor is only
/// created when its state is new or strictly cheaper than that. Stale, dearer
/// queue entries are not retracted and get expanded again when popped.
/// The goal test runs on pop.
pub(crate) fn best_first<C, P>(name: &str, grid: &Grid<C>, priority: P) -> Outcome<C>
where
    C: Cost,
    P: Fn(Coord, Option<Coord>, C) -> C,
{
    debug!("{name}: {} -> {}", grid.start(), grid.end());

    let mut tree = SearchTree::new();
    let mut stats = SearchStats::default();

    // visited states with the cheapest known cost to reach them
    let mut explored: FxIndexMap<Coord, C> = FxIndexMap::default();

    let root = tree.root(grid.start(), C::zero());
    stats.generated += 1;
    explored.insert(grid.start(), C::zero());

    let mut frontier = PriorityQueueFrontier::new();
    frontier.add(root, priority(grid.start(), None, C::zero()));
    stats.max_frontier = 1;

    while let Some(index) = frontier.pop() {
        let (state, cost) = {
            let node = tree.get(index);
            (node.state, node.cost)
        };

        if state == grid.end() {
            debug!("{name}: goal reached at cost {cost:?}, {stats}");
            return Outcome::Solution(Solution::new(trace_path(&tree, index), Explored::Costs(explored), stats));
        }

        stats.expanded += 1;
        trace!("expand {state} at cost {cost:?}");

        for (action, new_state) in grid.get_neighbours(state) {
            let new_cost = cost + grid.get_cost(new_state);

            match explored.get(&new_state) {
                Some(&best) if best <= new_cost => continue,
                _ => {}
            }

            let child = tree.child(index, new_state, new_cost, action);
            stats.generated += 1;
            explored.insert(new_state, new_cost);
            frontier.add(child, priority(new_state, Some(state), new_cost));
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    debug!("{name}: frontier exhausted, {stats}");
    Outcome::NoSolution(NoSolution::new(Explored::Costs(explored), stats))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_cheaper_path_does_not_retract_stale_entry() {
        // Constant priority pops in insertion order, so the goal is first queued
        // through the 9 and later re-queued more cheaply via (1,1)
        // s 1
        // 1 1
        // 9 g
        let cells = vec![
            Cell::Open(1u32), Cell::Open(1),
            Cell::Open(1), Cell::Open(1),
            Cell::Open(9), Cell::Open(1),
        ];
        let goal = Coord::new(1, 2);
        let grid = Grid::new(2, 3, cells, Coord::new(0, 0), goal).unwrap();

        let solution = best_first("test", &grid, |_, _, _| 0u32).into_result().unwrap();

        // The cheaper entry updated the map but the earlier one was popped first
        assert_eq!(solution.explored().cost(&goal), Some(3));
        assert_eq!(solution.cost(), 11);
        assert_eq!(solution.explored().cost(&Coord::new(1, 1)), Some(2));
    }

    #[test]
    fn test_cost_priority_pops_cheapest_goal() {
        let cells = vec![
            Cell::Open(1u32), Cell::Open(1),
            Cell::Open(1), Cell::Open(1),
            Cell::Open(9), Cell::Open(1),
        ];
        let grid = Grid::new(2, 3, cells, Coord::new(0, 0), Coord::new(1, 2)).unwrap();

        let solution = best_first("test", &grid, |_, _, cost| cost).into_result().unwrap();
        assert_eq!(solution.cost(), 3);
    }

    #[test]
    fn test_unreachable_goal_records_every_reachable_state() {
        // s # g
        let cells = vec![Cell::Open(1u32), Cell::Wall, Cell::Open(1)];
        let grid = Grid::new(3, 1, cells, Coord::new(0, 0), Coord::new(2, 0)).unwrap();

        let outcome = best_first("test", &grid, |_, _, cost| cost);
        assert!(!outcome.is_solution());
        assert_eq!(outcome.explored().states(), vec![Coord::new(0, 0)]);
        assert_eq!(outcome.stats().expanded, 1);
    }
}
