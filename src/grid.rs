use std::{fmt, ops::RangeInclusive};

use num_traits::Zero;
use rand::Rng;

use crate::collections::FxIndexMap;
use crate::errors::GridError;


/// Cell position on the grid, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


/// Move between orthogonally adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Enumeration order used when expanding a cell
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Apply the move to `from`, `None` if it would leave the grid on the low side
    fn step(self, from: Coord) -> Option<Coord> {
        match self {
            Action::Up => from.y.checked_sub(1).map(|y| Coord::new(from.x, y)),
            Action::Down => Some(Coord::new(from.x, from.y + 1)),
            Action::Left => from.x.checked_sub(1).map(|x| Coord::new(x, from.y)),
            Action::Right => Some(Coord::new(from.x + 1, from.y)),
        }
    }
}


/// Grid cell: either traversable with a cost for entering it, or a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<C> {
    Open(C),
    Wall,
}


/// Weighted 4-connected grid with a single start and end cell
/// Immutable once built, so it can be shared by any number of searches
#[derive(Debug, Clone)]
pub struct Grid<C = u32> {
    width: usize,
    height: usize,
    cells: Vec<Cell<C>>, // row-major
    start: Coord,
    end: Coord,
    min_cost: C, // cheapest open cell
}

impl<C: Zero + Ord + Copy> Grid<C> {

    /// Build a grid from row-major cells
    /// Start and end must be open in-bounds cells and every cost must be non-negative.
    /// Searches add costs with plain `+`, so the cost of any path must fit in `C`.
    pub fn new(width: usize, height: usize, cells: Vec<Cell<C>>, start: Coord, end: Coord) -> Result<Self, GridError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch { expected, found: cells.len() });
        }

        let min_cost = cells.iter()
            .filter_map(|c| match c {
                Cell::Open(cost) => Some(*cost),
                Cell::Wall => None,
            })
            .min()
            .unwrap_or_else(C::zero);

        let grid = Self { width, height, cells, start, end, min_cost };

        for endpoint in [start, end] {
            match grid.cell(endpoint) {
                None => return Err(GridError::OutOfBounds(endpoint)),
                Some(Cell::Wall) => return Err(GridError::Blocked(endpoint)),
                Some(Cell::Open(_)) => {}
            }
        }

        if let Some(index) = grid.cells.iter().position(|c| matches!(c, Cell::Open(cost) if *cost < C::zero())) {
            return Err(GridError::NegativeCost(grid.coord(index)));
        }

        Ok(grid)
    }

    /// Obstacle-free grid where every cell has the same cost
    pub fn uniform(width: usize, height: usize, cost: C, start: Coord, end: Coord) -> Result<Self, GridError> {
        let count = cell_count(width, height)?;
        Self::new(width, height, vec![Cell::Open(cost); count], start, end)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Cost of the cheapest open cell, a lower bound on every move
    pub fn min_cost(&self) -> C {
        self.min_cost
    }

    pub fn contains(&self, state: Coord) -> bool {
        state.x < self.width && state.y < self.height
    }

    /// Cell at `state`, `None` when out of bounds
    pub fn cell(&self, state: Coord) -> Option<&Cell<C>> {
        if self.contains(state) {
            self.cells.get(self.index(state))
        } else {
            None
        }
    }

    pub fn is_wall(&self, state: Coord) -> bool {
        matches!(self.cell(state), Some(Cell::Wall))
    }

    /// Cost of entering `state`
    ///
    /// # Panics
    /// If `state` is out of bounds or a wall. Searches only query states
    /// returned by [`Grid::get_neighbours`], which never yields either.
    pub fn get_cost(&self, state: Coord) -> C {
        match self.cell(state) {
            Some(Cell::Open(cost)) => *cost,
            Some(Cell::Wall) => panic!("cost queried for wall at {state}"),
            None => panic!("cost queried for {state} outside the grid"),
        }
    }

    /// In-bounds, non-wall neighbours of `state`, keyed by the move that reaches them
    pub fn get_neighbours(&self, state: Coord) -> FxIndexMap<Action, Coord> {
        let mut neighbours = FxIndexMap::default();
        for action in Action::ALL {
            if let Some(next) = action.step(state) {
                if matches!(self.cell(next), Some(Cell::Open(_))) {
                    neighbours.insert(action, next);
                }
            }
        }
        neighbours
    }

    /// Every coordinate of the grid in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord(i))
    }

    fn index(&self, state: Coord) -> usize {
        state.y * self.width + state.x
    }

    fn coord(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    width.checked_mul(height).ok_or(GridError::TooLarge { width, height })
}

impl Grid<u32> {

    /// Random grid for testing and benchmarking
    /// Each cell is a wall with probability `wall_probability` (NaN counts as 0),
    /// otherwise its cost is drawn from `costs`; an empty range means every cell costs its start.
    /// Start and end are picked at random and always left open.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize, wall_probability: f64, costs: RangeInclusive<u32>) -> Result<Self, GridError> {
        let count = cell_count(width, height)?;
        let costs = *costs.start()..=(*costs.start()).max(*costs.end());
        let wall_probability = if wall_probability.is_nan() {
            0.0
        } else {
            wall_probability.clamp(0.0, 1.0)
        };

        let mut cells: Vec<Cell<u32>> = (0..count)
            .map(|_| {
                if rng.random_bool(wall_probability) {
                    Cell::Wall
                } else {
                    Cell::Open(rng.random_range(costs.clone()))
                }
            })
            .collect();

        let start = Coord::new(rng.random_range(0..width), rng.random_range(0..height));
        let end = Coord::new(rng.random_range(0..width), rng.random_range(0..height));
        for endpoint in [start, end] {
            let i = endpoint.y * width + endpoint.x;
            if cells[i] == Cell::Wall {
                cells[i] = Cell::Open(rng.random_range(costs.clone()));
            }
        }

        Self::new(width, height, cells, start, end)
    }
}
