use std::fmt;

use crate::grid::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid, // Width or height is zero
    TooLarge { width: usize, height: usize }, // width * height overflows usize
    DimensionMismatch { expected: usize, found: usize }, // Cell count != width * height
    OutOfBounds(Coord), // Start or end lies outside the grid
    Blocked(Coord), // Start or end lies on a wall
    NegativeCost(Coord), // Cell cost below zero
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    NoPathFound, // Frontier exhausted without reaching the goal
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid has no cells"),
            GridError::TooLarge { width, height } => write!(f, "{width}x{height} grid is too large"),
            GridError::DimensionMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            GridError::OutOfBounds(c) => write!(f, "{c} is outside the grid"),
            GridError::Blocked(c) => write!(f, "{c} is a wall"),
            GridError::NegativeCost(c) => write!(f, "{c} has a negative cost"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for GridError {}
impl std::error::Error for SearchError {}
