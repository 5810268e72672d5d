use num_traits::{Num, Signed};

use crate::grid::Coord;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Manhattan distance between two grid cells, in steps
pub fn coord_distance(a: Coord, b: Coord) -> usize {
    manhattan_distance(a.x as i64, a.y as i64, b.x as i64, b.y as i64) as usize
}
