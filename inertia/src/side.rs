use std::fmt;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{axis::Axis, point::Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn value(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Side codes of `point` against every axis, in axis order, e.g. `"0110"`.
pub fn binary_code(point: &Point, axes: &[Axis]) -> String {
    axes.iter().map(|axis| axis.side_of(point).to_string()).collect()
}

pub fn binary_codes(points: &[Point], axes: &[Axis]) -> Vec<String> {
    points
        .into_par_iter()
        .map(|point| binary_code(point, axes))
        .collect()
}
