use std::fmt;

use nalgebra::Vector2;
use num_traits::AsPrimitive;

/// Caller supplied label. Carried along for bookkeeping only, never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, PartialEq)]
pub struct Point {
    id: PointId,
    position: Vector2<f64>,
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.id, self.position.x, self.position.y)
    }
}

impl Point {
    pub fn new(id: usize, x: impl AsPrimitive<f64>, y: impl AsPrimitive<f64>) -> Self {
        Self {
            id: PointId(id),
            position: Vector2::new(x.as_(), y.as_()),
        }
    }

    pub fn from_position(id: usize, position: Vector2<f64>) -> Self {
        Self {
            id: PointId(id),
            position,
        }
    }

    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn position(&self) -> &Vector2<f64> {
        &self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Regular `columns` x `rows` lattice with unit spacing. Ids run row-major,
    /// x is the column and y is the row.
    pub fn grid(columns: usize, rows: usize) -> Vec<Point> {
        (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (row, col)))
            .enumerate()
            .map(|(id, (row, col))| Point::new(id, col as f64, row as f64))
            .collect()
    }
}
