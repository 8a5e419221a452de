use nalgebra::Vector2;

use crate::{point::Point, side::Side};

/// Line `a (x - x_bar) + b (y - y_bar) = 0` through the centroid, together
/// with the median threshold that balanced the bisection it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub a: f64,
    pub b: f64,
    pub centroid: Vector2<f64>,
    pub threshold: f64,
}

impl Axis {
    pub fn x_bar(&self) -> f64 {
        self.centroid.x
    }

    pub fn y_bar(&self) -> f64 {
        self.centroid.y
    }

    /// Signed projection `s = a (y - y_bar) - b (x - x_bar)`.
    pub fn projection(&self, point: &Point) -> f64 {
        let d = point.position() - self.centroid;
        self.a * d.y - self.b * d.x
    }

    /// Value of the line equation at `point`.
    pub fn evaluate(&self, point: &Point) -> f64 {
        let d = point.position() - self.centroid;
        self.a * d.x + self.b * d.y
    }

    pub fn side_of(&self, point: &Point) -> Side {
        self.side_of_projection(self.projection(point))
    }

    pub(crate) fn side_of_projection(&self, s: f64) -> Side {
        if s < self.threshold {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Whether both points fall on the same side of the line itself. Points on
    /// the line count as being on either side.
    pub fn are_on_same_side(&self, p: &Point, q: &Point) -> bool {
        self.evaluate(p) * self.evaluate(q) >= 0.0
    }
}
