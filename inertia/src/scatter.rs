//! Centered second moments of a point cloud and the closed-form eigen
//! solution of the resulting 2x2 symmetric matrix.

use nalgebra::{Matrix2, Vector2};
use tracing::debug;

use crate::{error::PartitionError, point::Point};

/// Real roots of `a*x^2 + b*x + c = 0`, larger root first. `None` when the
/// discriminant is negative or NaN.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let delta = b * b - 4.0 * a * c;
    if !(delta >= 0.0) {
        return None;
    }
    let delta = delta.sqrt();
    Some(((-b + delta) / (2.0 * a), (-b - delta) / (2.0 * a)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub centroid: Vector2<f64>,
    /// `[[x1, x2], [x2, x3]]`
    pub matrix: Matrix2<f64>,
}

impl Scatter {
    pub fn of(points: &[&Point]) -> Result<Self, PartitionError> {
        if points.is_empty() {
            return Err(PartitionError::EmptyPointSet);
        }
        let sum: Vector2<f64> = points.iter().map(|p| p.position()).sum();
        let centroid = sum / points.len() as f64;
        debug!(
            sum_x = sum.x,
            sum_y = sum.y,
            x_bar = centroid.x,
            y_bar = centroid.y,
            "centroid"
        );

        let matrix = points
            .iter()
            .map(|p| p.position() - centroid)
            .fold(Matrix2::zeros(), |acc, d| acc + d * d.transpose());

        let scatter = Self { centroid, matrix };
        debug!(
            x1 = scatter.x1(),
            x2 = scatter.x2(),
            x3 = scatter.x3(),
            "scatter terms"
        );
        Ok(scatter)
    }

    pub fn x1(&self) -> f64 {
        self.matrix[(0, 0)]
    }

    pub fn x2(&self) -> f64 {
        self.matrix[(0, 1)]
    }

    pub fn x3(&self) -> f64 {
        self.matrix[(1, 1)]
    }

    /// Smaller root of `lambda^2 - (x1 + x3) lambda + (x1 x3 - x2^2) = 0`.
    ///
    /// The discriminant `(x1 + x3)^2 - 4 (x1 x3 - x2^2)` is evaluated as
    /// `(x1 - x3)^2 + 4 x2^2`, which cannot cancel below zero for real input.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn smallest_eigenvalue(&self) -> Result<f64, PartitionError> {
        let (x1, x2, x3) = (self.x1(), self.x2(), self.x3());
        let discriminant = (x1 - x3) * (x1 - x3) + 4.0 * x2 * x2;
        if !(discriminant >= 0.0) {
            return Err(PartitionError::NoEigenvalue { discriminant });
        }
        let root = discriminant.sqrt();
        let (l1, l2) = ((x1 + x3 + root) / 2.0, (x1 + x3 - root) / 2.0);
        debug!(lambda1 = l1, lambda2 = l2, "eigenvalues");
        Ok(l2)
    }

    /// Non-trivial solution `(a, b)` of `(A - lambda I) v = 0`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn eigenvector(&self, lambda: f64, epsilon: f64) -> Result<(f64, f64), PartitionError> {
        let (x1, x2, x3) = (self.x1(), self.x2(), self.x3());

        let residual = (x2 * x2 - (x1 - lambda) * (x3 - lambda)).abs();
        if !(residual <= epsilon) {
            return Err(PartitionError::InconsistentEigensystem { residual });
        }

        let v = if (x1 - lambda).abs() > epsilon {
            (-x2 / (x1 - lambda), 1.0)
        } else if x2.abs() > epsilon {
            (1.0, 0.0)
        } else {
            // isotropic: every direction is an eigenvector
            (1.0, 1.0)
        };
        debug!(lambda, a = v.0, b = v.1, "eigenvector");
        Ok(v)
    }
}
