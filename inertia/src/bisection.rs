use itertools::{Either, Itertools};
use tracing::debug;

use crate::{
    axis::Axis, config::PartitionConfig, error::PartitionError, point::Point, scatter::Scatter,
    side::Side,
};

/// One inertial bisection: the axis and the two halves it produced. The halves
/// borrow from the caller's points and are fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Bisection<'a> {
    axis: Axis,
    left: Vec<&'a Point>,
    right: Vec<&'a Point>,
}

impl<'a> Bisection<'a> {
    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn left(&self) -> &[&'a Point] {
        &self.left
    }

    pub fn right(&self) -> &[&'a Point] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (Axis, Vec<&'a Point>, Vec<&'a Point>) {
        (self.axis, self.left, self.right)
    }
}

fn median(values: &[f64]) -> Option<f64> {
    let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let size = sorted.len();
    if size == 0 {
        None
    } else if size % 2 == 0 {
        Some((sorted[size / 2 - 1] + sorted[size / 2]) / 2.0)
    } else {
        Some(sorted[size / 2])
    }
}

pub fn bisect<'a>(
    points: impl IntoIterator<Item = &'a Point>,
) -> Result<Bisection<'a>, PartitionError> {
    bisect_with(points, &PartitionConfig::default())
}

/// Split `points` along the axis of least inertia so that both halves hold
/// (up to ties at the median) the same number of points.
pub fn bisect_with<'a>(
    points: impl IntoIterator<Item = &'a Point>,
    config: &PartitionConfig,
) -> Result<Bisection<'a>, PartitionError> {
    let points = points.into_iter().collect_vec();
    let scatter = Scatter::of(&points)?;
    let lambda = scatter.smallest_eigenvalue()?;
    let (a, b) = scatter.eigenvector(lambda, config.epsilon)?;

    let mut axis = Axis {
        a,
        b,
        centroid: scatter.centroid,
        threshold: 0.0,
    };
    let projections = points.iter().map(|p| axis.projection(p)).collect_vec();
    axis.threshold = median(&projections).ok_or(PartitionError::EmptyPointSet)?;

    let (left, right): (Vec<_>, Vec<_>) = points
        .into_iter()
        .zip(projections)
        .partition_map(|(point, s)| match axis.side_of_projection(s) {
            Side::Left => Either::Left(point),
            Side::Right => Either::Right(point),
        });
    debug!(
        threshold = axis.threshold,
        left = left.len(),
        right = right.len(),
        "bisected"
    );

    Ok(Bisection { axis, left, right })
}
