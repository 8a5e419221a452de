use std::{cmp::Ordering, collections::BinaryHeap};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    axis::Axis, bisection::bisect_with, config::PartitionConfig, error::PartitionError,
    point::Point,
};

/// Region waiting to be subdivided. Ordered by size, ties going to the region
/// created first.
#[derive(Debug)]
struct PendingRegion<'a> {
    points: Vec<&'a Point>,
    seq: usize,
}

impl PartialEq for PendingRegion<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingRegion<'_> {}

impl PartialOrd for PendingRegion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingRegion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.points
            .len()
            .cmp(&other.points.len())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Outcome of greedy recursive bisection.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy<'a> {
    axes: Vec<Axis>,
    leaves: Vec<Vec<&'a Point>>,
}

impl<'a> Hierarchy<'a> {
    /// Axes in the order they were produced.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Regions that were never subdivided, in creation order.
    pub fn leaves(&self) -> &[Vec<&'a Point>] {
        &self.leaves
    }

    pub fn into_axes(self) -> Vec<Axis> {
        self.axes
    }
}

fn subdivide<'a>(
    region: Vec<&'a Point>,
    step: usize,
    config: &PartitionConfig,
    axes: &mut Vec<Axis>,
    pending: &mut BinaryHeap<PendingRegion<'a>>,
) -> Result<(), PartitionError> {
    let size = region.len();
    trace!(step, size, "subdividing region");
    let (axis, left, right) = bisect_with(region, config)?.into_parts();
    // all projections tied: splitting again would repeat this axis forever
    if size >= 2 && (left.is_empty() || right.is_empty()) {
        return Err(PartitionError::InseparableRegion { size, step });
    }
    axes.push(axis);
    // every step creates exactly two regions
    pending.push(PendingRegion {
        points: left,
        seq: 2 * step,
    });
    pending.push(PendingRegion {
        points: right,
        seq: 2 * step + 1,
    });
    Ok(())
}

pub fn compute_hierarchy<'a>(
    points: impl IntoIterator<Item = &'a Point>,
    k: usize,
) -> Result<Hierarchy<'a>, PartitionError> {
    compute_hierarchy_with(points, k, &PartitionConfig::default())
}

/// Produce `k` axes by repeatedly bisecting the largest pending region.
pub fn compute_hierarchy_with<'a>(
    points: impl IntoIterator<Item = &'a Point>,
    k: usize,
    config: &PartitionConfig,
) -> Result<Hierarchy<'a>, PartitionError> {
    let points = points.into_iter().collect_vec();
    if points.is_empty() {
        return Err(PartitionError::EmptyPointSet);
    }
    if k == 0 || k > points.len() {
        return Err(PartitionError::InvalidPartitionCount {
            requested: k,
            points: points.len(),
        });
    }

    let mut pending = BinaryHeap::new();
    let mut axes = Vec::with_capacity(k);
    subdivide(points, 0, config, &mut axes, &mut pending)?;

    for step in 1..k {
        let region = match pending.pop() {
            Some(PendingRegion { points, .. }) if points.len() >= 2 => points,
            largest => {
                return Err(PartitionError::RegionTooSmall {
                    size: largest.map_or(0, |r| r.points.len()),
                    step,
                })
            }
        };
        subdivide(region, step, config, &mut axes, &mut pending)?;
    }

    let leaves = pending
        .into_iter()
        .sorted_by_key(|r| r.seq)
        .map(|r| r.points)
        .collect_vec();
    debug!(axes = axes.len(), leaves = leaves.len(), "hierarchy complete");

    Ok(Hierarchy { axes, leaves })
}
