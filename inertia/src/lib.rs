//! Inertial bisection of 2-D point sets.
//!
//! [`bisect`] finds the line of least inertia through a point cloud and splits
//! the cloud at the median of the signed projections. [`compute_hierarchy`]
//! applies it greedily to the largest remaining region until `k` axes exist.

pub mod axis;
pub mod bisection;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod point;
pub mod scatter;
pub mod side;

pub use axis::Axis;
pub use bisection::{bisect, bisect_with, Bisection};
pub use config::PartitionConfig;
pub use error::{ErrorKind, PartitionError};
pub use hierarchy::{compute_hierarchy, compute_hierarchy_with, Hierarchy};
pub use point::{Point, PointId};
pub use scatter::solve_quadratic;
pub use side::{binary_code, binary_codes, Side};
