use thiserror::Error;

/// Coarse classification of a [`PartitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed over something the engine cannot partition.
    InvalidInput,
    /// The closed-form eigen solution broke down.
    NumericalFailure,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    #[error("cannot bisect an empty point set")]
    EmptyPointSet,

    #[error("cannot produce {requested} axes from {points} points")]
    InvalidPartitionCount { requested: usize, points: usize },

    #[error("largest pending region has {size} points at step {step}, nothing left to subdivide")]
    RegionTooSmall { size: usize, step: usize },

    #[error("region of {size} coincident points cannot be split at step {step}")]
    InseparableRegion { size: usize, step: usize },

    #[error("scatter matrix has no real eigenvalue (discriminant {discriminant})")]
    NoEigenvalue { discriminant: f64 },

    #[error("eigensystem is inconsistent, residual {residual} exceeds tolerance")]
    InconsistentEigensystem { residual: f64 },
}

impl PartitionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PartitionError::EmptyPointSet
            | PartitionError::InvalidPartitionCount { .. }
            | PartitionError::RegionTooSmall { .. }
            | PartitionError::InseparableRegion { .. } => ErrorKind::InvalidInput,
            PartitionError::NoEigenvalue { .. } | PartitionError::InconsistentEigensystem { .. } => {
                ErrorKind::NumericalFailure
            }
        }
    }
}
