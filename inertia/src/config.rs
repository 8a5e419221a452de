pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Tunables shared by bisection and the k-way hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionConfig {
    /// Tolerance used when deciding whether a scatter term is numerically zero.
    pub epsilon: f64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PartitionConfig {
    pub fn build() -> PartitionConfigBuilder {
        PartitionConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PartitionConfigBuilder {
    epsilon: Option<f64>,
}

impl PartitionConfigBuilder {
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn build(self) -> PartitionConfig {
        PartitionConfig {
            epsilon: self.epsilon.unwrap_or(DEFAULT_EPSILON),
        }
    }
}
