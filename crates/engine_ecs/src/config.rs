//! World configuration.

use engine_component::ColumnConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a [`World`](crate::World).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcsConfig {
    /// Sizing policy applied to every component column.
    pub columns: ColumnConfig,
}

impl EcsConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the column sizing policy.
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnConfig) -> Self {
        self.columns = columns;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EcsConfig::new();
        assert_eq!(config.columns.initial_capacity, 10);
        assert!((config.columns.growth_factor - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_columns() {
        let config = EcsConfig::new()
            .with_columns(ColumnConfig::default().with_initial_capacity(64));
        assert_eq!(config.columns.initial_capacity, 64);
    }
}
