use crate::error::GraphError;

pub const DEFAULT_SUPPLY_RANGE: u32 = 10;

/// Full parameter set of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub seed: u64,
    /// supplies are drawn from `-supply_range..=supply_range`
    pub supply_range: u32,
    pub balance_demand: bool,
    pub allow_self_loops: bool,
}

impl GeneratorConfig {
    pub fn new(num_nodes: usize, num_edges: usize, seed: u64) -> Self {
        Self {
            num_nodes,
            num_edges,
            seed,
            supply_range: DEFAULT_SUPPLY_RANGE,
            balance_demand: false,
            allow_self_loops: false,
        }
    }

    /// Builds a config from signed counts, rejecting negative values.
    pub fn from_signed(num_nodes: i64, num_edges: i64, seed: u64) -> Result<Self, GraphError> {
        let num_nodes = usize::try_from(num_nodes).map_err(|_| {
            GraphError::InvalidParameter(format!(
                "num_nodes must be at least 1, got {}",
                num_nodes
            ))
        })?;
        let num_edges = usize::try_from(num_edges).map_err(|_| {
            GraphError::InvalidParameter(format!(
                "num_edges must not be negative, got {}",
                num_edges
            ))
        })?;
        Ok(Self::new(num_nodes, num_edges, seed))
    }

    pub fn with_supply_range(mut self, supply_range: u32) -> Self {
        self.supply_range = supply_range;
        self
    }

    pub fn with_balance_demand(mut self, balance_demand: bool) -> Self {
        self.balance_demand = balance_demand;
        self
    }

    pub fn with_self_loops(mut self, allow_self_loops: bool) -> Self {
        self.allow_self_loops = allow_self_loops;
        self
    }

    /// Number of distinct directed pairs available under the self-loop policy.
    pub fn max_edges(&self) -> Option<usize> {
        let targets = if self.allow_self_loops {
            self.num_nodes
        } else {
            self.num_nodes.saturating_sub(1)
        };
        self.num_nodes.checked_mul(targets)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.num_nodes < 1 {
            return Err(GraphError::InvalidParameter(
                "num_nodes must be at least 1, got 0".into(),
            ));
        }
        if self.supply_range < 1 {
            return Err(GraphError::InvalidParameter(
                "supply_range must be at least 1, got 0".into(),
            ));
        }
        let max_edges = self.max_edges().ok_or_else(|| {
            GraphError::InvalidParameter(format!(
                "num_nodes {} is too large to enumerate edge candidates",
                self.num_nodes
            ))
        })?;
        if self.num_edges > max_edges {
            let policy = if self.allow_self_loops {
                "with self-loops"
            } else {
                "without self-loops"
            };
            return Err(GraphError::InvalidParameter(format!(
                "num_edges must be between 0 and {} ({}), got {}",
                max_edges, policy, self.num_edges
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new(6, 8, 42);

        assert_eq!(10, config.supply_range);
        assert!(!config.balance_demand);
        assert!(!config.allow_self_loops);
        assert_eq!(Ok(()), config.validate());
    }

    #[test]
    fn test_max_edges_follows_self_loop_policy() {
        assert_eq!(Some(30), GeneratorConfig::new(6, 0, 0).max_edges());
        assert_eq!(
            Some(36),
            GeneratorConfig::new(6, 0, 0).with_self_loops(true).max_edges()
        );
        assert_eq!(Some(0), GeneratorConfig::new(1, 0, 0).max_edges());
        assert_eq!(None, GeneratorConfig::new(usize::MAX, 0, 0).max_edges());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let cases = [
            GeneratorConfig::new(0, 0, 1),
            GeneratorConfig::new(3, 7, 1),
            GeneratorConfig::new(3, 1, 1).with_supply_range(0),
            GeneratorConfig::new(1, 1, 1),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(GraphError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_from_signed_rejects_negative_counts() {
        assert_eq!(
            Err(GraphError::InvalidParameter(
                "num_nodes must be at least 1, got -2".into()
            )),
            GeneratorConfig::from_signed(-2, 0, 0)
        );
        assert_eq!(
            Err(GraphError::InvalidParameter(
                "num_edges must not be negative, got -1".into()
            )),
            GeneratorConfig::from_signed(3, -1, 0)
        );
        assert_eq!(
            Ok(GeneratorConfig::new(3, 2, 9)),
            GeneratorConfig::from_signed(3, 2, 9)
        );
    }
}
