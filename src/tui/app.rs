use crate::error::GraphError;
use crate::generator::{GeneratorConfig, generate};
use crate::graph::graph::TransportGraph;

pub struct App {
    config: GeneratorConfig,
    graph: TransportGraph,
}

impl App {
    pub fn new(config: GeneratorConfig) -> Result<Self, GraphError> {
        let (nodes, edges) = generate(&config)?;
        Ok(Self {
            config,
            graph: TransportGraph::new(nodes, edges),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    pub fn next_seed(&mut self) -> Result<(), GraphError> {
        self.config.seed = self.config.seed.wrapping_add(1);
        self.regenerate()
    }

    pub fn prev_seed(&mut self) -> Result<(), GraphError> {
        self.config.seed = self.config.seed.wrapping_sub(1);
        self.regenerate()
    }

    pub fn toggle_balance(&mut self) -> Result<(), GraphError> {
        self.config.balance_demand = !self.config.balance_demand;
        self.regenerate()
    }

    fn regenerate(&mut self) -> Result<(), GraphError> {
        let (nodes, edges) = generate(&self.config)?;
        self.graph = TransportGraph::new(nodes, edges);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_navigation_regenerates() {
        let mut app = App::new(GeneratorConfig::new(6, 8, 41)).unwrap();
        app.next_seed().unwrap();

        assert_eq!(42, app.config().seed);
        let supplies = app
            .graph()
            .nodes()
            .iter()
            .map(|n| n.supply())
            .collect::<Vec<_>>();
        assert_eq!(vec![4, 3, -4, -7, -4, 6], supplies);

        app.prev_seed().unwrap();
        assert_eq!(41, app.config().seed);
    }

    #[test]
    fn test_toggle_balance() {
        let mut app = App::new(GeneratorConfig::new(6, 8, 42)).unwrap();
        assert!(!app.graph().is_balanced());

        app.toggle_balance().unwrap();

        assert!(app.config().balance_demand);
        assert!(app.graph().is_balanced());
        assert_eq!(8, app.graph().edges().len());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(App::new(GeneratorConfig::new(2, 3, 0)).is_err());
    }
}
