use crate::graph::node::NodeId;
use serde::{Deserialize, Serialize};

/// Directed link `source -> target` carrying the quantity moved along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    /// >= 0 once assigned, `UNASSIGNED` otherwise
    transported: i64,
}

impl Edge {
    pub const UNASSIGNED: i64 = -1;

    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            transported: Self::UNASSIGNED,
        }
    }

    pub fn with_transported(self, transported: i64) -> Self {
        Self {
            transported,
            ..self
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn raw_transported(&self) -> i64 {
        self.transported
    }

    pub fn transported(&self) -> Option<i64> {
        self.is_assigned().then_some(self.transported)
    }

    pub fn is_assigned(&self) -> bool {
        self.transported >= 0
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_edge_is_unassigned() {
        let edge = Edge::new(NodeId(1), NodeId(3));

        assert_eq!(-1, edge.raw_transported());
        assert_eq!(None, edge.transported());
        assert!(!edge.is_assigned());
        assert!(!edge.is_self_loop());
    }

    #[test]
    fn test_with_transported_keeps_endpoints() {
        let edge = Edge::new(NodeId(2), NodeId(0)).with_transported(0);

        assert_eq!(NodeId(2), edge.source());
        assert_eq!(NodeId(0), edge.target());
        assert_eq!(Some(0), edge.transported());
        assert!(edge.is_assigned());
    }

    #[test]
    fn test_json_shape() {
        let edge = Edge::new(NodeId(5), NodeId(2));
        let json = serde_json::to_string(&edge).unwrap();

        assert_eq!(r#"{"source":5,"target":2,"transported":-1}"#, json);
    }
}
