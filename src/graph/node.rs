use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a node in the transportation problem, derived from the sign of its supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Producer,
    Consumer,
    Neutral,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Producer => "Producer",
            NodeKind::Consumer => "Consumer",
            NodeKind::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    /// > 0 produces, < 0 consumes, 0 is a transshipment point
    supply: i64,
}

impl Node {
    pub fn new(id: NodeId, supply: i64) -> Self {
        Self { id, supply }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn supply(&self) -> i64 {
        self.supply
    }

    pub fn is_producer(&self) -> bool {
        self.supply > 0
    }

    pub fn is_consumer(&self) -> bool {
        self.supply < 0
    }

    pub fn is_intermediate(&self) -> bool {
        self.supply == 0
    }

    pub fn kind(&self) -> NodeKind {
        match self.supply {
            s if s > 0 => NodeKind::Producer,
            s if s < 0 => NodeKind::Consumer,
            _ => NodeKind::Neutral,
        }
    }
}
