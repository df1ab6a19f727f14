use crate::graph::edge::Edge;
use crate::graph::node::{Node, NodeId};

/// Directed graph keyed by node id, built by consumers from the generator's flat lists.
///
/// Edge positions in `edges()` double as edge ids for the adjacency lists.
pub struct TransportGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl TransportGraph {
    /// Node ids must form the range `0..nodes.len()`, as produced by the generator.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        edges.iter().enumerate().for_each(|(e_id, e)| {
            outgoing[e.source().index()].push(e_id);
            incoming[e.target().index()].push(e_id);
        });
        Self {
            nodes,
            edges,
            outgoing,
            incoming,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_by_id(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn outgoing(&self, id: NodeId) -> &[usize] {
        &self.outgoing[id.index()]
    }

    pub fn incoming(&self, id: NodeId) -> &[usize] {
        &self.incoming[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn producers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_producer())
    }

    pub fn consumers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_consumer())
    }

    /// Sum of all positive supplies.
    pub fn total_supply(&self) -> i64 {
        self.producers().map(|n| n.supply()).sum()
    }

    /// Sum of all negative supplies, as a positive quantity.
    pub fn total_demand(&self) -> i64 {
        self.consumers().map(|n| -n.supply()).sum()
    }

    /// Net supply over all nodes; zero for a balanced graph.
    pub fn imbalance(&self) -> i64 {
        self.nodes.iter().map(|n| n.supply()).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.imbalance() == 0
    }

    pub fn max_abs_supply(&self) -> i64 {
        self.nodes
            .iter()
            .map(|n| n.supply().abs())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //  0 → 1 → 2
    //   ↘     ↗
    //      3
    fn sample() -> TransportGraph {
        let nodes = vec![
            Node::new(NodeId(0), 6),
            Node::new(NodeId(1), 0),
            Node::new(NodeId(2), -4),
            Node::new(NodeId(3), -2),
        ];
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1)),
            Edge::new(NodeId(1), NodeId(2)),
            Edge::new(NodeId(0), NodeId(3)),
            Edge::new(NodeId(3), NodeId(2)),
        ];
        TransportGraph::new(nodes, edges)
    }

    #[test]
    fn test_adjacency_by_node_id() {
        let graph = sample();

        assert_eq!(&[0, 2], graph.outgoing(NodeId(0)));
        assert!(graph.outgoing(NodeId(2)).is_empty());
        assert_eq!(&[1, 3], graph.incoming(NodeId(2)));
        assert!(graph.incoming(NodeId(0)).is_empty());
        assert_eq!(4, graph.node_count());
    }

    #[test]
    fn test_supply_totals() {
        let graph = sample();

        assert_eq!(6, graph.total_supply());
        assert_eq!(6, graph.total_demand());
        assert_eq!(0, graph.imbalance());
        assert!(graph.is_balanced());
        assert_eq!(6, graph.max_abs_supply());
        assert_eq!(1, graph.producers().count());
        assert_eq!(2, graph.consumers().count());
    }

    #[test]
    fn test_unbalanced_graph() {
        let graph = TransportGraph::new(
            vec![Node::new(NodeId(0), 3), Node::new(NodeId(1), -9)],
            vec![Edge::new(NodeId(0), NodeId(1))],
        );

        assert_eq!(-6, graph.imbalance());
        assert!(!graph.is_balanced());
        assert_eq!(9, graph.max_abs_supply());
    }
}
