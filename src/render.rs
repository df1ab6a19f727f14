use crate::graph::edge::Edge;
use crate::graph::node::Node;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct GraphDocument<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
}

/// Compact listing of nodes with their role, followed by edges.
pub fn format_text(nodes: &[Node], edges: &[Edge]) -> String {
    let mut out = String::from("Nodes:\n");
    for n in nodes {
        let _ = writeln!(
            out,
            "  id={:>2} supply={:>4} ({})",
            n.id().index(),
            n.supply(),
            n.kind()
        );
    }
    out.push_str("\nEdges:\n");
    for e in edges {
        let _ = writeln!(
            out,
            "  {} -> {} transported={}",
            e.source(),
            e.target(),
            transported_label(e)
        );
    }
    out
}

pub fn format_json(nodes: &[Node], edges: &[Edge]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GraphDocument { nodes, edges })
}

pub fn transported_label(edge: &Edge) -> String {
    match edge.transported() {
        Some(qty) => qty.to_string(),
        None => "unassigned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_random_directed_graph;
    use crate::graph::node::NodeId;

    #[test]
    fn test_golden_text() {
        let (nodes, edges) = generate_random_directed_graph(6, 8, 42, 10, false).unwrap();

        assert_eq!(
            include_str!("../testdata/graph_6_8_42.txt"),
            format_text(&nodes, &edges)
        );
    }

    #[test]
    fn test_assigned_edges_print_quantity() {
        let nodes = vec![Node::new(NodeId(0), 0), Node::new(NodeId(1), 0)];
        let edges = vec![Edge::new(NodeId(0), NodeId(1)).with_transported(12)];

        let text = format_text(&nodes, &edges);

        assert!(text.contains("  id= 1 supply=   0 (Neutral)\n"));
        assert!(text.ends_with("  0 -> 1 transported=12\n"));
    }

    #[test]
    fn test_json_document() {
        let nodes = vec![Node::new(NodeId(0), 2), Node::new(NodeId(1), -2)];
        let edges = vec![Edge::new(NodeId(0), NodeId(1))];

        let json = format_json(&nodes, &edges).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            serde_json::json!({
                "nodes": [{"id": 0, "supply": 2}, {"id": 1, "supply": -2}],
                "edges": [{"source": 0, "target": 1, "transported": -1}],
            }),
            value
        );
    }
}
