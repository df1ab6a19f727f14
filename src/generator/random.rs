use crate::error::GraphError;
use crate::generator::config::GeneratorConfig;
use crate::graph::edge::Edge;
use crate::graph::node::{Node, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tracing::{debug, info};

/// Generates a random directed transport graph.
///
/// Supplies are drawn uniformly from `-supply_range..=supply_range`. With
/// `balance_demand` the last node absorbs the negated sum of all other supplies,
/// so it may fall outside the range. Edges never repeat a `(source, target)`
/// pair and never loop on a node.
pub fn generate_random_directed_graph(
    num_nodes: usize,
    num_edges: usize,
    seed: u64,
    supply_range: u32,
    balance_demand: bool,
) -> Result<(Vec<Node>, Vec<Edge>), GraphError> {
    generate(
        &GeneratorConfig::new(num_nodes, num_edges, seed)
            .with_supply_range(supply_range)
            .with_balance_demand(balance_demand),
    )
}

/// Generates a graph for `config`; identical configs yield identical graphs.
pub fn generate(config: &GeneratorConfig) -> Result<(Vec<Node>, Vec<Edge>), GraphError> {
    config.validate()?;
    debug!(
        num_nodes = config.num_nodes,
        num_edges = config.num_edges,
        seed = config.seed,
        supply_range = config.supply_range,
        balance_demand = config.balance_demand,
        allow_self_loops = config.allow_self_loops,
        "generating graph"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let nodes = make_nodes(&mut rng, config)?;
    let edges = make_edges(&mut rng, config);
    Ok((nodes, edges))
}

fn make_nodes(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> Result<Vec<Node>, GraphError> {
    let range = i64::from(config.supply_range);
    let last = config.num_nodes - 1;

    let mut nodes = (0..last)
        .map(|i| Node::new(NodeId(i), rng.gen_range(-range..=range)))
        .collect::<Vec<Node>>();

    let partial_sum = nodes
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(n.supply()))
        .ok_or_else(|| GraphError::InvalidParameter("supply sum overflows i64".into()))?;

    let last_supply = if config.balance_demand {
        -partial_sum
    } else {
        let supply = rng.gen_range(-range..=range);
        info!(
            supply_sum = partial_sum.saturating_add(supply),
            "graph is not balanced"
        );
        supply
    };
    nodes.push(Node::new(NodeId(last), last_supply));
    Ok(nodes)
}

// Partial Fisher-Yates over the row-major candidate pairs, tracking only the
// slots that have been displaced. Indices are drawn as u64 so the sequence does
// not depend on the platform's usize width.
fn make_edges(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> Vec<Edge> {
    let n = config.num_nodes as u64;
    let row = if config.allow_self_loops { n } else { n - 1 };
    let len = n * row;

    let mut displaced: HashMap<u64, u64> = HashMap::new();
    (0..config.num_edges as u64)
        .map(|i| {
            let j = rng.gen_range(i..len);
            let picked = displaced.get(&j).copied().unwrap_or(j);
            let current = displaced.remove(&i).unwrap_or(i);
            displaced.insert(j, current);
            candidate(picked, row, config.allow_self_loops)
        })
        .collect()
}

/// The `index`-th pair in row-major order, skipping the diagonal unless self-loops are allowed.
fn candidate(index: u64, row: u64, allow_self_loops: bool) -> Edge {
    let from = index / row;
    let offset = index % row;
    let to = if allow_self_loops || offset < from {
        offset
    } else {
        offset + 1
    };
    Edge::new(NodeId(from as usize), NodeId(to as usize))
}
