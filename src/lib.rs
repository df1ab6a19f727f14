//! Seeded random directed graphs for transportation problems.
//!
//! Nodes carry a signed supply (producers positive, consumers negative),
//! edges carry a transported quantity that starts out unassigned.
//!
//! ```
//! use transportgraph::generator::generate_random_directed_graph;
//!
//! let (nodes, edges) = generate_random_directed_graph(6, 8, 42, 10, true).unwrap();
//! assert_eq!(nodes.len(), 6);
//! assert_eq!(edges.len(), 8);
//! assert_eq!(nodes.iter().map(|n| n.supply()).sum::<i64>(), 0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod logging;
pub mod render;
pub mod tui;
