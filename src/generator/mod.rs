pub mod config;
pub mod random;

pub use config::{DEFAULT_SUPPLY_RANGE, GeneratorConfig};
pub use random::{generate, generate_random_directed_graph};
