//! Generation, serialization and loading of random weighted directed graphs
//! stored as plain-text edge lists.



/// Random number generation external libraries.
/// The generators from rand and rand_chacha are used because they are
/// reproducible on different machines.
extern crate rand;
extern crate rand_chacha;

pub mod config;
pub mod edge_list;
pub mod error;
pub mod generator;
pub mod graph;
pub mod logging;
pub mod timer;

/// Exported types representing graphs.
/// Nodes and weights are plain integers, an edge is a tuple of them. The graph
/// itself is keyed by the ordered pair of its endpoints.

pub type Node = u32;
pub type Weight = u32;

pub type WeightedEdge = (Node, Node, Weight);

pub use config::GeneratorConfig;
pub use edge_list::{load_edge_list, read_edge_list, save_edge_list, write_edge_list};
pub use error::GraphError;
pub use generator::{generate_weighted_graph, GraphGenerator, DRAW_SEQUENCE_VERSION};
pub use graph::DirectedGraph;
pub use timer::SubEventTimer;

pub use rand::SeedableRng;

/// The random stream every graph is drawn from.
pub type GraphRng = rand_chacha::ChaCha8Rng;

pub fn default_rng(seed: u64) -> GraphRng {
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}
