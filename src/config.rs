//! Generator parameters. The shipped values are compile-time constants; the
//! struct exists so tests and callers can vary them.

use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

use crate::error::GraphError;

pub const NUM_NODES: u32 = 15;
pub const NUM_DRAWS: u32 = 100;
pub const WEIGHT_BOUND: u32 = 100;
pub const RNG_SEED: u64 = 123;
pub const OUTPUT_PATH: &str = "test_graph.txt";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Size of the vertex set, `N`.
    pub num_nodes: u32,
    /// Number of random edge draws, `M`. Colliding draws collapse, so the
    /// graph ends up with at most this many edges.
    pub num_draws: u32,
    /// Exclusive upper bound of edge weights, `W`.
    pub weight_bound: u32,
    pub seed: u64,
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            num_nodes: NUM_NODES,
            num_draws: NUM_DRAWS,
            weight_bound: WEIGHT_BOUND,
            seed: RNG_SEED,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.num_nodes == 0 {
            return Err(GraphError::InvalidConfig { parameter: "num_nodes", reason: "must be positive" });
        }
        if self.weight_bound == 0 {
            return Err(GraphError::InvalidConfig { parameter: "weight_bound", reason: "must be positive" });
        }
        Ok(())
    }
}
