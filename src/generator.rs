//! Random graph generation.
//!
//! Draw sequence (version 1): for every one of `num_draws` iterations the
//! stream yields a source in `[0, N)`, then a target in `[0, N)`, then a
//! weight in `[0, W)`, each through `rand::distributions::Uniform<u32>`. The
//! edge is inserted, or its weight overwritten if the pair already exists.

use rand::distributions::{Distribution, Uniform};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::{default_rng, GraphRng, Node};

/// Bumped whenever the order or kind of draws changes, since that changes
/// every generated file.
pub const DRAW_SEQUENCE_VERSION: u32 = 1;

/// Generate a random graph with a given number of vertices, edge draws and
/// weights for the edges.
pub fn generate_weighted_graph(rng: &mut GraphRng, config: &GeneratorConfig) -> Result<DirectedGraph, GraphError> {
    config.validate()?;

    let mut graph = DirectedGraph::new(config.num_nodes)?;
    let dist = Uniform::new(0 as Node, config.num_nodes as Node);
    let dist_w = Uniform::new(0, config.weight_bound);
    for _ in 0 .. config.num_draws {
        let from = dist.sample(rng);
        let to = dist.sample(rng);
        let w = dist_w.sample(rng);
        if let Some(previous) = graph.insert_or_overwrite(from, to, w)? {
            debug!(from, to, previous, weight = w, "edge drawn again, weight overwritten");
        }
    }
    debug!(draws = config.num_draws, edges = graph.num_edges(), "graph generated");
    Ok(graph)
}

/// Owns the random stream, so consecutive graphs continue the same seeded
/// sequence.
pub struct GraphGenerator {
    rng: GraphRng,
}

impl GraphGenerator {

    pub fn new_from_seed(seed: u64) -> GraphGenerator {
        GraphGenerator { rng: default_rng(seed) }
    }

    pub fn gen_graph(&mut self, config: &GeneratorConfig) -> Result<DirectedGraph, GraphError> {
        generate_weighted_graph(&mut self.rng, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn config(num_nodes: u32, num_draws: u32, weight_bound: u32, seed: u64) -> GeneratorConfig {
        GeneratorConfig { num_nodes, num_draws, weight_bound, seed, ..GeneratorConfig::default() }
    }

    fn generate(config: &GeneratorConfig) -> DirectedGraph {
        GraphGenerator::new_from_seed(config.seed).gen_graph(config).expect("valid configuration")
    }

    #[test]
    fn same_seed_same_graph() {
        let config = GeneratorConfig::default();
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn different_seed_different_graph() {
        assert_ne!(generate(&config(15, 100, 100, 123)), generate(&config(15, 100, 100, 124)));
    }

    #[test]
    fn no_draws_leaves_only_vertices() {
        let graph = generate(&config(6, 0, 100, 123));
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn repeated_pair_keeps_the_last_weight() {
        // With seed 7 the pair (0, 0) is drawn with weights 1, 7 and then 2.
        let graph = generate(&config(2, 6, 10, 7));
        assert_eq!(graph.weight(0, 0), Some(2));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 0, 2), (0, 1, 0), (1, 0, 3), (1, 1, 3)]);
    }

    #[test]
    fn replaying_the_stream_reproduces_the_edges() {
        let config = config(4, 40, 7, 99);
        let graph = generate(&config);

        let mut rng = default_rng(99);
        let dist = Uniform::new(0, 4);
        let dist_w = Uniform::new(0, 7);
        let mut last = std::collections::BTreeMap::new();
        for _ in 0 .. 40 {
            let from: u32 = dist.sample(&mut rng);
            let to: u32 = dist.sample(&mut rng);
            let w: u32 = dist_w.sample(&mut rng);
            last.insert((from, to), w);
        }
        let expected: Vec<_> = last.into_iter().map(|((from, to), w)| (from, to, w)).collect();
        assert_eq!(graph.edges().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn generator_continues_its_stream() {
        let config = GeneratorConfig::default();
        let mut gen = GraphGenerator::new_from_seed(config.seed);
        let first = gen.gen_graph(&config).expect("valid configuration");
        let second = gen.gen_graph(&config).expect("valid configuration");
        assert_eq!(first, generate(&config));
        assert_ne!(first, second);
    }

    #[test]
    fn invalid_weight_bound_fails_before_drawing() {
        let mut rng = default_rng(1);
        let err = generate_weighted_graph(&mut rng, &config(3, 10, 0, 1)).expect_err("zero weight bound");
        assert!(matches!(err, GraphError::InvalidConfig { parameter: "weight_bound", .. }));
    }

    proptest! {
        #[test]
        fn generated_graphs_respect_their_bounds(
            num_nodes in 1u32..40,
            num_draws in 0u32..300,
            weight_bound in 1u32..1000,
            seed in any::<u64>(),
        ) {
            let graph = generate(&config(num_nodes, num_draws, weight_bound, seed));
            prop_assert_eq!(graph.num_nodes(), num_nodes);
            prop_assert!(graph.num_edges() <= num_draws as usize);
            for (from, to, w) in graph.edges() {
                prop_assert!(from < num_nodes && to < num_nodes);
                prop_assert!(w < weight_bound);
            }
        }
    }
}
