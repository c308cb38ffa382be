use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::{Node, Weight, WeightedEdge};

/// In-memory directed graph with a fixed vertex set and at most one weighted
/// edge per ordered pair of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectedGraph {
    num_nodes: u32,
    // Keyed by (source, target); ordered so iteration is stable.
    edges: BTreeMap<(Node, Node), Weight>,
}

impl DirectedGraph {

    /// Graph with nodes `0..num_nodes` and no edges.
    pub fn new(num_nodes: u32) -> Result<DirectedGraph, GraphError> {
        if num_nodes == 0 {
            return Err(GraphError::InvalidConfig {
                parameter: "num_nodes",
                reason: "must be positive",
            });
        }
        Ok(DirectedGraph { num_nodes, edges: BTreeMap::new() })
    }

    pub fn num_nodes(&self) -> u32 {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> std::ops::Range<Node> {
        0 .. self.num_nodes
    }

    /// Inserts the edge, or overwrites the weight if the pair is already
    /// present. Returns the weight that was replaced.
    pub fn insert_or_overwrite(&mut self, from: Node, to: Node, weight: Weight) -> Result<Option<Weight>, GraphError> {
        for node in [from, to].iter() {
            if *node >= self.num_nodes {
                return Err(GraphError::NodeOutOfRange { node: *node, num_nodes: self.num_nodes });
            }
        }
        Ok(self.edges.insert((from, to), weight))
    }

    pub fn weight(&self, from: Node, to: Node) -> Option<Weight> {
        self.edges.get(&(from, to)).copied()
    }

    /// Edges in ascending `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().map(|(&(from, to), &weight)| (from, to, weight))
    }
}
