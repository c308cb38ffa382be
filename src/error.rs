//! Error type shared by generation, writing and loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Node;

/// Everything that can make a run fail. None of these are retried.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A generator parameter is outside its valid domain.
    #[error("invalid configuration: `{parameter}` {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// An edge endpoint does not belong to the vertex set.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: u32 },
    /// The output or input file could not be created, read or written.
    #[error("I/O failure on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The edge list ended before the vertex-count line.
    #[error("edge list has no vertex-count header")]
    MissingHeader,
    /// The first line is not a positive integer.
    #[error("invalid vertex-count header `{line}`")]
    InvalidHeader { line: String },
    /// An edge line is not three integers.
    #[error("malformed edge on line {line_no}: `{line}`")]
    MalformedEdge { line_no: usize, line: String },
}

impl GraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}
