//! Edge-list text format.
//!
//! The first line is the vertex count, every following line is one edge as
//! whitespace separated numbers: "source target weight". Isolated vertices
//! only show up in the count.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::GraphError;
use crate::graph::DirectedGraph;

/// Writes the header line, then one line per edge in the graph's order.
pub fn write_edge_list<W: Write>(graph: &DirectedGraph, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", graph.num_nodes())?;
    for (from, to, weight) in graph.edges() {
        writeln!(writer, "{} {} {}", from, to, weight)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the graph to it in one pass.
pub fn save_edge_list<P: AsRef<Path>>(graph: &DirectedGraph, path: P) -> Result<(), GraphError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GraphError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_edge_list(graph, &mut writer).map_err(|e| GraphError::io(path, e))?;
    writer.flush().map_err(|e| GraphError::io(path, e))?;
    info!(path = %path.display(), nodes = graph.num_nodes(), edges = graph.num_edges(), "edge list written");
    Ok(())
}

/// Load a graph from a file written by [`save_edge_list`].
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<DirectedGraph, GraphError> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path).map_err(|e| GraphError::io(path, e))?);
    let graph = read_edge_list(file).map_err(|err| match err {
        GraphError::Io { source, .. } => GraphError::io(path, source),
        other => other,
    })?;
    info!(path = %path.display(), nodes = graph.num_nodes(), edges = graph.num_edges(), "edge list loaded");
    Ok(graph)
}

/// Parses an edge list. Blank lines and lines starting with `#` are skipped.
/// A pair that appears twice keeps the weight of its last line.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<DirectedGraph, GraphError> {
    let mut graph: Option<DirectedGraph> = None;

    for (index, read_line) in reader.lines().enumerate() {
        let line = read_line.map_err(|e| GraphError::io("<reader>", e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(graph) = graph.as_mut() {
            let (from, to, weight) = parse_edge(trimmed).ok_or_else(|| GraphError::MalformedEdge {
                line_no: index + 1,
                line: line.clone(),
            })?;
            graph.insert_or_overwrite(from, to, weight)?;
            continue;
        }

        let num_nodes = trimmed
            .parse()
            .map_err(|_| GraphError::InvalidHeader { line: line.clone() })?;
        // A zero count is a header problem here, not a config one.
        graph = Some(DirectedGraph::new(num_nodes).map_err(|_| GraphError::InvalidHeader { line: line.clone() })?);
    }

    graph.ok_or(GraphError::MissingHeader)
}

fn parse_edge(line: &str) -> Option<(u32, u32, u32)> {
    let mut text = line.split_whitespace();
    let from = text.next()?.parse().ok()?;
    let to = text.next()?.parse().ok()?;
    let weight = text.next()?.parse().ok()?;
    if text.next().is_some() {
        return None;
    }
    Some((from, to, weight))
}
