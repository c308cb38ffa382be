//! Loads the generated edge list back and reports its size.

extern crate graph_utility;

use std::process::ExitCode;

use graph_utility::config::OUTPUT_PATH;
use graph_utility::load_edge_list;
use graph_utility::logging::init_logging;
use tracing::{error, info};

fn main() -> ExitCode {
    init_logging();

    match load_edge_list(OUTPUT_PATH) {
        Ok(graph) => {
            info!("Number of vertices: {}", graph.num_nodes());
            info!("Number of edges: {}", graph.num_edges());
            for edge in graph.edges().take(100) {
                info!("Edge: {:?}", edge);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, path = OUTPUT_PATH, "loading edge list failed");
            ExitCode::FAILURE
        }
    }
}
