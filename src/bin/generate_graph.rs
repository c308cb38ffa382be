//! Generates the random graph with the shipped parameters and saves it as an
//! edge list.

extern crate graph_utility;

use std::process::ExitCode;

use graph_utility::logging::init_logging;
use graph_utility::{save_edge_list, GeneratorConfig, GraphError, GraphGenerator, SubEventTimer, DRAW_SEQUENCE_VERSION};
use tracing::{error, info};

fn run(config: &GeneratorConfig) -> Result<(), GraphError> {
    let timer = SubEventTimer::new_timer();

    let graph = timer.time_subevent("Generating", || {
        let mut gen = GraphGenerator::new_from_seed(config.seed);
        gen.gen_graph(config)
    })?;
    println!("{}", graph.num_nodes());

    timer.time_subevent("Writing", || save_edge_list(&graph, &config.output_path))?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let config = GeneratorConfig::default();
    info!(
        nodes = config.num_nodes,
        draws = config.num_draws,
        weight_bound = config.weight_bound,
        seed = config.seed,
        draw_sequence = DRAW_SEQUENCE_VERSION,
        "generating graph"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "graph generation failed");
            ExitCode::FAILURE
        }
    }
}
