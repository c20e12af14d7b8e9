use std::{path::PathBuf, process::ExitCode};

use bidir_paths::{
    graphs::{graph_factory::GraphFactory, Graph},
    search::{search, SearchMode},
    utility::{get_progressspinner, init_logging},
};
use clap::Parser;
use log::{error, info};

/// Searches a shortest path between two nodes and prints it as json.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json`, `.txt` or `.edges` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Name of the source node
    #[arg(short, long)]
    source: String,
    /// Name of the target node
    #[arg(short, long)]
    target: String,
    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = SearchMode::Bidirectional)]
    mode: SearchMode,
    /// Log specification, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = init_logging(&args.log_level)
        .map_err(|err| eprintln!("unable to start logging: {}", err))
        .ok();

    let spinner = get_progressspinner("Loading graph");
    let graph = GraphFactory::from_file(&args.graph);
    spinner.finish_and_clear();
    let graph = match graph {
        Ok(graph) => graph,
        Err(err) => {
            error!("{}: {}", args.graph.display(), err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let Some(path) = search(&graph, &args.source, &args.target, args.mode) else {
        println!("no path from {} to {}", args.source, args.target);
        return ExitCode::SUCCESS;
    };

    match serde_json::to_string_pretty(&path) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("unable to serialize path: {}", err);
            ExitCode::FAILURE
        }
    }
}
