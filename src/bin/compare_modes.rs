use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use bidir_paths::{
    graphs::{
        graph_factory::GraphFactory,
        graph_functions::{random_requests, validate_path, weights_match, ShortestPathRequest},
        Graph,
    },
    search::{search, SearchMode},
    utility::{get_progressbar_long_jobs, get_progressspinner, init_logging},
    Path,
};
use clap::Parser;
use indicatif::ProgressIterator;
use log::{error, info, warn};
use rand::{rngs::StdRng, SeedableRng};

/// Runs both search modes on random pairs, checks that they agree and that
/// every path is valid, and reports the average duration of each mode.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json`, `.txt` or `.edges` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Number of random source/target pairs
    #[arg(short, long, default_value = "1000")]
    number_of_pairs: usize,
    /// Seed for drawing the pairs, random if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Log specification, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn timed_search(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
    mode: SearchMode,
    total: &mut Duration,
) -> Option<Path> {
    let start = Instant::now();
    let path = search(graph, &request.source, &request.destination, mode);
    *total += start.elapsed();
    path
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

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let requests = random_requests(&graph.vertices(), args.number_of_pairs, &mut rng);
    if requests.is_empty() {
        error!("the graph needs at least two vertices");
        return ExitCode::FAILURE;
    }

    let mut vanilla_duration = Duration::ZERO;
    let mut bidirectional_duration = Duration::ZERO;
    let mut unreachable = 0;
    let mut mismatches = 0;

    let bar = get_progressbar_long_jobs("Comparing", requests.len() as u64);
    for request in requests.iter().progress_with(bar) {
        let vanilla = timed_search(&graph, request, SearchMode::Vanilla, &mut vanilla_duration);
        let bidirectional = timed_search(
            &graph,
            request,
            SearchMode::Bidirectional,
            &mut bidirectional_duration,
        );

        match (vanilla, bidirectional) {
            (None, None) => unreachable += 1,
            (Some(vanilla), Some(bidirectional)) => {
                for path in [&vanilla, &bidirectional] {
                    if let Err(err) = validate_path(&graph, path) {
                        warn!("{} -> {}: {}", request.source, request.destination, err);
                        mismatches += 1;
                    }
                }
                if !weights_match(vanilla.weight(), bidirectional.weight()) {
                    warn!(
                        "{} -> {}: vanilla weighs {}, bidirectional weighs {}",
                        request.source,
                        request.destination,
                        vanilla.weight(),
                        bidirectional.weight()
                    );
                    mismatches += 1;
                }
            }
            _ => {
                warn!(
                    "{} -> {}: only one mode found a path",
                    request.source, request.destination
                );
                mismatches += 1;
            }
        }
    }

    let number_of_requests = requests.len() as u32;
    info!("{} of {} pairs are unreachable", unreachable, number_of_requests);
    println!(
        "Average vanilla duration is {:?}",
        vanilla_duration / number_of_requests
    );
    println!(
        "Average bidirectional duration is {:?}",
        bidirectional_duration / number_of_requests
    );

    if mismatches > 0 {
        error!("{} mismatches", mismatches);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
