use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flownet::app::engine::AnalysisConfig;
use flownet::cli;
use flownet::domain::enumerate::{DEFAULT_MAX_PATH_LENGTH, DEFAULT_MAX_PATHS_PER_OD};

#[derive(Parser, Debug)]
#[command(
    name = "flownet",
    version,
    about = "Analyze directed transport networks from an edge list."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full analysis and write edge usage, OD incidence and a DOT rendering.
    Analyze {
        /// CSV file containing the edge list.
        edges_csv: PathBuf,

        /// Directory for the analysis outputs.
        #[arg(short, long, default_value = "flownet_output")]
        output_dir: PathBuf,

        /// Name of the source column in the CSV.
        #[arg(long, default_value = "from")]
        source_col: String,

        /// Name of the target column in the CSV.
        #[arg(long, default_value = "to")]
        target_col: String,

        /// Maximum number of nodes in one path.
        #[arg(long, default_value_t = DEFAULT_MAX_PATH_LENGTH)]
        max_path_length: usize,

        /// Per-OD cap on enumerated paths.
        #[arg(long, default_value_t = DEFAULT_MAX_PATHS_PER_OD)]
        max_paths_per_od: usize,

        /// Skip the Graphviz DOT rendering.
        #[arg(long)]
        no_dot: bool,

        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Enumerate simple paths for a single origin/destination pair.
    Paths {
        /// CSV file containing the edge list.
        edges_csv: PathBuf,

        origin: String,
        destination: String,

        /// Name of the source column in the CSV.
        #[arg(long, default_value = "from")]
        source_col: String,

        /// Name of the target column in the CSV.
        #[arg(long, default_value = "to")]
        target_col: String,

        /// Maximum number of nodes in one path.
        #[arg(long, default_value_t = DEFAULT_MAX_PATH_LENGTH)]
        max_path_length: usize,

        /// Cap on enumerated paths for this pair.
        #[arg(long, default_value_t = DEFAULT_MAX_PATHS_PER_OD)]
        max_paths: usize,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("flownet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            edges_csv,
            output_dir,
            source_col,
            target_col,
            max_path_length,
            max_paths_per_od,
            no_dot,
            json,
        } => {
            let graph = cli::load_graph(&edges_csv, &source_col, &target_col)?;
            cli::run_analysis(
                graph,
                AnalysisConfig {
                    max_path_length,
                    max_paths_per_od,
                },
                &output_dir,
                !no_dot,
                json,
            )
        }
        Command::Paths {
            edges_csv,
            origin,
            destination,
            source_col,
            target_col,
            max_path_length,
            max_paths,
        } => {
            let graph = cli::load_graph(&edges_csv, &source_col, &target_col)?;
            cli::list_paths(&graph, &origin, &destination, max_path_length, max_paths)
        }
    }
}
