#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use digraph_core::AnalysisConfig;
use output::{CliError, OutputMode, render_error};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dg: directed-graph algorithms over the `n m` edge-list format",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Analysis config file (TOML).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Graph file to read. Reads stdin when omitted.
    #[arg(short, long, global = true, value_name = "PATH")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Pretty
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Representation",
        about = "Convert to another representation",
        long_about = "Re-express the input graph as an adjacency matrix, incidence matrix, degree table, out-neighbor list, or normalized edge list.",
        after_help = "EXAMPLES:\n    # Adjacency matrix\n    dg convert --input graph.txt\n\n    # Degree table as JSON\n    dg convert --form degrees --json < graph.txt"
    )]
    Convert(cmd::convert::ConvertArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Traverse from a source vertex",
        long_about = "Breadth- or depth-first traversal from one source, reporting the visit order or the frontier after each step.",
        after_help = "EXAMPLES:\n    # BFS visit order from vertex 1\n    dg traverse --input graph.txt\n\n    # DFS trace from vertex 3\n    dg traverse --order dfs --source 3 --trace --input graph.txt"
    )]
    Traverse(cmd::traverse::TraverseArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "BFS hop distances",
        long_about = "Hop distances from one source, or from every vertex when no source is given. Unreachable vertices print as 1000000007.",
        after_help = "EXAMPLES:\n    # Distances from vertex 2\n    dg distances --source 2 --input graph.txt\n\n    # All-pairs distance matrix\n    dg distances --input graph.txt"
    )]
    Distances(cmd::SourceArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Reachability",
        long_about = "Which vertices are reachable from one source, or the full reachability matrix.",
        after_help = "EXAMPLES:\n    # Reachable set of vertex 1\n    dg reach --source 1 --input graph.txt"
    )]
    Reach(cmd::SourceArgs),

    #[command(
        next_help_heading = "Structure",
        about = "List cycles",
        long_about = "List cycles closed by back edges during a depth-first search, up to a limit.",
        after_help = "EXAMPLES:\n    # First 10 cycles (default limit)\n    dg cycles --input graph.txt\n\n    # Only the first cycle\n    dg cycles --limit 1 --input graph.txt"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Topological order",
        long_about = "Order the vertices so every edge points forward. Reports a cycle instead when none exists."
    )]
    Toposort,

    #[command(
        next_help_heading = "Structure",
        about = "Strongly connected components",
        long_about = "Partition the vertices into strongly connected components (Kosaraju)."
    )]
    Scc,

    #[command(
        next_help_heading = "Structure",
        about = "All-pairs shortest paths",
        long_about = "Floyd-Warshall over unit-weight edges, or over `source dest weight` lines with --weighted.",
        after_help = "EXAMPLES:\n    # Hop-count matrix\n    dg shortest --input graph.txt\n\n    # Weighted input\n    dg shortest --weighted --input weighted.txt"
    )]
    Shortest(cmd::shortest::ShortestArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Classify connectivity",
        long_about = "Report whether the graph is strongly, one-sided, or weakly connected."
    )]
    Connectivity,

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    dg completions bash\n\n    # Generate zsh completions\n    dg completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("DIGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "digraph=debug,dg=debug,info"
        } else {
            "digraph=info,dg=info,warn"
        })
    });

    let format = env::var("DIGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = cli.output_mode();
    let config = AnalysisConfig::load_or_default(cli.config.as_deref())?;
    debug!(?config, "loaded analysis config");

    let session = cmd::Session {
        input: cli.input,
        config,
        output,
    };

    match cli.command {
        Commands::Convert(args) => cmd::convert::run_convert(&args, &session),
        Commands::Traverse(args) => cmd::traverse::run_traverse(&args, &session),
        Commands::Distances(args) => cmd::reach::run_distances(&args, &session),
        Commands::Reach(args) => cmd::reach::run_reach(&args, &session),
        Commands::Cycles(args) => cmd::cycles::run_cycles(&args, &session),
        Commands::Toposort => cmd::order::run_toposort(&session),
        Commands::Scc => cmd::order::run_scc(&session),
        Commands::Shortest(args) => cmd::shortest::run_shortest(&args, &session),
        Commands::Connectivity => cmd::connectivity::run_connectivity(&session),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(error = %format!("{err:#}"), "command failed");
            render_error(output, &CliError::from(&err))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
