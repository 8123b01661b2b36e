mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    candidates::CandidatesSubcommand, config::ConfigSubcommand, points::PointsSubcommand,
    qa::QaSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stump",
    about = "Browse candidate talking points and audit content quality",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .stump/ or .git/)
    #[arg(long, global = true, env = "STUMP_ROOT")]
    root: Option<PathBuf>,

    /// Candidate content file (overrides content.path in config)
    #[arg(long, global = true, env = "STUMP_CONTENT")]
    content: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .stump/config.yaml
    Init,

    /// List and inspect candidates
    Candidates {
        #[command(subcommand)]
        subcommand: CandidatesSubcommand,
    },

    /// List talking points and resolve anchor ids
    Points {
        #[command(subcommand)]
        subcommand: PointsSubcommand,
    },

    /// Pick random talking points for a candidate without immediate repeats
    Spin {
        /// Candidate id
        candidate: String,
        /// Number of consecutive spins
        #[arg(long, short = 'n', default_value_t = 1)]
        times: usize,
        /// Seed the generator for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Walk from a talking point down through its follow-up questions
    Browse {
        /// Anchor id (<candidate>-<talking point>)
        anchor: String,
        /// Follow-up ids to open, in order
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        path: Vec<String>,
        /// Go back this many levels after opening the path
        #[arg(long, default_value_t = 0)]
        back: usize,
    },

    /// Content quality checks
    Qa {
        #[command(subcommand)]
        subcommand: QaSubcommand,
    },

    /// Show or validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let content = cli.content.as_deref();

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Candidates { subcommand } => {
            cmd::candidates::run(&root, content, subcommand, cli.json)
        }
        Commands::Points { subcommand } => cmd::points::run(&root, content, subcommand, cli.json),
        Commands::Spin {
            candidate,
            times,
            seed,
        } => cmd::spin::run(&root, content, &candidate, times, seed, cli.json),
        Commands::Browse { anchor, path, back } => {
            cmd::browse::run(&root, content, &anchor, &path, back, cli.json)
        }
        Commands::Qa { subcommand } => cmd::qa::run(&root, content, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, content, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
