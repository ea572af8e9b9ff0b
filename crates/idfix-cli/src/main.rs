// crates/idfix-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "idfix-cli")]
#[command(about = "Normalize and de-duplicate object ids in a JSON document", long_about = None)]
pub struct Cli {
    /// Verbose logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate & correct the ids of a JSON document's "objects" array
    Check(cmd::check::CheckArgs),

    /// Print the canonical form of one or more ids
    Normalize(cmd::normalize::NormalizeArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Check(args) => cmd::check::run(args),
        Commands::Normalize(args) => cmd::normalize::run(args),
    }
}
