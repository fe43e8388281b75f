//! Command-line interface for fanout-layout
//!
//! Provides `plan`, `estimate` and `completions` subcommands.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod estimate;
mod plan;
mod utils;

/// Plan segment, worker and critic layouts for two-stage fan-out corpus analysis
#[derive(Parser)]
#[command(name = "fanout-layout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fan-out layout for a corpus
    Plan(Box<plan::PlanArgs>),

    /// Estimate corpus tokens without planning a layout
    Estimate(estimate::EstimateArgs),

    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Args)]
struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    shell: Shell,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // --verbose forces DEBUG; otherwise RUST_LOG applies and WARN is the fallback.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Plan(args) => plan::run(*args),
        Commands::Estimate(args) => estimate::run(args),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(args.shell, &mut command, "fanout-layout", &mut std::io::stdout());
            Ok(())
        }
    }
}
