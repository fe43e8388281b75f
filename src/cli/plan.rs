//! Plan command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{load_planner_config, CorpusArgs};
use fanout_layout::config::CliOverrides;
use fanout_layout::render::{render_layout_json, render_report, OutputFormat};
use fanout_layout::{plan_layout, ContentKind, TokenEstimator};

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Segments per worker agent
    #[arg(long, value_name = "N")]
    pub segments_per: usize,

    /// Critic reviews per segment
    #[arg(long, value_name = "N")]
    pub reviews_per: usize,

    /// Corpus is source code (use 3 chars/token instead of 4)
    #[arg(long)]
    pub code: bool,

    /// Agent context window in tokens [default: 200000]
    #[arg(long, value_name = "TOKENS", value_parser = clap::value_parser!(u64).range(1..))]
    pub context_window: Option<u64>,

    /// Fraction of the context window reserved for prompt/output [default: 0.35]
    #[arg(long, value_name = "FLOAT")]
    pub reserved_fraction: Option<f64>,

    /// Overlap between adjacent segments as a fraction of segment size [default: 0.10]
    #[arg(long, value_name = "FLOAT")]
    pub overlap_fraction: Option<f64>,

    /// Path to config file (fanout.toml or .fanout.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of human-readable report
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let overrides = CliOverrides {
        context_window: args.context_window,
        reserved_fraction: args.reserved_fraction,
        overlap_fraction: args.overlap_fraction,
    };
    let config = load_planner_config(args.config.as_deref(), &overrides)?;

    let estimator = TokenEstimator::new(config.chars_per_token);
    let corpus = args.corpus.resolve(&estimator, ContentKind::from_code_flag(args.code))?;
    tracing::debug!("Corpus resolved from {}: {} tokens", corpus.source, corpus.tokens);

    let layout = plan_layout(
        corpus.tokens,
        &config.parameters(args.segments_per, args.reviews_per),
        &config.profile(),
    )
    .context("Failed to compute fan-out layout")?;

    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Json => println!("{}", render_layout_json(&layout)?),
        OutputFormat::Report => println!("{}", render_report(&layout)),
    }

    Ok(())
}
