//! Estimate command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::utils::{load_planner_config, CorpusArgs};
use fanout_layout::config::CliOverrides;
use fanout_layout::render::OutputFormat;
use fanout_layout::utils::format_with_commas;
use fanout_layout::{ContentKind, TokenEstimator};

#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Corpus is source code (use 3 chars/token instead of 4)
    #[arg(long)]
    pub code: bool,

    /// Path to config file (fanout.toml or .fanout.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let config = load_planner_config(args.config.as_deref(), &CliOverrides::default())?;
    let kind = ContentKind::from_code_flag(args.code);
    let estimator = TokenEstimator::new(config.chars_per_token);
    let corpus = args.corpus.resolve(&estimator, kind)?;

    let chars_per_token = estimator.ratios().ratio_for(kind);

    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Json => {
            let warnings: Vec<String> = corpus.warnings.iter().map(ToString::to_string).collect();
            let doc = json!({
                "source": corpus.source,
                "content_kind": kind.as_str(),
                "chars_per_token": chars_per_token,
                "input_size": corpus.input_size,
                "files_counted": corpus.files_counted,
                "tokens": corpus.tokens,
                "warnings": warnings,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Report => {
            println!("Source: {}", corpus.source);
            println!("Content: {} ({} chars/token)", kind.as_str(), chars_per_token);
            if let Some(size) = corpus.input_size {
                println!("Input size: {}", format_with_commas(size));
            }
            if let Some(files) = corpus.files_counted {
                println!("Files counted: {}", files);
            }
            if !corpus.warnings.is_empty() {
                println!("Files skipped: {}", corpus.warnings.len());
            }
            println!("Estimated tokens: {}", format_with_commas(corpus.tokens));
        }
    }

    Ok(())
}
