//! Shared CLI arguments and helpers.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use fanout_layout::config::{resolve_config, CliOverrides};
use fanout_layout::estimate::FileWarning;
use fanout_layout::{ContentKind, PlannerConfig, TokenEstimator};

/// Corpus size, given exactly one way.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct CorpusArgs {
    /// Total corpus size in tokens
    #[arg(long, value_name = "TOKENS")]
    pub corpus_tokens: Option<u64>,

    /// Total corpus size in characters (estimated at 4 chars/token, 3 with --code)
    #[arg(long, value_name = "CHARS", allow_negative_numbers = true)]
    pub corpus_chars: Option<i64>,

    /// Files or directories whose sizes are summed
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub corpus_files: Vec<PathBuf>,
}

/// Where a corpus token count came from.
pub struct ResolvedCorpus {
    pub source: &'static str,
    /// Characters or bytes the estimate was based on; `None` for direct token counts.
    pub input_size: Option<u64>,
    pub tokens: u64,
    pub files_counted: Option<usize>,
    pub warnings: Vec<FileWarning>,
}

impl CorpusArgs {
    pub fn resolve(&self, estimator: &TokenEstimator, kind: ContentKind) -> Result<ResolvedCorpus> {
        if let Some(tokens) = self.corpus_tokens {
            return Ok(ResolvedCorpus {
                source: "tokens",
                input_size: None,
                tokens,
                files_counted: None,
                warnings: Vec::new(),
            });
        }

        if let Some(chars) = self.corpus_chars {
            let tokens = estimator
                .estimate_from_chars(chars, kind)
                .context("Failed to estimate tokens from character count")?;
            return Ok(ResolvedCorpus {
                source: "chars",
                input_size: u64::try_from(chars).ok(),
                tokens,
                files_counted: None,
                warnings: Vec::new(),
            });
        }

        let estimate = estimator
            .estimate_from_files(&self.corpus_files, kind)
            .context("Failed to estimate tokens from files")?;
        Ok(ResolvedCorpus {
            source: "files",
            input_size: Some(estimate.total_bytes),
            tokens: estimate.tokens,
            files_counted: Some(estimate.files_counted),
            warnings: estimate.warnings,
        })
    }
}

/// Load the effective planner config, searching the current directory for a
/// config file unless `config_path` is given.
pub fn load_planner_config(config_path: Option<&Path>, cli: &CliOverrides) -> Result<PlannerConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    resolve_config(&cwd, config_path, cli)
}
