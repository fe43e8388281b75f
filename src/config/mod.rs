//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

use crate::domain::PlannerConfig;
use anyhow::Result;
use std::path::Path;

pub mod loader;
pub mod merge;

pub use loader::{apply_env_overrides, load_config, ENV_PREFIX};
pub use merge::{merge_cli_with_config, CliOverrides};

/// Resolve the effective planner settings for one invocation.
pub fn resolve_config(
    search_dir: &Path,
    config_path: Option<&Path>,
    cli: &CliOverrides,
) -> Result<PlannerConfig> {
    let from_file = load_config(search_dir, config_path)?;
    let from_env = apply_env_overrides(from_file)?;
    Ok(merge_cli_with_config(from_env, cli))
}
