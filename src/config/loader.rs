//! Config file loading

use crate::domain::PlannerConfig;
use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `FANOUT_CONTEXT_WINDOW=100000`.
/// Nested keys use `__`: `FANOUT_CHARS_PER_TOKEN__CODE=2`.
pub const ENV_PREFIX: &str = "FANOUT_";

/// Section name that may wrap the settings in a shared config file.
const SECTION: &str = "fanout";

const CANDIDATES: [&str; 6] =
    ["fanout.toml", ".fanout.toml", "fanout.yml", ".fanout.yml", "fanout.yaml", ".fanout.yaml"];

/// Load planner settings from `config_path`, or from the first config file
/// found in `search_dir`.
///
/// An explicitly given file must exist and parse. A discovered file that
/// fails to parse is reported and ignored.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<PlannerConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(PlannerConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded planner config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(PlannerConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Layer `FANOUT_*` environment variables over `base`.
pub fn apply_env_overrides(base: PlannerConfig) -> Result<PlannerConfig> {
    Figment::from(Serialized::defaults(base))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Invalid FANOUT_* environment override")
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<PlannerConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<PlannerConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}
