//! CLI overrides applied on top of file and environment settings.

use crate::domain::PlannerConfig;

/// Planner settings given on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub context_window: Option<u64>,
    pub reserved_fraction: Option<f64>,
    pub overlap_fraction: Option<f64>,
}

pub fn merge_cli_with_config(mut config: PlannerConfig, cli: &CliOverrides) -> PlannerConfig {
    if let Some(window) = cli.context_window {
        config.context_window = window;
    }
    if let Some(reserved) = cli.reserved_fraction {
        config.reserved_fraction = reserved;
    }
    if let Some(overlap) = cli.overlap_fraction {
        config.overlap_fraction = overlap;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_win() {
        let cli = CliOverrides { context_window: Some(8_000), ..CliOverrides::default() };
        let merged = merge_cli_with_config(PlannerConfig::default(), &cli);
        assert_eq!(merged.context_window, 8_000);
        assert_eq!(merged.reserved_fraction, 0.35);
    }

    #[test]
    fn empty_overrides_keep_config() {
        let base = PlannerConfig { overlap_fraction: 0.3, ..PlannerConfig::default() };
        assert_eq!(merge_cli_with_config(base.clone(), &CliOverrides::default()), base);
    }
}
