//! Planner configuration from a TOML file or the environment.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dronenet_core::PlannerConfig;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "DRONENET_CONFIG";

/// Resolve which config file to read, if any.
pub fn config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    choose_config_path(cli_path, env::var_os(CONFIG_ENV))
}

/// `--config` wins over the environment; an empty variable counts as unset.
fn choose_config_path(cli_path: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    cli_path.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Load planner configuration, falling back to defaults when no file is named.
pub fn load_planner_config(cli_path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = config_path(cli_path) else {
        tracing::debug!("no config file given, using defaults");
        return Ok(PlannerConfig::default());
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = parse_planner_config(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    tracing::info!(path = %path.display(), models = config.consumption.rates.len(), "loaded planner config");
    Ok(config)
}

/// Parse and validate a TOML planner config.
pub fn parse_planner_config(raw: &str) -> Result<PlannerConfig> {
    let config: PlannerConfig = toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}
