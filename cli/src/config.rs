// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use coursedate_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const COURSEDATE_CONFIG_ENV: &str = "COURSEDATE_CONFIG";
const COURSEDATE_DEV_ENV: &str = "COURSEDATE_DEV";

const COURSEDATE_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const COURSEDATE_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and reads the configuration: `--config`, then `COURSEDATE_CONFIG`,
/// then the user config directory.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(COURSEDATE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({COURSEDATE_DEV_ENV} is set): config must be explicitly specified via --config or {COURSEDATE_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(COURSEDATE_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if COURSEDATE_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if COURSEDATE_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            COURSEDATE_DEV_ENV,
            val,
            COURSEDATE_DEV_VALID_TRUE.join(", "),
            COURSEDATE_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
