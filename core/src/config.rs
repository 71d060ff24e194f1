// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;

use crate::TextTable;

/// The name of the application.
pub const APP_NAME: &str = "coursedate";

/// Core configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding confirmed course files.
    pub courses_path: PathBuf,

    /// Directory holding course drafts being edited.
    #[serde(default)]
    pub drafts_dir: Option<PathBuf>,

    /// IANA time zone used to show training dates, defaults to the system zone.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Overrides for user-visible strings, keyed like `error.form_errors`.
    #[serde(default)]
    pub text: HashMap<String, String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize courses path
        self.courses_path = expand_path(&self.courses_path)
            .map_err(|e| format!("Failed to expand courses path: {e}"))?;

        // Normalize drafts directory
        match &self.drafts_dir {
            Some(a) => {
                self.drafts_dir = Some(
                    expand_path(a).map_err(|e| format!("Failed to expand drafts directory: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.drafts_dir = Some(a.join(APP_NAME).join("drafts")),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }

    /// The configured time zone, or the system one.
    pub fn time_zone(&self) -> Result<TimeZone, Box<dyn Error>> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| format!("Unknown time zone '{name}': {e}").into()),
            None => Ok(TimeZone::system()),
        }
    }

    /// User-visible strings with the configured overrides applied.
    pub fn text_table(&self) -> TextTable {
        TextTable::new(self.text.clone())
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
