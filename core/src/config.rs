// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use jiff::{Zoned, civil::DateTime, tz::TimeZone};

use crate::ConfigError;

/// The name of the application.
pub const APP_NAME: &str = "shiftboard";

/// Configuration of the schedule engine.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Path to the snapshot of postings, applications and reviews.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// IANA time zone "now" is taken in. Defaults to the system time zone.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Manager shown when no manager is given.
    #[serde(default)]
    pub default_manager: Option<String>,

    /// Worker shown when no worker is given.
    #[serde(default)]
    pub default_worker: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.data_path {
            self.data_path = Some(expand_path(path)?);
        }

        self.time_zone()?;
        Ok(())
    }

    /// The configured time zone.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        match &self.timezone {
            Some(name) => TimeZone::get(name).map_err(|source| ConfigError::UnknownTimeZone {
                name: name.clone(),
                source,
            }),
            None => Ok(TimeZone::system()),
        }
    }

    /// The current wall clock time in the configured time zone.
    pub fn now(&self) -> Result<DateTime, ConfigError> {
        let tz = self.time_zone()?;
        Ok(Zoned::now().with_time_zone(tz).datetime())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;

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

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::ConfigDirNotFound)
}
