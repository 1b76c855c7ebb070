// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use jiff::{Zoned, civil::DateTime};
use shiftboard_core::{Config as CoreConfig, Snapshot};
use tokio::fs;

use crate::config::parse_config;

/// A snapshot paired with the reference time it is classified at.
#[derive(Debug)]
pub struct Session {
    pub config: CoreConfig,
    pub snapshot: Snapshot,
    pub now: DateTime,
}

impl Session {
    /// Reads the configuration and the snapshot it points to.
    ///
    /// `now` overrides the wall clock of the configured time zone.
    pub async fn load(
        config_path: Option<PathBuf>,
        now: Option<DateTime>,
    ) -> Result<Self, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config_path).await?;
        Self::open(config, now).await
    }

    /// Opens the snapshot of an already parsed configuration.
    pub async fn open(config: CoreConfig, now: Option<DateTime>) -> Result<Self, Box<dyn Error>> {
        let path = config
            .data_path
            .as_ref()
            .ok_or("No data_path configured: set data_path in the [core] table")?;

        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read snapshot at {}: {}", path.display(), e))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| format!("Invalid snapshot at {}: {}", path.display(), e))?;

        let now = match now {
            Some(now) => now,
            None => config.now()?,
        };

        tracing::debug!(
            posts = snapshot.posts.len(),
            applications = snapshot.applications.len(),
            reviews = snapshot.reviews.len(),
            %now,
            "snapshot loaded"
        );
        Ok(Self {
            config,
            snapshot,
            now,
        })
    }

    /// The manager given on the command line, or the configured default.
    pub fn manager(&self, arg: Option<&str>) -> Result<String, Box<dyn Error>> {
        arg.map(str::to_owned)
            .or_else(|| self.config.default_manager.clone())
            .ok_or_else(|| "No manager given: pass --manager or set default_manager".into())
    }

    /// The worker given on the command line, or the configured default.
    pub fn worker(&self, arg: Option<&str>) -> Result<String, Box<dyn Error>> {
        arg.map(str::to_owned)
            .or_else(|| self.config.default_worker.clone())
            .ok_or_else(|| "No worker given: pass --worker or set default_worker".into())
    }
}

/// The reference time of a command that reads no snapshot.
///
/// `now` wins. Otherwise the wall clock is read in the configured time zone, or in
/// the system time zone when no configuration can be read.
pub async fn reference_now(config_path: Option<PathBuf>, now: Option<DateTime>) -> DateTime {
    if let Some(now) = now {
        return now;
    }

    match parse_config(config_path).await {
        Ok(config) => match config.now() {
            Ok(now) => return now,
            Err(e) => tracing::warn!(error = %e, "invalid time zone, using the system one"),
        },
        Err(e) => tracing::debug!(error = %e, "no configuration, using the system time zone"),
    }
    Zoned::now().datetime()
}
