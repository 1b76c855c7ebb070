// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while interpreting schedule data.
///
/// The scheduling views never surface these to their callers: a posting that
/// fails to parse is logged and skipped. They are returned by the strict
/// parsing and validation entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The date expression is empty after trimming.
    #[error("empty date expression")]
    Empty,

    /// A single date could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// One side of a `start~end` range could not be parsed.
    #[error("invalid date range '{0}'")]
    InvalidRange(String),

    /// The range ends before it starts.
    #[error("date range ends before it starts: {start}~{end}")]
    InvertedRange {
        /// The start of the range.
        start: String,
        /// The end of the range.
        end: String,
    },

    /// A comma separated list contained no valid date.
    #[error("no valid date in list '{0}'")]
    NoValidDates(String),

    /// The attendance score is outside of `1..=5`.
    #[error("attendance score must be between 1 and 5, got {0}")]
    InvalidScore(u8),

    /// The attendance comment is blank.
    #[error("attendance comment must not be empty")]
    EmptyComment,
}

/// Errors raised while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The user home directory is unknown.
    #[error("user-specific home directory not found")]
    HomeDirNotFound,

    /// The user configuration directory is unknown.
    #[error("user-specific config directory not found")]
    ConfigDirNotFound,

    /// The path is not valid unicode.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// The configured time zone is not known to the tz database.
    #[error("unknown time zone '{name}': {source}")]
    UnknownTimeZone {
        /// The configured IANA name.
        name: String,
        /// The underlying lookup error.
        source: jiff::Error,
    },
}
