// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::{Date, DateTime};

use crate::{DateExpression, TimeWindow, start_of_day};

/// Where a schedule stands relative to a reference time.
///
/// It is always derived from the dates, the time window and "now", never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScheduleStatus {
    /// No occurrence has started yet.
    Upcoming,

    /// The schedule is running, or has occurrences both behind and ahead.
    Ongoing,

    /// Every occurrence is over.
    Completed,
}

const STATUS_UPCOMING: &str = "upcoming";
const STATUS_ONGOING: &str = "ongoing";
const STATUS_COMPLETED: &str = "completed";

impl AsRef<str> for ScheduleStatus {
    fn as_ref(&self) -> &str {
        match self {
            ScheduleStatus::Upcoming => STATUS_UPCOMING,
            ScheduleStatus::Ongoing => STATUS_ONGOING,
            ScheduleStatus::Completed => STATUS_COMPLETED,
        }
    }
}

impl Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ScheduleStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_UPCOMING => Ok(ScheduleStatus::Upcoming),
            STATUS_ONGOING => Ok(ScheduleStatus::Ongoing),
            STATUS_COMPLETED => Ok(ScheduleStatus::Completed),
            _ => Err(()),
        }
    }
}

/// Classifies a schedule against `now`.
///
/// A `start~end` range is one continuous engagement from the first midnight to the
/// end of work on the last day. Single days and lists are judged day by day: the
/// schedule stays ongoing while some days are behind and some are still ahead.
#[tracing::instrument(level = "trace", ret)]
pub fn classify(
    expr: &DateExpression,
    window: Option<&TimeWindow>,
    now: DateTime,
) -> ScheduleStatus {
    match expr {
        DateExpression::Range { start, end } => classify_range(*start, *end, window, now),
        DateExpression::Single(date) => classify_days(std::slice::from_ref(date), window, now),
        DateExpression::List(dates) => classify_days(dates, window, now),
    }
}

fn classify_range(
    start: Date,
    end: Date,
    window: Option<&TimeWindow>,
    now: DateTime,
) -> ScheduleStatus {
    let first = start_of_day(start);
    let last = TimeWindow::end_on(window, end);
    if first <= now && now <= last {
        ScheduleStatus::Ongoing
    } else if first > now {
        ScheduleStatus::Upcoming
    } else {
        ScheduleStatus::Completed
    }
}

fn classify_days(dates: &[Date], window: Option<&TimeWindow>, now: DateTime) -> ScheduleStatus {
    let today = now.date();
    let ends: Vec<DateTime> = dates
        .iter()
        .map(|d| TimeWindow::end_on(window, *d))
        .collect();

    let has_future = ends.iter().any(|end| *end > now);
    let has_past = ends.iter().any(|end| *end < now);
    let has_today = dates.contains(&today);
    let ongoing_today = has_today && ends.iter().any(|end| end.date() == today && *end > now);

    if ongoing_today || (has_past && has_future) {
        ScheduleStatus::Ongoing
    } else if has_future {
        ScheduleStatus::Upcoming
    } else {
        // Either today's shift is already over with nothing left, or every day is past.
        ScheduleStatus::Completed
    }
}

/// The day a schedule is filed under in list views.
///
/// Completed schedules are filed under their last day, the others under their first.
pub fn anchor_date(status: ScheduleStatus, expr: &DateExpression) -> Option<Date> {
    match status {
        ScheduleStatus::Completed => expr.last(),
        ScheduleStatus::Upcoming | ScheduleStatus::Ongoing => expr.first(),
    }
}
