// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Schedule engine of the shiftboard gig marketplace.
//!
//! Postings carry free-form dates (`2024-12-15`, `2024-12-01~2024-12-03` or
//! `2024-12-10, 2024-12-12`) and working hours (`09:00 - 18:00`). This crate parses
//! them, classifies each schedule as upcoming, ongoing or completed against an
//! explicit "now", and groups the results for calendar and list views.

mod config;
mod datetime;
mod earnings;
mod error;
mod grouping;
mod posting;
mod review;
mod schedule;
mod status;

pub use crate::config::{APP_NAME, Config, get_config_dir};
pub use crate::datetime::{
    ClockTime, DateExpression, DateSequence, TimeWindow, end_of_day, parse_date,
    parse_date_sequence, parse_end_time, same_month, start_of_day,
};
pub use crate::earnings::Earnings;
pub use crate::error::{ConfigError, ScheduleError};
pub use crate::grouping::{
    CalendarDay, CalendarMonth, DateBuckets, StatusBuckets, StatusCounts, by_anchor_date,
    by_anchor_date_in_month, by_occurrence_date, day_status, in_month, on_date,
};
pub use crate::posting::{
    Application, ApplicationStatus, AttendanceReview, Posting, PostingStatus, Snapshot,
};
pub use crate::review::{ReviewBook, ReviewDraft, SCORE_MAX, SCORE_MIN};
pub use crate::schedule::{ClassifiedSchedule, Participant};
pub use crate::status::{ScheduleStatus, anchor_date, classify};
