// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, sync::OnceLock};

use jiff::{
    ToSpan,
    civil::{Date, DateTime},
};
use regex::Regex;

use crate::datetime::util::{end_of_day, start_of_day};

/// An hour and minute as written in a posting, e.g. `18:00`.
///
/// No range check is applied: the value is an offset from midnight, so `24:00`
/// lands on the next midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ClockTime {
    /// Hours after midnight.
    pub hours: u8,

    /// Minutes after the hour.
    pub minutes: u8,
}

impl ClockTime {
    /// Creates a clock time.
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    /// The instant this clock time denotes on the given day.
    pub fn on(self, date: Date) -> DateTime {
        let offset = i64::from(self.hours).hours().minutes(i64::from(self.minutes));
        start_of_day(date)
            .checked_add(offset)
            .unwrap_or_else(|_| end_of_day(date))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// The working hours of a posting, parsed from text like `09:00 - 18:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TimeWindow {
    /// When work starts.
    pub start: ClockTime,

    /// When work ends.
    pub end: ClockTime,
}

impl TimeWindow {
    /// Finds the first `HH:MM - HH:MM` pair in the text.
    ///
    /// Free-text descriptions such as "morning" yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        const RE: &str = r"([0-9]{1,2}):([0-9]{2})\s*-\s*([0-9]{1,2}):([0-9]{2})";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let captures = re.captures(s)?;
        let num = |i: usize| captures[i].parse::<u8>().ok();
        Some(Self {
            start: ClockTime::new(num(1)?, num(2)?),
            end: ClockTime::new(num(3)?, num(4)?),
        })
    }

    /// The end of work on the given day, or the end of that day without a window.
    pub fn end_on(window: Option<&Self>, date: Date) -> DateTime {
        match window {
            Some(w) => w.end.on(date),
            None => end_of_day(date),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Extracts the end time from a `HH:MM - HH:MM` time range.
pub fn parse_end_time(s: &str) -> Option<ClockTime> {
    TimeWindow::parse(s).map(|w| w.end)
}
