// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::civil::{self, Date, DateTime, Time};
use regex::Regex;

/// NOTE: Used for grouping keys and display, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

pub const fn start_of_day_time() -> Time {
    Time::midnight()
}

/// The end of the day used when a schedule has no usable end time.
pub const fn end_of_day_time() -> Time {
    civil::time(23, 59, 59, 999_000_000)
}

/// The start of the day (00:00:00) for the given date.
pub fn start_of_day(date: Date) -> DateTime {
    date.to_datetime(start_of_day_time())
}

/// The end of the day (23:59:59.999) for the given date.
pub fn end_of_day(date: Date) -> DateTime {
    date.to_datetime(end_of_day_time())
}

/// Parses a calendar date in the strict `YYYY-MM-DD` form.
///
/// Returns `None` for anything else, including impossible dates such as `2024-02-30`.
pub fn parse_date(s: &str) -> Option<Date> {
    const RE: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let captures = re.captures(s)?;
    let year = captures[1].parse::<i16>().ok()?;
    let month = captures[2].parse::<i8>().ok()?;
    let day = captures[3].parse::<i8>().ok()?;
    Date::new(year, month, day).ok()
}

/// Whether two dates fall in the same calendar month.
pub fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
