// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use colored::Color;
use jiff::civil::{Date, DateTime};
use shiftboard_core::{ScheduleStatus, parse_date, start_of_day};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    #[default]
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_manager() -> Arg {
    arg!(-m --manager <ID> "Manager whose postings to show")
}

pub fn arg_worker() -> Arg {
    arg!(-w --worker <ID> "Worker whose schedules to show")
}

pub fn get_string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

/// Parses the reference time, `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD` for midnight.
pub fn parse_now(s: &str) -> Result<DateTime, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::strptime("%Y-%m-%d %H:%M", s) {
        Ok(dt)
    } else if let Some(date) = parse_date(s) {
        Ok(start_of_day(date))
    } else {
        Err(format!(
            "Invalid time '{s}'. Expected format: YYYY-MM-DD HH:MM or YYYY-MM-DD"
        ))
    }
}

/// Parses a calendar month, `YYYY-MM`, into its first day.
pub fn parse_month(s: &str) -> Result<Date, String> {
    parse_date(&format!("{}-01", s.trim()))
        .ok_or_else(|| format!("Invalid month '{s}'. Expected format: YYYY-MM"))
}

pub fn status_color(status: ScheduleStatus) -> Color {
    match status {
        ScheduleStatus::Upcoming => Color::Blue,
        ScheduleStatus::Ongoing => Color::Green,
        ScheduleStatus::Completed => Color::BrightBlack,
    }
}

/// Formats a salary with thousands separators.
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
