// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;
use shiftboard_core::{CalendarDay, CalendarMonth};

use crate::session::Session;
use crate::util::{ArgOutputFormat, arg_manager, arg_worker, get_string, parse_month, status_color};

/// A month calendar with every day of work marked by status.
#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub manager: Option<String>,
    pub worker: Option<String>,
    pub month: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show a month of schedules, of a manager or of a worker")
            .arg(arg_manager().conflicts_with("worker"))
            .arg(arg_worker())
            .arg(
                arg!(--month <MONTH> "Month to show, YYYY-MM. Defaults to the current month")
                    .value_parser(parse_month),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            manager: get_string(matches, "manager"),
            worker: get_string(matches, "worker"),
            month: matches.get_one("month").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let (who, schedules) = match &self.worker {
            Some(worker) => (
                worker.clone(),
                session.snapshot.worker_schedules(worker, session.now),
            ),
            None => {
                let manager = session.manager(self.manager.as_deref())?;
                let schedules = session.snapshot.manager_schedules(&manager, session.now);
                (manager, schedules)
            }
        };

        let month = self.month.unwrap_or_else(|| session.now.date().first_of_month());
        let calendar = CalendarMonth::build(&schedules, month.year(), month.month())
            .ok_or_else(|| format!("Invalid month: {month}"))?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&calendar)?),
            ArgOutputFormat::Table => {
                println!("🗓️ {} {}", month.strftime("%B %Y").to_string().bold(), who.italic());
                print!("{}", render_grid(&calendar, session.now.date()));
                println!();
                print_busy_days(&calendar);
            }
        }
        Ok(())
    }
}

const WEEKDAYS: &str = "Mo Tu We Th Fr Sa Su";

/// Lays the month out in weeks starting on Monday, colouring days by status.
fn render_grid(calendar: &CalendarMonth<'_, '_>, today: Date) -> String {
    let mut out = format!("{WEEKDAYS}\n");
    let Some(first) = calendar.days.first() else {
        return out;
    };

    let offset = first.date.weekday().to_monday_zero_offset() as usize;
    let mut cells = vec!["  ".to_string(); offset];
    cells.extend(calendar.days.iter().map(|day| format_day(day, today)));

    for week in cells.chunks(7) {
        out.push_str(&week.join(" "));
        out.push('\n');
    }
    out
}

fn format_day(day: &CalendarDay<'_, '_>, today: Date) -> String {
    let cell = format!("{:>2}", day.date.day());
    let cell = match day.status {
        Some(status) => cell.color(status_color(status)).to_string(),
        None => cell,
    };
    if day.date == today {
        cell.underline().to_string()
    } else {
        cell
    }
}

fn print_busy_days(calendar: &CalendarMonth<'_, '_>) {
    let mut empty = true;
    for day in calendar.busy_days() {
        let titles = day
            .schedules
            .iter()
            .map(|s| s.posting.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let date = day.date.strftime("%m-%d").to_string();
        match day.status {
            Some(status) => println!(" {} {}", date.color(status_color(status)), titles),
            None => println!(" {date} {titles}"),
        }
        empty = false;
    }

    if empty {
        println!("No schedules this month");
    }
}
