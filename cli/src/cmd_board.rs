// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::civil::Date;
use serde::Serialize;
use shiftboard_core::{
    ClassifiedSchedule, ScheduleStatus, StatusBuckets, StatusCounts, by_anchor_date,
    by_anchor_date_in_month,
};

use crate::schedule_formatter::{ScheduleColumn, ScheduleFormatter, print_grouped};
use crate::session::Session;
use crate::util::{ArgOutputFormat, arg_manager, get_string, parse_month, status_color};

/// The manager's board: every posting of one manager, filed under its anchor day.
#[derive(Debug, Default, Clone)]
pub struct CmdBoard {
    pub manager: Option<String>,
    pub status: Option<ScheduleStatus>,
    pub month: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the postings of a manager by status")
            .arg(arg_manager())
            .arg(
                arg!(-s --status <STATUS> "Only show schedules with this status")
                    .value_parser(value_parser!(ScheduleStatus)),
            )
            .arg(
                arg!(--month <MONTH> "Only show schedules filed in this month, YYYY-MM")
                    .value_parser(parse_month),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            manager: get_string(matches, "manager"),
            status: matches.get_one("status").copied(),
            month: matches.get_one("month").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing board...");
        let manager = session.manager(self.manager.as_deref())?;

        let mut schedules = session.snapshot.manager_schedules(&manager, session.now);
        if let Some(status) = self.status {
            schedules.retain(|s| s.status == status);
        }

        let buckets = match self.month {
            Some(month) => by_anchor_date_in_month(&schedules, month.year(), month.month()),
            None => by_anchor_date(&schedules),
        };
        let listed: Vec<&ClassifiedSchedule<'_>> = buckets.values().flatten().copied().collect();
        let counts = StatusBuckets::partition(listed.iter().copied()).counts();

        match self.output_format {
            ArgOutputFormat::Json => {
                let board = Board {
                    manager: &manager,
                    counts,
                    schedules: listed,
                };
                println!("{}", serde_json::to_string_pretty(&board)?);
            }
            ArgOutputFormat::Table => {
                println!("📋 {} {}", "Board of".bold(), manager.bold());
                println!("{}", format_counts(counts));
                if buckets.is_empty() {
                    println!("No schedules");
                    return Ok(());
                }

                let formatter = ScheduleFormatter::new(vec![
                    ScheduleColumn::Status,
                    ScheduleColumn::Dates,
                    ScheduleColumn::Time,
                    ScheduleColumn::Salary,
                    ScheduleColumn::Title,
                    ScheduleColumn::Participants,
                ]);
                print_grouped(&formatter, &buckets);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Board<'s, 'a> {
    manager: &'s str,
    counts: StatusCounts,
    schedules: Vec<&'s ClassifiedSchedule<'a>>,
}

fn format_counts(counts: StatusCounts) -> String {
    [
        (ScheduleStatus::Ongoing, counts.ongoing),
        (ScheduleStatus::Upcoming, counts.upcoming),
        (ScheduleStatus::Completed, counts.completed),
    ]
    .iter()
    .map(|(status, n)| format!("{} {n}", status.to_string().color(status_color(*status))))
    .collect::<Vec<_>>()
    .join("  ")
}
