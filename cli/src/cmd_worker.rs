// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;
use serde::Serialize;
use shiftboard_core::{ClassifiedSchedule, Earnings, by_anchor_date, by_anchor_date_in_month};

use crate::schedule_formatter::{ScheduleColumn, ScheduleFormatter, print_grouped};
use crate::session::Session;
use crate::util::{ArgOutputFormat, arg_worker, format_salary, get_string, parse_month};

/// The worker's own schedule, one entry per day of work, and what it pays.
#[derive(Debug, Clone)]
pub struct CmdWorker {
    pub worker: Option<String>,
    pub month: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdWorker {
    pub const NAME: &str = "worker";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the days a worker is booked for and their earnings")
            .arg(arg_worker())
            .arg(
                arg!(--month <MONTH> "Only list days of this month, YYYY-MM")
                    .value_parser(parse_month),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            worker: get_string(matches, "worker"),
            month: matches.get_one("month").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing worker schedule...");
        let worker = session.worker(self.worker.as_deref())?;

        let schedules = session.snapshot.worker_schedules(&worker, session.now);
        // Earnings always cover the month of now, whatever month is listed
        let earnings = Earnings::compute(&schedules, session.now);

        let buckets = match self.month {
            Some(month) => by_anchor_date_in_month(&schedules, month.year(), month.month()),
            None => by_anchor_date(&schedules),
        };

        match self.output_format {
            ArgOutputFormat::Json => {
                let view = WorkerView {
                    worker: &worker,
                    earnings,
                    schedules: buckets.values().flatten().copied().collect(),
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            ArgOutputFormat::Table => {
                println!("👷 {} {}", "Schedule of".bold(), worker.bold());
                if buckets.is_empty() {
                    println!("No schedules");
                } else {
                    let formatter = ScheduleFormatter::new(vec![
                        ScheduleColumn::Status,
                        ScheduleColumn::Time,
                        ScheduleColumn::Salary,
                        ScheduleColumn::Title,
                        ScheduleColumn::Location,
                    ]);
                    print_grouped(&formatter, &buckets);
                }
                println!();
                print_earnings(&earnings);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct WorkerView<'s, 'a> {
    worker: &'s str,
    earnings: Earnings,
    schedules: Vec<&'s ClassifiedSchedule<'a>>,
}

fn print_earnings(earnings: &Earnings) {
    println!("💰 {}", "Earnings".bold());
    for (label, amount) in earnings_rows(earnings) {
        println!(" {} {label:<18} {:>12}", "►".green(), format_salary(amount));
    }
}

fn earnings_rows(earnings: &Earnings) -> [(&'static str, u64); 5] {
    [
        ("Earned this month", earnings.earned_this_month),
        ("Expected", earnings.expected_this_month),
        ("Month total", earnings.total_this_month),
        ("Earned this week", earnings.earned_this_week),
        ("All time", earnings.total_completed),
    ]
}
