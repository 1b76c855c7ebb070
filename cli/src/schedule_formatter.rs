// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use shiftboard_core::{ClassifiedSchedule, DateBuckets};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{format_salary, status_color};

#[derive(Debug)]
pub struct ScheduleFormatter {
    columns: Vec<ScheduleColumn>,
}

impl ScheduleFormatter {
    pub fn new(columns: Vec<ScheduleColumn>) -> Self {
        Self { columns }
    }

    pub fn format<'f, 's, 'a>(
        &'f self,
        schedules: &'f [&'s ClassifiedSchedule<'a>],
    ) -> Display<'f, 's, 'a> {
        Display {
            schedules,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'f, 's, 'a> {
    schedules: &'f [&'s ClassifiedSchedule<'a>],
    formatter: &'f ScheduleFormatter,
}

impl fmt::Display for Display<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Table::new(&self.formatter.columns, self.schedules))
    }
}

/// Prints each date bucket under its own heading.
pub fn print_grouped(formatter: &ScheduleFormatter, buckets: &DateBuckets<'_, '_>) {
    for (date, schedules) in buckets {
        let heading = date.strftime("%a %Y-%m-%d").to_string();
        println!(" {} {}", "►".green(), heading.italic());
        print!("{}", formatter.format(schedules));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleColumn {
    Status,
    Title,
    /// Every working day of the schedule.
    Dates,
    Time,
    Location,
    Participants,
    Salary,
}

impl<'s, 'a> TableColumn<&'s ClassifiedSchedule<'a>> for ScheduleColumn {
    fn format<'b>(&self, data: &'b &'s ClassifiedSchedule<'a>) -> Cow<'b, str> {
        let posting = data.posting;
        match self {
            ScheduleColumn::Status => data.status.to_string().into(),
            ScheduleColumn::Title => posting.title.as_str().into(),
            ScheduleColumn::Dates => data.expression.to_string().into(),
            ScheduleColumn::Time => match &data.window {
                Some(window) => window.to_string().into(),
                None => posting.time.as_str().into(),
            },
            ScheduleColumn::Location => posting.location.as_deref().unwrap_or("").into(),
            ScheduleColumn::Participants => format_participants(data).into(),
            ScheduleColumn::Salary => format_salary(posting.salary).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ScheduleColumn::Salary => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &&'s ClassifiedSchedule<'a>) -> Option<Color> {
        match self {
            ScheduleColumn::Status => Some(status_color(data.status)),
            _ => None,
        }
    }
}

/// Participant names, marking the ones already reviewed with their score.
fn format_participants(schedule: &ClassifiedSchedule<'_>) -> String {
    schedule
        .participants
        .iter()
        .map(|p| match p.review {
            Some(review) => format!("{} ({}/5)", p.user_name, review.score),
            None => p.user_name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
