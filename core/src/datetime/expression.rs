// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::{ToSpan, civil::Date};

use crate::ScheduleError;
use crate::datetime::util::{STABLE_FORMAT_DATEONLY, parse_date};

/// The dates of a posting, as written by its author.
///
/// The variant is decided once by the parser so that later stages never have to
/// look at the raw text again to know whether the dates form a contiguous range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateExpression {
    /// A single day, `YYYY-MM-DD`.
    Single(Date),

    /// Every day between two dates, inclusive, `YYYY-MM-DD~YYYY-MM-DD`.
    Range {
        /// The first day.
        start: Date,
        /// The last day.
        end: Date,
    },

    /// Separate days, `YYYY-MM-DD, YYYY-MM-DD, ...`, in the order they were written.
    List(Vec<Date>),
}

impl DateExpression {
    /// Whether the expression is a contiguous `start~end` range.
    pub fn is_range(&self) -> bool {
        matches!(self, DateExpression::Range { .. })
    }

    /// The first day of the expression.
    pub fn first(&self) -> Option<Date> {
        match self {
            DateExpression::Single(d) => Some(*d),
            DateExpression::Range { start, .. } => Some(*start),
            DateExpression::List(dates) => dates.first().copied(),
        }
    }

    /// The last day of the expression.
    pub fn last(&self) -> Option<Date> {
        match self {
            DateExpression::Single(d) => Some(*d),
            DateExpression::Range { end, .. } => Some(*end),
            DateExpression::List(dates) => dates.last().copied(),
        }
    }

    /// Expands the expression into its concrete days.
    pub fn dates(&self) -> DateSequence {
        match self {
            DateExpression::Single(d) => DateSequence(vec![*d]),
            DateExpression::Range { start, end } => {
                let end = *end;
                let dates = start.series(1.day()).take_while(|d| *d <= end).collect();
                DateSequence(dates)
            }
            DateExpression::List(dates) => DateSequence(dates.clone()),
        }
    }
}

impl FromStr for DateExpression {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ScheduleError::Empty);
        }

        if let Some((start, end)) = trimmed.split_once('~') {
            let (Some(start), Some(end)) = (parse_date(start.trim()), parse_date(end.trim())) else {
                return Err(ScheduleError::InvalidRange(trimmed.to_owned()));
            };

            if end < start {
                return Err(ScheduleError::InvertedRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }

            return Ok(DateExpression::Range { start, end });
        }

        if trimmed.contains(',') {
            let mut dates: Vec<Date> = Vec::new();
            for piece in trimmed.split(',').map(str::trim) {
                match parse_date(piece) {
                    Some(d) if !dates.contains(&d) => dates.push(d),
                    Some(_) => tracing::trace!(piece, "dropping duplicated date in list"),
                    None => tracing::trace!(piece, "dropping invalid date in list"),
                }
            }

            return match dates.is_empty() {
                true => Err(ScheduleError::NoValidDates(trimmed.to_owned())),
                false => Ok(DateExpression::List(dates)),
            };
        }

        parse_date(trimmed)
            .map(DateExpression::Single)
            .ok_or_else(|| ScheduleError::InvalidDate(trimmed.to_owned()))
    }
}

impl fmt::Display for DateExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateExpression::Single(d) => write!(f, "{}", d.strftime(STABLE_FORMAT_DATEONLY)),
            DateExpression::Range { start, end } => write!(
                f,
                "{}~{}",
                start.strftime(STABLE_FORMAT_DATEONLY),
                end.strftime(STABLE_FORMAT_DATEONLY)
            ),
            DateExpression::List(dates) => write_dates(f, dates),
        }
    }
}

/// The concrete days of a posting, in expression order.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DateSequence(Vec<Date>);

impl DateSequence {
    /// The first day, if any.
    pub fn first(&self) -> Option<Date> {
        self.0.first().copied()
    }

    /// The last day, if any.
    pub fn last(&self) -> Option<Date> {
        self.0.last().copied()
    }

    /// Whether the given day is one of the occurrences.
    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no days at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the days.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    /// The days as a slice.
    pub fn as_slice(&self) -> &[Date] {
        &self.0
    }
}

impl From<Vec<Date>> for DateSequence {
    fn from(dates: Vec<Date>) -> Self {
        DateSequence(dates)
    }
}

/// Formats as a comma separated list which parses back into the same sequence.
impl fmt::Display for DateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dates(f, &self.0)
    }
}

fn write_dates(f: &mut fmt::Formatter<'_>, dates: &[Date]) -> fmt::Result {
    for (i, d) in dates.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", d.strftime(STABLE_FORMAT_DATEONLY))?;
    }
    Ok(())
}

/// Expands a raw date expression into its days.
///
/// Never fails: an expression that cannot be understood yields an empty sequence,
/// which callers treat as "this posting cannot be scheduled".
pub fn parse_date_sequence(expr: &str) -> DateSequence {
    match expr.parse::<DateExpression>() {
        Ok(expression) => expression.dates(),
        Err(e) => {
            tracing::debug!(expr, error = %e, "unschedulable date expression");
            DateSequence::default()
        }
    }
}
