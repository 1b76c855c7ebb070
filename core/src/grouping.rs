// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping of classified schedules for calendar and list views.

use std::collections::BTreeMap;

use jiff::{ToSpan, civil::Date};
use serde::Serialize;

use crate::{ClassifiedSchedule, ScheduleStatus};

/// Schedules bucketed by date, ascending.
///
/// Within a bucket schedules keep the order they were inserted in, and a schedule
/// appears at most once.
pub type DateBuckets<'s, 'a> = BTreeMap<Date, Vec<&'s ClassifiedSchedule<'a>>>;

/// Files every schedule under each of its occurrence dates.
///
/// This is the calendar grouping: a three day range shows up on three days.
pub fn by_occurrence_date<'s, 'a>(schedules: &'s [ClassifiedSchedule<'a>]) -> DateBuckets<'s, 'a> {
    let mut buckets = DateBuckets::new();
    for schedule in schedules {
        for date in schedule.dates.iter() {
            insert_unique(&mut buckets, date, schedule);
        }
    }
    buckets
}

/// Files every schedule exactly once, under its anchor date.
///
/// This is the card list grouping.
pub fn by_anchor_date<'s, 'a>(schedules: &'s [ClassifiedSchedule<'a>]) -> DateBuckets<'s, 'a> {
    let mut buckets = DateBuckets::new();
    for schedule in schedules {
        insert_unique(&mut buckets, schedule.anchor, schedule);
    }
    buckets
}

fn insert_unique<'s, 'a>(
    buckets: &mut DateBuckets<'s, 'a>,
    date: Date,
    schedule: &'s ClassifiedSchedule<'a>,
) {
    let bucket = buckets.entry(date).or_default();
    if !bucket.iter().any(|s| s.id == schedule.id) {
        bucket.push(schedule);
    }
}

/// Schedules split by status, each list in input order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StatusBuckets<'s, 'a> {
    pub upcoming: Vec<&'s ClassifiedSchedule<'a>>,
    pub ongoing: Vec<&'s ClassifiedSchedule<'a>>,
    pub completed: Vec<&'s ClassifiedSchedule<'a>>,
}

impl<'s, 'a> StatusBuckets<'s, 'a> {
    pub fn partition(schedules: impl IntoIterator<Item = &'s ClassifiedSchedule<'a>>) -> Self {
        let mut buckets = Self::default();
        for schedule in schedules {
            match schedule.status {
                ScheduleStatus::Upcoming => buckets.upcoming.push(schedule),
                ScheduleStatus::Ongoing => buckets.ongoing.push(schedule),
                ScheduleStatus::Completed => buckets.completed.push(schedule),
            }
        }
        buckets
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            upcoming: self.upcoming.len(),
            ongoing: self.ongoing.len(),
            completed: self.completed.len(),
        }
    }
}

/// Number of schedules per status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.upcoming + self.ongoing + self.completed
    }
}

/// The colour of a calendar day.
///
/// A day with any ongoing schedule is ongoing, otherwise any upcoming schedule makes
/// it upcoming. Empty days have no status. Manager and worker calendars share this
/// ranking.
pub fn day_status(bucket: &[&ClassifiedSchedule<'_>]) -> Option<ScheduleStatus> {
    if bucket.is_empty() {
        None
    } else if bucket.iter().any(|s| s.status == ScheduleStatus::Ongoing) {
        Some(ScheduleStatus::Ongoing)
    } else if bucket.iter().any(|s| s.status == ScheduleStatus::Upcoming) {
        Some(ScheduleStatus::Upcoming)
    } else {
        Some(ScheduleStatus::Completed)
    }
}

/// Schedules taking place on the given day, in input order.
pub fn on_date<'s, 'a>(
    schedules: &'s [ClassifiedSchedule<'a>],
    date: Date,
) -> Vec<&'s ClassifiedSchedule<'a>> {
    schedules.iter().filter(|s| s.dates.contains(date)).collect()
}

/// Distinct schedules with at least one day in the month, ordered by anchor date.
///
/// An impossible month yields nothing.
pub fn in_month<'s, 'a>(
    schedules: &'s [ClassifiedSchedule<'a>],
    year: i16,
    month: i8,
) -> Vec<&'s ClassifiedSchedule<'a>> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };

    let mut found: Vec<&ClassifiedSchedule<'a>> = Vec::new();
    for schedule in schedules {
        let hit = schedule.dates.iter().any(|d| first <= d && d <= last);
        if hit && !found.iter().any(|s| s.id == schedule.id) {
            found.push(schedule);
        }
    }
    found.sort_by_key(|s| s.anchor);
    found
}

/// Anchor grouping restricted to anchors inside the month.
pub fn by_anchor_date_in_month<'s, 'a>(
    schedules: &'s [ClassifiedSchedule<'a>],
    year: i16,
    month: i8,
) -> DateBuckets<'s, 'a> {
    let Some((first, last)) = month_bounds(year, month) else {
        return DateBuckets::new();
    };

    let mut buckets = by_anchor_date(schedules);
    buckets.retain(|date, _| first <= *date && *date <= last);
    buckets
}

fn month_bounds(year: i16, month: i8) -> Option<(Date, Date)> {
    let first = Date::new(year, month, 1).ok()?;
    Some((first, first.last_of_month()))
}

/// One day of a calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<'s, 'a> {
    pub date: Date,
    pub status: Option<ScheduleStatus>,
    pub schedules: Vec<&'s ClassifiedSchedule<'a>>,
}

/// Every day of a month with the schedules taking place on it.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth<'s, 'a> {
    /// The first day of the month.
    pub month: Date,
    pub days: Vec<CalendarDay<'s, 'a>>,
}

impl<'s, 'a> CalendarMonth<'s, 'a> {
    /// Lays out the month, returning `None` for an impossible year or month.
    pub fn build(schedules: &'s [ClassifiedSchedule<'a>], year: i16, month: i8) -> Option<Self> {
        let (first, last) = month_bounds(year, month)?;
        let mut buckets = by_occurrence_date(schedules);
        let days = first
            .series(1.day())
            .take_while(|d| *d <= last)
            .map(|date| {
                let schedules = buckets.remove(&date).unwrap_or_default();
                CalendarDay {
                    date,
                    status: day_status(&schedules),
                    schedules,
                }
            })
            .collect();

        Some(Self { month: first, days })
    }

    /// Days with at least one schedule.
    pub fn busy_days(&self) -> impl Iterator<Item = &CalendarDay<'s, 'a>> {
        self.days.iter().filter(|d| !d.schedules.is_empty())
    }
}
