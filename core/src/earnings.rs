// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{ToSpan, civil::DateTime};
use serde::Serialize;

use crate::{ClassifiedSchedule, ScheduleStatus, same_month, start_of_day};

/// Pay statistics of a worker, computed from their per-day schedules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    /// Pay for completed days in the current month.
    pub earned_this_month: u64,

    /// Pay for the remaining days of the current month.
    pub expected_this_month: u64,

    /// Earned plus expected for the current month.
    pub total_this_month: u64,

    /// Pay for completed days starting no earlier than seven days before now.
    pub earned_this_week: u64,

    /// Pay for every completed day.
    pub total_completed: u64,
}

impl Earnings {
    /// Sums salaries over worker schedules, one schedule per day of work.
    ///
    /// The week starts exactly seven days before `now`, time of day included, so
    /// the day seven days back only counts while `now` is at midnight. Sums
    /// saturate at `u64::MAX`.
    pub fn compute<'s, 'a: 's>(
        schedules: impl IntoIterator<Item = &'s ClassifiedSchedule<'a>>,
        now: DateTime,
    ) -> Self {
        let today = now.date();
        let week_ago = now.checked_sub(7.days()).unwrap_or(DateTime::MIN);

        let mut earnings = Self::default();
        for schedule in schedules {
            let salary = schedule.posting.salary;
            let date = schedule.anchor;
            let this_month = same_month(date, today);
            match schedule.status {
                ScheduleStatus::Completed => {
                    earnings.total_completed = earnings.total_completed.saturating_add(salary);
                    if this_month {
                        earnings.earned_this_month =
                            earnings.earned_this_month.saturating_add(salary);
                    }
                    if week_ago <= start_of_day(date) {
                        earnings.earned_this_week =
                            earnings.earned_this_week.saturating_add(salary);
                    }
                }
                ScheduleStatus::Upcoming | ScheduleStatus::Ongoing => {
                    if this_month {
                        earnings.expected_this_month =
                            earnings.expected_this_month.saturating_add(salary);
                    }
                }
            }
        }

        earnings.total_this_month = earnings
            .earned_this_month
            .saturating_add(earnings.expected_this_month);
        earnings
    }
}
