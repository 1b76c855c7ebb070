// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use shiftboard_core::{ClassifiedSchedule, ScheduleStatus};

/// Asserts the ids of a list of schedules, in order.
///
/// # Panics
///
/// Panics if the ids differ from `expected`.
pub fn assert_ids<'s, 'a: 's>(
    schedules: impl IntoIterator<Item = &'s ClassifiedSchedule<'a>>,
    expected: &[&str],
) {
    let ids: Vec<&str> = schedules.into_iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected, "Schedule ids mismatch");
}

/// Asserts the status of every schedule, looked up by id.
///
/// # Panics
///
/// Panics if a schedule is missing or has another status.
#[allow(dead_code)]
pub fn assert_statuses(schedules: &[ClassifiedSchedule<'_>], expected: &[(&str, ScheduleStatus)]) {
    for (id, status) in expected {
        let schedule = schedules
            .iter()
            .find(|s| s.id == *id)
            .unwrap_or_else(|| panic!("Schedule {id} not found"));
        assert_eq!(schedule.status, *status, "Status mismatch for {id}");
    }
}
