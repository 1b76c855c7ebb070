// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Worker calendar workflow tests.

use shiftboard_core::{CalendarMonth, Earnings, ScheduleStatus, StatusBuckets, in_month};

use crate::common::{
    SnapshotBuilder, assert_ids, assert_statuses, at, sample_snapshot, test_application,
    test_posting,
};

#[test]
fn worker_view_has_one_schedule_per_day() {
    // Arrange
    let snapshot = sample_snapshot();
    let now = at(2024, 12, 5, 12, 0);

    // Act
    let schedules = snapshot.worker_schedules("member-1", now);

    // Assert - the posting with an unreadable date is skipped
    assert_ids(
        &schedules,
        &[
            "app-1-2024-12-01",
            "app-1-2024-12-02",
            "app-1-2024-12-03",
            "app-3-2024-12-04",
            "app-3-2024-12-06",
        ],
    );
    assert_statuses(
        &schedules,
        &[
            ("app-1-2024-12-03", ScheduleStatus::Completed),
            ("app-3-2024-12-04", ScheduleStatus::Completed),
            ("app-3-2024-12-06", ScheduleStatus::Upcoming),
        ],
    );
}

#[test]
fn worker_view_classifies_days_separately_from_the_posting() {
    let snapshot = sample_snapshot();
    let now = at(2024, 12, 5, 12, 0);

    // The posting as a whole straddles now, its days do not.
    let manager = snapshot.manager_schedules("manager-1", now);
    assert_statuses(&manager, &[("post-2", ScheduleStatus::Ongoing)]);

    let worker = snapshot.worker_schedules("member-1", now);
    let buckets = StatusBuckets::partition(&worker);
    assert!(buckets.ongoing.is_empty());
    assert_eq!(buckets.completed.len(), 4);
    assert_eq!(buckets.upcoming.len(), 1);
}

#[test]
fn worker_view_is_ordered_by_day() {
    let snapshot = SnapshotBuilder::new()
        .with_posting(test_posting("late", "m1", "2024-12-20", "09:00 - 18:00", 10))
        .with_posting(test_posting("early", "m1", "2024-12-02, 2024-12-22", "", 20))
        .with_application(test_application("a1", "late", "w1"))
        .with_application(test_application("a2", "early", "w1"))
        .build();

    let schedules = snapshot.worker_schedules("w1", at(2024, 12, 1, 0, 0));
    assert_ids(
        &schedules,
        &["a2-2024-12-02", "a1-2024-12-20", "a2-2024-12-22"],
    );
}

#[test]
fn worker_month_and_earnings() {
    let snapshot = sample_snapshot();
    let now = at(2024, 12, 5, 12, 0);
    let schedules = snapshot.worker_schedules("member-1", now);

    assert_eq!(in_month(&schedules, 2024, 12).len(), 5);
    assert!(in_month(&schedules, 2025, 1).is_empty());

    let month = CalendarMonth::build(&schedules, 2024, 12).unwrap();
    assert_eq!(month.busy_days().count(), 5);

    let earnings = Earnings::compute(&schedules, now);
    assert_eq!(earnings.earned_this_month, 460_000);
    assert_eq!(earnings.expected_this_month, 100_000);
    assert_eq!(earnings.total_this_month, 560_000);
    assert_eq!(earnings.earned_this_week, 460_000);
    assert_eq!(earnings.total_completed, 460_000);
}
