// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Manager board workflow tests.

use jiff::civil::date;
use shiftboard_core::{
    CalendarMonth, ScheduleStatus, StatusBuckets, StatusCounts, by_anchor_date,
    by_anchor_date_in_month, by_occurrence_date, on_date,
};

use crate::common::{assert_ids, assert_statuses, at, sample_snapshot};

#[test]
fn board_partitions_manager_postings() {
    // Arrange
    let snapshot = sample_snapshot();
    let now = at(2024, 12, 5, 12, 0);

    // Act
    let schedules = snapshot.manager_schedules("manager-1", now);
    let buckets = StatusBuckets::partition(&schedules);

    // Assert
    assert_statuses(
        &schedules,
        &[
            ("post-1", ScheduleStatus::Completed),
            ("post-2", ScheduleStatus::Ongoing),
            ("post-3", ScheduleStatus::Upcoming),
        ],
    );
    assert_eq!(
        buckets.counts(),
        StatusCounts {
            upcoming: 1,
            ongoing: 1,
            completed: 1
        }
    );
}

#[test]
fn board_lists_each_posting_once_under_its_anchor() {
    let snapshot = sample_snapshot();
    let schedules = snapshot.manager_schedules("manager-1", at(2024, 12, 5, 12, 0));

    let anchors = by_anchor_date(&schedules);
    let days: Vec<_> = anchors.keys().map(|d| d.to_string()).collect();
    assert_eq!(days, ["2024-12-03", "2024-12-04", "2024-12-28"]);
    assert_ids(anchors.values().flatten().copied(), &["post-1", "post-2", "post-3"]);

    let december = by_anchor_date_in_month(&schedules, 2024, 12);
    assert_eq!(december.len(), 3);
    assert!(by_anchor_date_in_month(&schedules, 2024, 11).is_empty());
}

#[test]
fn calendar_shows_every_working_day() {
    let snapshot = sample_snapshot();
    let schedules = snapshot.manager_schedules("manager-1", at(2024, 12, 5, 12, 0));

    let occurrences = by_occurrence_date(&schedules);
    let days: Vec<_> = occurrences.keys().map(|d| d.day()).collect();
    assert_eq!(days, [1, 2, 3, 4, 6, 28]);

    let month = CalendarMonth::build(&schedules, 2024, 12).unwrap();
    let statuses: Vec<_> = month.busy_days().map(|d| (d.date.day(), d.status)).collect();
    assert_eq!(
        statuses,
        [
            (1, Some(ScheduleStatus::Completed)),
            (2, Some(ScheduleStatus::Completed)),
            (3, Some(ScheduleStatus::Completed)),
            (4, Some(ScheduleStatus::Ongoing)),
            (6, Some(ScheduleStatus::Ongoing)),
            (28, Some(ScheduleStatus::Upcoming)),
        ]
    );

    assert_ids(on_date(&schedules, date(2024, 12, 6)), &["post-2"]);
}

#[test]
fn board_follows_the_clock() {
    let snapshot = sample_snapshot();

    let schedules = snapshot.manager_schedules("manager-1", at(2024, 12, 6, 15, 0));
    assert_statuses(&schedules, &[("post-2", ScheduleStatus::Ongoing)]);

    let schedules = snapshot.manager_schedules("manager-1", at(2024, 12, 6, 21, 0));
    assert_statuses(&schedules, &[("post-2", ScheduleStatus::Completed)]);
    let post2 = schedules.iter().find(|s| s.id == "post-2").unwrap();
    assert_eq!(post2.anchor, date(2024, 12, 6));
}

#[test]
fn participants_carry_their_reviews() {
    let snapshot = sample_snapshot();
    let schedules = snapshot.manager_schedules("manager-1", at(2024, 12, 5, 12, 0));

    let post1 = &schedules[0];
    assert!(post1.accepts_reviews());
    let reviewed: Vec<_> = post1
        .participants
        .iter()
        .map(|p| (p.user_name, p.review.map(|r| r.score)))
        .collect();
    assert_eq!(reviewed, [("Lee", Some(5)), ("Park", None)]);

    // Pending applicants are not participants yet.
    let post3 = &schedules[2];
    assert!(post3.participants.is_empty());
}

#[test]
fn unschedulable_postings_are_left_out() {
    let snapshot = sample_snapshot();
    let schedules = snapshot.manager_schedules("manager-2", at(2024, 12, 5, 12, 0));
    assert!(schedules.is_empty());
}
