// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Attendance review workflow tests.

use jiff::Timestamp;
use shiftboard_core::{ReviewBook, ReviewDraft, ScheduleError};

use crate::common::{at, sample_snapshot};

fn draft(user_id: &str, score: u8, comment: &str) -> ReviewDraft {
    ReviewDraft {
        post_id: "post-1".to_string(),
        user_id: user_id.to_string(),
        score,
        comment: comment.to_string(),
        reviewed_by: "manager-1".to_string(),
    }
}

#[test]
fn manager_reviews_participants_of_finished_posting() {
    // Arrange
    let mut snapshot = sample_snapshot();
    let now = at(2024, 12, 5, 12, 0);
    let written: Timestamp = "2024-12-05T03:00:00Z".parse().unwrap();

    let reviewable: Vec<String> = snapshot
        .manager_schedules("manager-1", now)
        .iter()
        .filter(|s| s.accepts_reviews())
        .flat_map(|s| s.participants.iter().map(|p| p.user_id.to_string()))
        .collect();
    assert_eq!(reviewable, ["member-1", "member-2"]);

    // Act
    let mut book = ReviewBook::new(std::mem::take(&mut snapshot.reviews));
    let updated = book
        .upsert(draft("member-1", 4, "Late once"), written)
        .unwrap()
        .clone();
    let created = book
        .upsert(draft("member-2", 3, "Fine"), written)
        .unwrap()
        .clone();
    snapshot.reviews = book.into_inner();

    // Assert
    assert_eq!(updated.id, "rev-1");
    assert_eq!(updated.score, 4);
    assert_eq!(created.id, format!("rev-{}", written.as_millisecond()));

    let schedules = snapshot.manager_schedules("manager-1", now);
    let scores: Vec<_> = schedules[0]
        .participants
        .iter()
        .map(|p| p.review.map(|r| r.score))
        .collect();
    assert_eq!(scores, [Some(4), Some(3)]);
}

#[test]
fn invalid_reviews_are_rejected() {
    let mut book = ReviewBook::default();
    let now = Timestamp::UNIX_EPOCH;

    assert_eq!(
        book.upsert(draft("member-1", 0, "Absent"), now).unwrap_err(),
        ScheduleError::InvalidScore(0)
    );
    assert_eq!(
        book.upsert(draft("member-1", 5, "   "), now).unwrap_err(),
        ScheduleError::EmptyComment
    );
    assert!(book.find("post-1", "member-1").is_none());
}
