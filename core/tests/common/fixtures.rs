// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create postings, applications and
//! whole snapshots, plus a sample snapshot in the upstream JSON shape.

use jiff::civil::{DateTime, date};
use shiftboard_core::{Application, ApplicationStatus, AttendanceReview, Posting, Snapshot};

/// A snapshot as served by the posting and application services.
///
/// Manager `manager-1` owns three postings, `manager-2` one. Worker `member-1` is
/// accepted on two postings and has been reviewed on the finished one.
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "posts": [
    {
      "id": "post-1",
      "authorId": "manager-1",
      "authorName": "Kim",
      "title": "Warehouse sorting",
      "date": "2024-12-01~2024-12-03",
      "time": "09:00 - 18:00",
      "location": "Incheon",
      "salary": 120000
    },
    {
      "id": "post-2",
      "authorId": "manager-1",
      "authorName": "Kim",
      "title": "Event staff",
      "date": "2024-12-04, 2024-12-06",
      "time": "10:00 - 20:00",
      "location": "Seoul",
      "salary": 100000
    },
    {
      "id": "post-3",
      "authorId": "manager-1",
      "authorName": "Kim",
      "title": "Year-end inventory",
      "date": "2024-12-28",
      "time": "morning",
      "salary": 150000
    },
    {
      "id": "post-4",
      "authorId": "manager-2",
      "title": "Cafe shift",
      "date": "someday",
      "time": "08:00 - 12:00",
      "salary": 60000
    }
  ],
  "applications": [
    { "id": "app-1", "postId": "post-1", "applicantId": "member-1", "applicantName": "Lee", "status": "accepted" },
    { "id": "app-2", "postId": "post-1", "applicantId": "member-2", "applicantName": "Park", "status": "accepted" },
    { "id": "app-3", "postId": "post-2", "applicantId": "member-1", "applicantName": "Lee", "status": "accepted" },
    { "id": "app-4", "postId": "post-3", "applicantId": "member-2", "applicantName": "Park", "status": "pending" },
    { "id": "app-5", "postId": "post-4", "applicantId": "member-1", "applicantName": "Lee", "status": "accepted" }
  ],
  "reviews": [
    {
      "id": "rev-1",
      "postId": "post-1",
      "userId": "member-1",
      "score": 5,
      "comment": "Always on time",
      "reviewedBy": "manager-1",
      "createdAt": "2024-12-04T01:00:00Z"
    }
  ]
}"#;

/// Parses [`SAMPLE_SNAPSHOT`].
#[must_use]
pub fn sample_snapshot() -> Snapshot {
    serde_json::from_str(SAMPLE_SNAPSHOT).unwrap()
}

/// A reference time on a given day.
#[must_use]
pub fn at(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> DateTime {
    date(year, month, day).at(hour, minute, 0, 0)
}

/// Creates a posting owned by `author_id`.
#[must_use]
pub fn test_posting(id: &str, author_id: &str, dates: &str, time: &str, salary: u64) -> Posting {
    Posting {
        id: id.to_string(),
        author_id: author_id.to_string(),
        author_name: None,
        title: format!("Job {id}"),
        date: dates.to_string(),
        time: time.to_string(),
        location: None,
        salary,
        status: None,
    }
}

/// Creates an accepted application.
#[must_use]
pub fn test_application(id: &str, post_id: &str, applicant_id: &str) -> Application {
    Application {
        id: id.to_string(),
        post_id: post_id.to_string(),
        applicant_id: applicant_id.to_string(),
        applicant_name: applicant_id.to_uppercase(),
        status: ApplicationStatus::Accepted,
    }
}

/// Builder for snapshots assembled in code.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

#[allow(dead_code)]
impl SnapshotBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_posting(mut self, posting: Posting) -> Self {
        self.snapshot.posts.push(posting);
        self
    }

    #[must_use]
    pub fn with_application(mut self, application: Application) -> Self {
        self.snapshot.applications.push(application);
        self
    }

    #[must_use]
    pub fn with_review(mut self, review: AttendanceReview) -> Self {
        self.snapshot.reviews.push(review);
        self
    }

    #[must_use]
    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
