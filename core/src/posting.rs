// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Records supplied by the posting and application services.
//!
//! Field names follow the camelCase JSON those services emit. Unknown fields are
//! ignored so that richer upstream records can be fed in unchanged.

use serde::{Deserialize, Serialize};

/// A job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Unique identifier of the posting.
    pub id: String,

    /// The manager who wrote the posting.
    pub author_id: String,

    /// Display name of the manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Title of the job.
    pub title: String,

    /// Date expression: a single day, `start~end` or a comma separated list.
    pub date: String,

    /// Working hours, usually `HH:MM - HH:MM`.
    #[serde(default)]
    pub time: String,

    /// Where the work takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Pay per day of work.
    #[serde(default)]
    pub salary: u64,

    /// Recruiting state set by the manager. Classification never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostingStatus>,
}

/// The recruiting state of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingStatus {
    /// Open for applications.
    Recruiting,

    /// Open and short of workers.
    Urgent,

    /// Closed by the manager.
    Completed,
}

/// The state of an application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Waiting for the manager.
    #[default]
    Pending,

    /// The applicant got the job.
    Accepted,

    /// The applicant was turned down.
    Rejected,
}

/// An application of a worker to a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique identifier of the application.
    pub id: String,

    /// The posting applied to.
    pub post_id: String,

    /// The worker who applied.
    pub applicant_id: String,

    /// Display name of the worker.
    pub applicant_name: String,

    /// Current state.
    #[serde(default)]
    pub status: ApplicationStatus,
}

impl Application {
    /// Whether the applicant is taking part in the job.
    pub fn is_accepted(&self) -> bool {
        self.status == ApplicationStatus::Accepted
    }
}

/// A manager's review of a worker's attendance on a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReview {
    /// Unique identifier of the review.
    pub id: String,

    /// The posting the work was done for.
    pub post_id: String,

    /// The reviewed worker.
    pub user_id: String,

    /// Score from 1 to 5.
    pub score: u8,

    /// Free-text comment.
    pub comment: String,

    /// The reviewing manager.
    pub reviewed_by: String,

    /// When the review was written, RFC 3339.
    pub created_at: String,
}

/// One consistent read of postings, applications and reviews.
///
/// A classification pass pairs exactly one snapshot with one reference time.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Job postings.
    #[serde(default)]
    pub posts: Vec<Posting>,

    /// Applications to the postings.
    #[serde(default)]
    pub applications: Vec<Application>,

    /// Attendance reviews.
    #[serde(default)]
    pub reviews: Vec<AttendanceReview>,
}

impl Snapshot {
    /// Finds a posting by id.
    pub fn posting(&self, id: &str) -> Option<&Posting> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Accepted applications of a posting, in application order.
    pub fn accepted_for_post<'a, 'k>(
        &'a self,
        post_id: &'k str,
    ) -> impl Iterator<Item = &'a Application> + use<'a, 'k> {
        self.applications
            .iter()
            .filter(move |a| a.post_id == post_id && a.is_accepted())
    }

    /// Accepted applications of a worker, in application order.
    pub fn accepted_for_worker<'a, 'k>(
        &'a self,
        worker_id: &'k str,
    ) -> impl Iterator<Item = &'a Application> + use<'a, 'k> {
        self.applications
            .iter()
            .filter(move |a| a.applicant_id == worker_id && a.is_accepted())
    }

    /// The review of a worker on a posting, if any.
    pub fn review(&self, post_id: &str, user_id: &str) -> Option<&AttendanceReview> {
        self.reviews
            .iter()
            .find(|r| r.post_id == post_id && r.user_id == user_id)
    }
}
