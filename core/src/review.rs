// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;

use crate::{AttendanceReview, ScheduleError};

/// Lowest attendance score.
pub const SCORE_MIN: u8 = 1;

/// Highest attendance score.
pub const SCORE_MAX: u8 = 5;

/// A review a manager is about to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub post_id: String,
    pub user_id: String,
    pub score: u8,
    pub comment: String,
    pub reviewed_by: String,
}

impl ReviewDraft {
    /// Checks the score range and that the comment is not blank.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&self.score) {
            return Err(ScheduleError::InvalidScore(self.score));
        }
        if self.comment.trim().is_empty() {
            return Err(ScheduleError::EmptyComment);
        }
        Ok(())
    }
}

/// The attendance reviews, at most one per worker and posting.
#[derive(Debug, Default, Clone)]
pub struct ReviewBook {
    reviews: Vec<AttendanceReview>,
}

impl ReviewBook {
    pub fn new(reviews: Vec<AttendanceReview>) -> Self {
        Self { reviews }
    }

    /// The review of a worker on a posting.
    pub fn find(&self, post_id: &str, user_id: &str) -> Option<&AttendanceReview> {
        self.reviews
            .iter()
            .find(|r| r.post_id == post_id && r.user_id == user_id)
    }

    /// Stores a review, replacing the score and comment of an existing one.
    ///
    /// New reviews get an id derived from `now`. Returns the stored review.
    #[tracing::instrument(level = "debug", skip(self), fields(post_id = %draft.post_id, user_id = %draft.user_id))]
    pub fn upsert(
        &mut self,
        draft: ReviewDraft,
        now: Timestamp,
    ) -> Result<&AttendanceReview, ScheduleError> {
        draft.validate()?;

        let comment = draft.comment.trim().to_owned();
        let position = self
            .reviews
            .iter()
            .position(|r| r.post_id == draft.post_id && r.user_id == draft.user_id);

        let index = match position {
            Some(index) => {
                let review = &mut self.reviews[index];
                review.score = draft.score;
                review.comment = comment;
                tracing::debug!(id = %review.id, "updated attendance review");
                index
            }
            None => {
                let review = AttendanceReview {
                    id: format!("rev-{}", now.as_millisecond()),
                    post_id: draft.post_id,
                    user_id: draft.user_id,
                    score: draft.score,
                    comment,
                    reviewed_by: draft.reviewed_by,
                    created_at: now.to_string(),
                };
                tracing::debug!(id = %review.id, "created attendance review");
                self.reviews.push(review);
                self.reviews.len() - 1
            }
        };

        Ok(&self.reviews[index])
    }

    pub fn as_slice(&self) -> &[AttendanceReview] {
        &self.reviews
    }

    pub fn into_inner(self) -> Vec<AttendanceReview> {
        self.reviews
    }
}
