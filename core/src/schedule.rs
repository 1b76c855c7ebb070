// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime};
use serde::Serialize;

use crate::{
    AttendanceReview, DateExpression, DateSequence, Posting, ScheduleStatus, Snapshot, TimeWindow,
    anchor_date, classify,
};

/// A worker taking part in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant<'a> {
    /// The worker.
    pub user_id: &'a str,

    /// Display name of the worker.
    pub user_name: &'a str,

    /// The accepted application.
    pub application_id: &'a str,

    /// The attendance review, once written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<&'a AttendanceReview>,
}

/// A posting projected onto the calendar at a given time.
///
/// It borrows from the snapshot it was built from and is rebuilt on every pass, so
/// the status can never go stale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSchedule<'a> {
    /// Identity used to de-duplicate calendar buckets.
    pub id: String,

    /// The posting behind the schedule.
    pub posting: &'a Posting,

    /// The parsed dates.
    #[serde(skip)]
    pub expression: DateExpression,

    /// Every day of the schedule.
    pub dates: DateSequence,

    /// The working hours, if the posting states them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<TimeWindow>,

    /// Status at the reference time.
    pub status: ScheduleStatus,

    /// The day the schedule is filed under in list views.
    pub anchor: Date,

    /// Workers taking part.
    pub participants: Vec<Participant<'a>>,
}

impl<'a> ClassifiedSchedule<'a> {
    /// Classifies a posting.
    ///
    /// Returns `None` when the date expression has no usable date, in which case the
    /// posting must be left out of every view.
    pub fn new(
        id: String,
        posting: &'a Posting,
        now: DateTime,
        participants: Vec<Participant<'a>>,
    ) -> Option<Self> {
        let expression = match posting.date.parse::<DateExpression>() {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(post_id = %posting.id, date = %posting.date, error = %e, "posting has no schedulable date, skipping");
                return None;
            }
        };
        let window = TimeWindow::parse(&posting.time);
        Self::with_expression(id, posting, expression, window, now, participants)
    }

    fn with_expression(
        id: String,
        posting: &'a Posting,
        expression: DateExpression,
        window: Option<TimeWindow>,
        now: DateTime,
        participants: Vec<Participant<'a>>,
    ) -> Option<Self> {
        let status = classify(&expression, window.as_ref(), now);
        let anchor = anchor_date(status, &expression)?;
        Some(Self {
            id,
            posting,
            dates: expression.dates(),
            expression,
            window,
            status,
            anchor,
            participants,
        })
    }

    /// Only finished work can have its attendance reviewed.
    pub fn accepts_reviews(&self) -> bool {
        self.status == ScheduleStatus::Completed
    }
}

impl Snapshot {
    /// The schedules of every posting written by a manager, in posting order.
    ///
    /// Participants are the accepted applicants, each with their attendance review
    /// if one exists.
    pub fn manager_schedules(&self, manager_id: &str, now: DateTime) -> Vec<ClassifiedSchedule<'_>> {
        let schedules: Vec<_> = self
            .posts
            .iter()
            .filter(|post| post.author_id == manager_id)
            .filter_map(|post| {
                let participants = self
                    .accepted_for_post(&post.id)
                    .map(|app| Participant {
                        user_id: &app.applicant_id,
                        user_name: &app.applicant_name,
                        application_id: &app.id,
                        review: self.review(&post.id, &app.applicant_id),
                    })
                    .collect();
                ClassifiedSchedule::new(post.id.clone(), post, now, participants)
            })
            .collect();

        tracing::debug!(manager_id, count = schedules.len(), "classified manager schedules");
        schedules
    }

    /// One schedule per working day of every posting a worker was accepted for,
    /// ordered by day.
    ///
    /// Each day is classified on its own, with the posting's working hours.
    pub fn worker_schedules(&self, worker_id: &str, now: DateTime) -> Vec<ClassifiedSchedule<'_>> {
        let mut schedules = Vec::new();
        for app in self.accepted_for_worker(worker_id) {
            let Some(post) = self.posting(&app.post_id) else {
                tracing::warn!(application_id = %app.id, post_id = %app.post_id, "accepted application refers to an unknown posting");
                continue;
            };

            let expression = match post.date.parse::<DateExpression>() {
                Ok(a) => a,
                Err(e) => {
                    tracing::warn!(post_id = %post.id, date = %post.date, error = %e, "posting has no schedulable date, skipping");
                    continue;
                }
            };

            let window = TimeWindow::parse(&post.time);
            for date in expression.dates().iter() {
                let participant = Participant {
                    user_id: &app.applicant_id,
                    user_name: &app.applicant_name,
                    application_id: &app.id,
                    review: self.review(&post.id, &app.applicant_id),
                };
                let id = format!("{}-{}", app.id, date);
                schedules.extend(ClassifiedSchedule::with_expression(
                    id,
                    post,
                    DateExpression::Single(date),
                    window,
                    now,
                    vec![participant],
                ));
            }
        }

        schedules.sort_by_key(|s| s.anchor);
        tracing::debug!(worker_id, count = schedules.len(), "classified worker schedules");
        schedules
    }
}
