use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::SyncError,
    model::{Comment, Identity, PlanRecord, TaskSummary},
    week::WeekWindow,
};

/// Remote planning-service surface the sync job drives.
///
/// The HTTP client implements this; tests substitute a recording mock. The
/// job only ever holds a trait object, so the concrete client stays an
/// explicitly constructed, injected handle.
#[async_trait]
pub trait PlanningService: Send + Sync {
    /// The caller's own account.
    async fn current_user(&self) -> Result<Identity, SyncError>;

    /// Plain tasks created by `author` within `window` that match the
    /// plan-submission phrase. All matches are returned; the caller decides
    /// how many are acceptable.
    async fn find_plan_records(
        &self,
        workspace: &str,
        author: &str,
        window: &WeekWindow,
    ) -> Result<Vec<PlanRecord>, SyncError>;

    /// All comment-kind notes on a record, system stories excluded.
    async fn list_comments(&self, record_gid: &str) -> Result<Vec<Comment>, SyncError>;

    /// Plain tasks assigned to `assignee` due exactly on `date`.
    async fn tasks_due_on(
        &self,
        workspace: &str,
        assignee: &str,
        date: NaiveDate,
    ) -> Result<Vec<TaskSummary>, SyncError>;

    /// Attach a new comment to a record.
    async fn create_comment(&self, record_gid: &str, text: &str) -> Result<(), SyncError>;

    /// Replace an existing comment's text in place.
    async fn update_comment(&self, comment_gid: &str, text: &str) -> Result<(), SyncError>;
}
