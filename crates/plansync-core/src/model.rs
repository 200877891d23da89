//! Domain types, independent of any service's wire format.

use chrono::{DateTime, Utc};

/// Free-text phrase identifying the week's plan submission task.
pub const PLAN_PHRASE: &str = "This week's plan submission";

/// The caller's own account on the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub gid: String,
    pub name: String,
}

/// The remote task anchoring a week's comment thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRecord {
    pub gid: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment attached to a plan record. Only "comment"-kind notes reach
/// this type; system-generated stories are filtered out by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub gid: String,
    pub text: String,
}

/// A task assigned to the caller, due on one specific day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub gid: String,
    pub name: String,
}
