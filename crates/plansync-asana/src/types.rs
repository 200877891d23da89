//! Asana REST deserialization types.

use chrono::{DateTime, Utc};
use plansync_core::model::{Comment, Identity, PlanRecord, TaskSummary};
use serde::{Deserialize, Serialize};

/// Every Asana payload wraps its content in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiUser {
    pub gid: String,
    #[serde(default)]
    pub name: String,
}

impl From<ApiUser> for Identity {
    fn from(u: ApiUser) -> Self {
        Self {
            gid: u.gid,
            name: u.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTask {
    pub gid: String,
    #[serde(default)]
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ApiTask> for PlanRecord {
    fn from(t: ApiTask) -> Self {
        Self {
            gid: t.gid,
            name: t.name,
            created_at: t.created_at,
        }
    }
}

impl From<ApiTask> for TaskSummary {
    fn from(t: ApiTask) -> Self {
        Self {
            gid: t.gid,
            name: t.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiStory {
    pub gid: String,
    #[serde(default)]
    pub text: String,
    /// "comment_added" for user comments; system stories carry other values.
    #[serde(default)]
    pub resource_subtype: String,
    /// "comment" or "system".
    #[serde(default, rename = "type")]
    pub story_type: String,
}

impl ApiStory {
    /// Whether this story is a user comment rather than system noise.
    pub(crate) fn is_comment(&self) -> bool {
        self.story_type == "comment" || self.resource_subtype == "comment_added"
    }
}

impl From<ApiStory> for Comment {
    fn from(s: ApiStory) -> Self {
        Self {
            gid: s.gid,
            text: s.text,
        }
    }
}

/// Structured error payload returned on rejected calls.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApiErrorItem {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}
