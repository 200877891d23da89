//! `PlanningService` implementation over the Asana REST surface.

use async_trait::async_trait;
use chrono::NaiveDate;
use plansync_core::{
    error::SyncError,
    model::{Comment, Identity, PlanRecord, TaskSummary, PLAN_PHRASE},
    traits::PlanningService,
    week::WeekWindow,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{ApiErrorBody, ApiStory, ApiTask, ApiUser, DataEnvelope};
use crate::AsanaClient;

const DATE_FMT: &str = "%Y-%m-%d";

impl AsanaClient {
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SyncError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| SyncError::Transport(format!("GET {path} failed: {e}")))?;
        read_body(resp, path).await
    }

    async fn write_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: serde_json::Value,
    ) -> Result<(), SyncError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SyncError::Transport(format!("{method} {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(())
    }
}

/// Check the status, then deserialize the successful body.
async fn read_body<T: DeserializeOwned>(
    resp: reqwest::Response,
    path: &str,
) -> Result<T, SyncError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| SyncError::Transport(format!("{path}: invalid response body: {e}")))
}

/// Map a rejected response into `SyncError::Api`, surfacing the structured
/// `{"errors": [...]}` payload as serialized text when present.
pub(crate) fn api_error(status: reqwest::StatusCode, body: &str) -> SyncError {
    let detail = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => {
            serde_json::to_string(&parsed.errors).unwrap_or_else(|_| body.to_string())
        }
        _ => body.to_string(),
    };
    SyncError::Api {
        status: status.as_u16(),
        detail,
    }
}

#[async_trait]
impl PlanningService for AsanaClient {
    async fn current_user(&self) -> Result<Identity, SyncError> {
        let user: DataEnvelope<ApiUser> = self.get_json("/users/me", &[]).await?;
        Ok(user.data.into())
    }

    async fn find_plan_records(
        &self,
        workspace: &str,
        author: &str,
        window: &WeekWindow,
    ) -> Result<Vec<PlanRecord>, SyncError> {
        let path = format!("/workspaces/{workspace}/tasks/search");
        let query = [
            ("resource_subtype", "default_task".to_string()),
            ("text", PLAN_PHRASE.to_string()),
            ("created_by.any", author.to_string()),
            ("created_on.after", window.start.format(DATE_FMT).to_string()),
            ("created_on.before", window.end.format(DATE_FMT).to_string()),
            ("opt_fields", "created_at,name".to_string()),
        ];
        let tasks: DataEnvelope<Vec<ApiTask>> = self.get_json(&path, &query).await?;
        debug!("plan search returned {} task(s)", tasks.data.len());
        Ok(tasks.data.into_iter().map(Into::into).collect())
    }

    async fn list_comments(&self, record_gid: &str) -> Result<Vec<Comment>, SyncError> {
        let path = format!("/tasks/{record_gid}/stories");
        let query = [("opt_fields", "text,resource_subtype,type".to_string())];
        let stories: DataEnvelope<Vec<ApiStory>> = self.get_json(&path, &query).await?;
        Ok(stories
            .data
            .into_iter()
            .filter(ApiStory::is_comment)
            .map(Into::into)
            .collect())
    }

    async fn tasks_due_on(
        &self,
        workspace: &str,
        assignee: &str,
        date: NaiveDate,
    ) -> Result<Vec<TaskSummary>, SyncError> {
        let path = format!("/workspaces/{workspace}/tasks/search");
        let query = [
            ("resource_subtype", "default_task".to_string()),
            ("assignee.any", assignee.to_string()),
            ("due_on", date.format(DATE_FMT).to_string()),
            ("opt_fields", "created_at,name".to_string()),
        ];
        let tasks: DataEnvelope<Vec<ApiTask>> = self.get_json(&path, &query).await?;
        debug!("{} task(s) due on {date}", tasks.data.len());
        Ok(tasks.data.into_iter().map(Into::into).collect())
    }

    async fn create_comment(&self, record_gid: &str, text: &str) -> Result<(), SyncError> {
        let path = format!("/tasks/{record_gid}/stories");
        let body = serde_json::json!({ "data": { "text": text } });
        self.write_json(reqwest::Method::POST, &path, body).await
    }

    async fn update_comment(&self, comment_gid: &str, text: &str) -> Result<(), SyncError> {
        let path = format!("/stories/{comment_gid}");
        let body = serde_json::json!({ "data": { "text": text } });
        self.write_json(reqwest::Method::PUT, &path, body).await
    }
}
