//! Environment-sourced configuration.

use crate::error::SyncError;
use crate::week::WeekWindow;

/// Personal access token for the remote service.
pub const ENV_TOKEN: &str = "PLANSYNC_TOKEN";
/// Target week start date, `YYYY-MM-DD` (snapped back to Monday).
pub const ENV_WEEK_START: &str = "PLANSYNC_WEEK_START";
/// Workspace gid used in all search calls.
pub const ENV_WORKSPACE_ID: &str = "PLANSYNC_WORKSPACE_ID";
/// Optional pause between daily writes, in milliseconds.
pub const ENV_DELAY_MS: &str = "PLANSYNC_DELAY_MS";

fn default_delay_ms() -> u64 {
    2000
}

/// CLI overrides, applied on top of the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub week_start: Option<String>,
    pub delay_ms: Option<u64>,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub workspace_id: String,
    pub window: WeekWindow,
    pub delay_ms: u64,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env(overrides: &Overrides) -> Result<Self, SyncError> {
        Self::from_vars(|key| std::env::var(key).ok(), overrides)
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(get: F, overrides: &Overrides) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = required(&get, ENV_TOKEN)?;
        let workspace_id = required(&get, ENV_WORKSPACE_ID)?;

        let week_start = match overrides.week_start.clone() {
            Some(s) => s,
            None => required(&get, ENV_WEEK_START)?,
        };
        let window = WeekWindow::parse(&week_start)?;

        let delay_ms = match overrides.delay_ms {
            Some(ms) => ms,
            None => match get(ENV_DELAY_MS) {
                Some(raw) => raw.trim().parse().map_err(|e| {
                    SyncError::Config(format!("invalid {ENV_DELAY_MS} {raw:?}: {e}"))
                })?,
                None => default_delay_ms(),
            },
        };

        Ok(Self {
            token,
            workspace_id,
            window,
            delay_ms,
        })
    }
}

fn required<F>(get: &F, key: &str) -> Result<String, SyncError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(SyncError::Config(format!("{key} must be set"))),
    }
}
