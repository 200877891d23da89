use thiserror::Error;

/// Top-level error type for plansync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or invalid environment configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A precondition on the remote data does not hold
    /// (e.g. wrong number of plan records in the week).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The remote service rejected a call. `detail` carries the service's
    /// structured error payload as serialized text when one was returned.
    #[error("api error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Transport-level failure talking to the remote service.
    #[error("transport error: {0}")]
    Transport(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
