//! Common error types used across the workspace.
//!
//! Each failure family is its own typed error; [`HomeSwitchError`] gathers
//! them with `#[from]` conversions so that `?` works across layers.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HomeSwitchError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponse),

    #[error(transparent)]
    CommandRejected(#[from] CommandRejected),

    #[error("failed to publish command")]
    Publish(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("Missing 'status' parameter")]
    MissingStatus,

    #[error("unknown status {0:?}, expected \"ON\" or \"OFF\"")]
    UnknownStatus(String),

    #[error("device id {0:?} is declared more than once")]
    DuplicateDeviceId(String),
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The request never produced a response (connection refused, CORS, aborted…).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("network failure: {message}")]
pub struct NetworkError {
    pub message: String,
}

impl NetworkError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A response body that does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum MalformedResponse {
    #[error("body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("field `devices` is missing")]
    MissingDevices,

    #[error("field `devices` is not an array")]
    DevicesNotASequence,

    #[error("device entry #{index} is invalid")]
    InvalidDevice {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("listing violates a device invariant: {0}")]
    Invalid(#[from] ValidationError),
}

/// The backend answered a command with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("command for device {device_id} rejected with HTTP {status}{}", reason_suffix(.reason))]
pub struct CommandRejected {
    pub device_id: String,
    pub status: u16,
    pub reason: Option<String>,
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default()
}
