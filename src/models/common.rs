use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body shared by every endpoint. `message` carries the underlying
/// failure text verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            query_time: None,
            status: None,
        }
    }

    pub fn with_query_time(mut self, query_time: String) -> Self {
        self.query_time = Some(query_time);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Renders a duration the way every timed response reports it, e.g. `1532ms`.
pub fn format_query_time(elapsed: std::time::Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}
