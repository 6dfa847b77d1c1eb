use thiserror::Error;

/// Failures surfaced by [`TaskClient`](crate::todoist::TaskClient) operations.
///
/// Every operation returns these as values so the agent layer can branch on
/// them and narrate the outcome; nothing in the client panics on a bad
/// exchange. Only `Transport` is produced by the retry wrapper; all other
/// variants bypass retries entirely.
#[derive(Debug, Error)]
pub enum TodoistError {
    /// The API token is absent (or empty) in both the client config and the
    /// process environment. Checked before the first request of a call.
    #[error("TODOIST_API_TOKEN is not set")]
    MissingToken,

    /// A network error or 5xx response survived every retry attempt.
    #[error("{endpoint}: {detail}")]
    Transport { endpoint: String, detail: String },

    /// The service answered with a non-retryable status (4xx).
    #[error("{endpoint}: HTTP {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("{endpoint}: malformed response: {source}")]
    Malformed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// `update_task` was called with every field unset; no request was made.
    #[error("no updates provided")]
    NoUpdates,

    /// Task placement required a project that did not resolve.
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl TodoistError {
    /// True for the retry-exhausted transport class. Callers that queue work
    /// can use this to distinguish "try again later" from hard failures.
    pub fn is_transient(&self) -> bool {
        matches!(self, TodoistError::Transport { .. })
    }

    /// True when the service reported the resource missing (HTTP 404), e.g.
    /// after operating on a stale cached project id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoistError::Api { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, TodoistError>;
