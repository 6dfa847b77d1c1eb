/// Environment variable holding the Todoist API token.
pub const TOKEN_ENV: &str = "TODOIST_API_TOKEN";

/// Environment variable overriding the REST base URL (integration tests point
/// this at a local fixture server).
pub const BASE_URL_ENV: &str = "TODOIST_API_BASE_URL";

/// Environment variable overriding the default project name.
pub const DEFAULT_PROJECT_ENV: &str = "TODOIST_DEFAULT_PROJECT";

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Project used when a caller does not name one.
pub const DEFAULT_PROJECT: &str = "Work";

/// Connection settings for [`TaskClient`](crate::todoist::TaskClient).
///
/// The token is deliberately NOT captured at construction time: a `None`
/// token means "read the environment on every call", so a token exported
/// after the client was built still takes effect, and one removed mid-run
/// fails the next call instead of silently reusing a stale secret.
#[derive(Debug, Clone)]
pub struct TodoistConfig {
    pub base_url: String,
    pub default_project: String,
    token: Option<String>,
}

impl TodoistConfig {
    /// Resolve settings from the environment, falling back to the public
    /// Todoist REST endpoint and the stock default project.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_project: std::env::var(DEFAULT_PROJECT_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
            token: None,
        }
    }

    /// Pin the token instead of reading the environment per call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_project(mut self, name: impl Into<String>) -> Self {
        self.default_project = name.into();
        self
    }

    /// The bearer token for the next request. Pinned value wins; otherwise
    /// the environment is consulted fresh. Empty counts as missing.
    pub fn token(&self) -> super::Result<String> {
        if let Some(token) = &self.token {
            if !token.is_empty() {
                return Ok(token.clone());
            }
        }
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(super::TodoistError::MissingToken),
        }
    }
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_project: DEFAULT_PROJECT.to_string(),
            token: None,
        }
    }
}
