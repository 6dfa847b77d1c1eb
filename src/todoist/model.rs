use serde::{Deserialize, Serialize};

/// A Todoist project as returned by `GET /projects`.
///
/// The service sends more fields than these; everything beyond the id and
/// name is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Due-date block attached to a task. `date` is always present when the
/// block exists; `datetime` only for time-of-day deadlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    pub date: String,
    #[serde(default)]
    pub string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

/// A Todoist task.
///
/// Timestamps are kept as the ISO-8601 strings the service sends (UTC with a
/// trailing `Z`), which keeps them ordered under plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    /// Priority 1 (normal) through 4 (urgent). The API's scale is inverted
    /// relative to the UI: the UI's "p1" arrives here as 4.
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub url: String,
}

fn default_priority() -> u8 {
    1
}

/// A comment on a task, from `GET /comments?task_id=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub posted_at: String,
}

/// A task joined with its discussion and open subtasks.
///
/// Produced by `get_task_detail`: the task fetch is authoritative, while the
/// comment and subtask lists degrade to empty when their fetches fail. The
/// counts always match the lists, so a zero count can mean "none" or "fetch
/// degraded"; callers that care must watch the logs.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub comments: Vec<Comment>,
    pub subtasks: Vec<Task>,
    pub comment_count: usize,
    pub subtask_count: usize,
}

/// Fields for a task creation request. `content` is the only required one.
///
/// Placement: a `parent_id` wins over any project, otherwise `project` (or
/// the configured default when `None`) is resolved by name.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub content: String,
    pub description: Option<String>,
    pub due_string: Option<String>,
    pub priority: Option<u8>,
    pub parent_id: Option<String>,
    pub project: Option<String>,
}

impl NewTask {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Sparse update for `POST /tasks/{id}`. Only the set fields are sent; an
/// all-`None` update is rejected client-side before any request goes out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.description.is_none()
            && self.due_string.is_none()
            && self.priority.is_none()
    }
}
