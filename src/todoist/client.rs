use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::cache::ProjectCache;
use super::config::TodoistConfig;
use super::model::{Comment, NewTask, Project, Task, TaskDetail, TaskUpdate};
use super::retry::{with_retry, RetryPolicy};
use super::{Result, TodoistError};

const USER_AGENT: &str = "task-agent";

/// Client for the Todoist REST API.
///
/// Every operation returns a [`Result`]; failures come back as
/// [`TodoistError`](super::TodoistError) values, never panics. The token is
/// read from config/environment at the start of each operation, and every
/// request goes through the retry wrapper. Project name resolution is cached
/// for the lifetime of the client.
#[derive(Debug)]
pub struct TaskClient {
    http: reqwest::Client,
    config: TodoistConfig,
    retry: RetryPolicy,
    projects: ProjectCache,
}

impl TaskClient {
    /// Client configured from the environment.
    pub fn new() -> Result<Self> {
        Self::with_config(TodoistConfig::from_env())
    }

    pub fn with_config(config: TodoistConfig) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            config,
            retry: RetryPolicy::default(),
            projects: ProjectCache::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn config(&self) -> &TodoistConfig {
        &self.config
    }

    // ========== Projects ==========

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/projects", &[]).await
    }

    /// Look up a project by name, case-insensitively.
    ///
    /// The first resolution of a name lists projects once; afterwards the
    /// cached outcome is reused, including "no such project", until
    /// [`invalidate_project`](Self::invalidate_project) drops it.
    pub async fn resolve_project(&mut self, name: &str) -> Result<Option<Project>> {
        if let Some(cached) = self.projects.get(name) {
            debug!("project cache hit for '{}'", name);
            return Ok(cached);
        }
        let wanted = name.to_lowercase();
        let found = self
            .list_projects()
            .await?
            .into_iter()
            .find(|p| p.name.to_lowercase() == wanted);
        self.projects.store(name, found.clone());
        Ok(found)
    }

    /// Forget a cached resolution so the next lookup refetches.
    pub fn invalidate_project(&mut self, name: &str) {
        self.projects.invalidate(name);
    }

    /// Create a project and seed the cache with it.
    pub async fn create_project(&mut self, name: &str) -> Result<Project> {
        #[derive(Serialize)]
        struct Params<'a> {
            name: &'a str,
        }

        let project: Project = self.post_json("/projects", &Params { name }).await?;
        self.projects.store(&project.name, Some(project.clone()));
        Ok(project)
    }

    /// Delete a project by id and drop any cache entries resolving to it.
    pub async fn delete_project(&mut self, project_id: &str) -> Result<()> {
        self.delete(&format!("/projects/{project_id}")).await?;
        self.projects.invalidate_id(project_id);
        Ok(())
    }

    // ========== Tasks ==========

    /// Open tasks in the named project (the configured default when `None`).
    ///
    /// An unknown project name is not an error here: a warning is logged and
    /// the list comes back empty.
    pub async fn list_open_tasks(&mut self, project: Option<&str>) -> Result<Vec<Task>> {
        let name = project
            .unwrap_or(&self.config.default_project)
            .to_string();
        let Some(project) = self.resolve_project(&name).await? else {
            warn!("project '{}' not found, returning no tasks", name);
            return Ok(Vec::new());
        };
        let tasks: Vec<Task> = self
            .get_json("/tasks", &[("project_id", project.id.as_str())])
            .await?;
        // The service already filters by project; re-check both conditions
        // locally so a loose server response cannot leak foreign or
        // completed tasks into the result.
        Ok(tasks
            .into_iter()
            .filter(|t| !t.is_completed && t.project_id == project.id)
            .collect())
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        self.get_json(&format!("/tasks/{task_id}"), &[]).await
    }

    pub async fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        self.get_json("/comments", &[("task_id", task_id)]).await
    }

    /// Open subtasks of a task. The REST API has no parent filter, so this
    /// lists all tasks and narrows by `parent_id` locally.
    pub async fn get_subtasks(&self, parent_id: &str) -> Result<Vec<Task>> {
        let tasks: Vec<Task> = self.get_json("/tasks", &[]).await?;
        Ok(tasks
            .into_iter()
            .filter(|t| !t.is_completed && t.parent_id.as_deref() == Some(parent_id))
            .collect())
    }

    /// A task with its comments and open subtasks.
    ///
    /// Only the task fetch itself can fail the call. The two enrichment
    /// fetches degrade to empty lists with a warning, so a flaky comments
    /// endpoint cannot hide a task that exists.
    pub async fn get_task_detail(&self, task_id: &str) -> Result<TaskDetail> {
        let task = self.get_task(task_id).await?;
        let comments = match self.get_comments(task_id).await {
            Ok(comments) => comments,
            Err(err) => {
                warn!("comments fetch failed for task {}: {}", task_id, err);
                Vec::new()
            }
        };
        let subtasks = match self.get_subtasks(task_id).await {
            Ok(subtasks) => subtasks,
            Err(err) => {
                warn!("subtask fetch failed for task {}: {}", task_id, err);
                Vec::new()
            }
        };
        Ok(TaskDetail {
            task,
            comment_count: comments.len(),
            subtask_count: subtasks.len(),
            comments,
            subtasks,
        })
    }

    /// Timestamp of the most recent activity on a task: the later of its
    /// creation time and its newest comment, for staleness analysis.
    ///
    /// Both fetches fail soft. Only when neither yields a timestamp does the
    /// call fall back to the current instant, which callers must read as
    /// "unknown, treat as fresh" rather than real activity. A missing token
    /// is still fatal.
    pub async fn last_activity(&self, task_id: &str) -> Result<String> {
        self.config.token()?;
        let mut timestamps: Vec<String> = Vec::new();
        match self.get_task(task_id).await {
            Ok(task) => timestamps.push(task.created_at),
            Err(err) => warn!("task fetch failed for {}: {}", task_id, err),
        }
        match self.get_comments(task_id).await {
            Ok(comments) => timestamps.extend(comments.into_iter().map(|c| c.posted_at)),
            Err(err) => warn!("comments fetch failed for task {}: {}", task_id, err),
        }
        match latest_timestamp(timestamps.iter().map(String::as_str)) {
            Some(ts) => Ok(ts.to_string()),
            None => {
                warn!("no activity timestamps for task {}, treating as fresh", task_id);
                Ok(now_utc_iso())
            }
        }
    }

    pub async fn add_comment(&self, task_id: &str, content: &str) -> Result<Comment> {
        #[derive(Serialize)]
        struct Params<'a> {
            task_id: &'a str,
            content: &'a str,
        }

        self.post_json("/comments", &Params { task_id, content })
            .await
    }

    /// Apply a sparse update. Rejected with [`TodoistError::NoUpdates`]
    /// before any request when every field is unset.
    pub async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<Task> {
        if update.is_empty() {
            return Err(TodoistError::NoUpdates);
        }
        self.post_json(&format!("/tasks/{task_id}"), update).await
    }

    /// Create a task. A `parent_id` wins over any project; otherwise the
    /// requested (or default) project is resolved by name and an unresolved
    /// name fails the call.
    pub async fn create_task(&mut self, new: &NewTask) -> Result<Task> {
        #[derive(Serialize)]
        struct Params<'a> {
            content: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            due_string: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            priority: Option<u8>,
            #[serde(skip_serializing_if = "Option::is_none")]
            parent_id: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            project_id: Option<&'a str>,
        }

        let project_id = if new.parent_id.is_some() {
            None
        } else {
            let name = new
                .project
                .as_deref()
                .unwrap_or(&self.config.default_project)
                .to_string();
            match self.resolve_project(&name).await? {
                Some(project) => Some(project.id),
                None => return Err(TodoistError::ProjectNotFound(name)),
            }
        };

        self.post_json(
            "/tasks",
            &Params {
                content: &new.content,
                description: new.description.as_deref(),
                due_string: new.due_string.as_deref(),
                priority: new.priority,
                parent_id: new.parent_id.as_deref(),
                project_id: project_id.as_deref(),
            },
        )
        .await
    }

    /// Move a task into another project.
    pub async fn move_task(&self, task_id: &str, project_id: &str) -> Result<Task> {
        #[derive(Serialize)]
        struct Params<'a> {
            project_id: &'a str,
        }

        self.post_json(&format!("/tasks/{task_id}"), &Params { project_id })
            .await
    }

    // ========== Request plumbing ==========

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let token = self.config.token()?;
        let url = format!("{}{}", self.config.base_url, path);
        let response = with_retry(&self.retry, path, || {
            self.http
                .get(&url)
                .bearer_auth(&token)
                .query(query)
                .send()
        })
        .await?;
        self.parse(path, response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = self.config.token()?;
        let url = format!("{}{}", self.config.base_url, path);
        let response = with_retry(&self.retry, path, || {
            self.http.post(&url).bearer_auth(&token).json(body).send()
        })
        .await?;
        self.parse(path, response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let token = self.config.token()?;
        let url = format!("{}{}", self.config.base_url, path);
        let response = with_retry(&self.retry, path, || {
            self.http.delete(&url).bearer_auth(&token).send()
        })
        .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TodoistError::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Map a response to the parsed body, an `Api` error for non-2xx, or a
    /// `Malformed` error when the body does not deserialize.
    async fn parse<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await.map_err(|e| TodoistError::Transport {
            endpoint: endpoint.to_string(),
            detail: format!("failed to read body: {e}"),
        })?;
        if !status.is_success() {
            return Err(TodoistError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|source| TodoistError::Malformed {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// Latest of a set of ISO-8601 strings, ignoring empties.
///
/// Comparison is plain string order, which matches chronological order only
/// because the service emits fixed-width UTC timestamps with a trailing `Z`.
/// Mixed offsets or precisions would need real datetime parsing.
fn latest_timestamp<'a, I>(timestamps: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    timestamps.into_iter().filter(|ts| !ts.is_empty()).max()
}

/// Current instant as a UTC ISO-8601 string shaped like the service's own
/// timestamps (microseconds, `Z` suffix).
fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
