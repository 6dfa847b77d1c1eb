//! Todoist REST API client
//!
//! This module provides the task operation surface for the agent personas:
//! - Project resolution with a case-insensitive cache
//! - Task listing, detail aggregation, and last-activity computation
//! - Task and comment creation, sparse updates, project management
//! - Uniform retry with exponential backoff on transport failures and 5xx
//!
//! Operations report failures as [`TodoistError`] values rather than
//! panicking, and read the API token from the environment on every call.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod retry;

pub use client::TaskClient;
pub use config::{TodoistConfig, BASE_URL_ENV, DEFAULT_PROJECT, DEFAULT_PROJECT_ENV, TOKEN_ENV};
pub use error::{Result, TodoistError};
pub use model::{Comment, Due, NewTask, Project, Task, TaskDetail, TaskUpdate};
pub use retry::RetryPolicy;
