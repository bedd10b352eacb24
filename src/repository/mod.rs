//! Repository Layer
//!
//! Abstract access to the remote task table, plus implementations.

mod remote;
#[cfg(test)]
mod memory;

use async_trait::async_trait;

use crate::models::{NewTask, Task, TaskId, TaskPatch};

pub use remote::RemoteTaskRepository;
#[cfg(test)]
pub use memory::MemoryTaskRepository;

/// Failures of a repository call
pub type RepoError = rest_table::Error;
pub type RepoResult<T> = Result<T, RepoError>;

/// Remote CRUD over the task table.
///
/// Futures are `!Send`: the browser runs them on its single event loop.
#[async_trait(?Send)]
pub trait TaskRepository {
    /// All tasks, newest first
    async fn list(&self) -> RepoResult<Vec<Task>>;

    /// Insert and return the stored record
    async fn insert(&self, task: &NewTask<'_>) -> RepoResult<Task>;

    /// Apply a partial update to one record
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> RepoResult<()>;

    /// Delete one record
    async fn delete(&self, id: &TaskId) -> RepoResult<()>;
}
