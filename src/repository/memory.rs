//! In-Memory Task Repository
//!
//! Test double that behaves like the remote table: it assigns ids and
//! creation times, lists newest first and reports unmatched ids as missing.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use super::{RepoError, RepoResult, TaskRepository};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u32>,
    calls: Cell<usize>,
    fail_next: Cell<bool>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Make the next call fail with a transport error
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    /// Server-side view of a record
    pub fn stored(&self, id: &TaskId) -> Option<Task> {
        self.tasks.borrow().iter().find(|t| &t.id == id).cloned()
    }

    fn begin_call(&self) -> RepoResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_next.replace(false) {
            return Err(RepoError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found(id: &TaskId) -> RepoError {
        RepoError::NotFound(format!("todos where id = {}", id))
    }
}

#[async_trait(?Send)]
impl TaskRepository for MemoryTaskRepository {
    async fn list(&self) -> RepoResult<Vec<Task>> {
        self.begin_call()?;
        let mut tasks = self.tasks.borrow().clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn insert(&self, task: &NewTask<'_>) -> RepoResult<Task> {
        self.begin_call()?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default();
        let stored = Task {
            id: TaskId::new(id.to_string()),
            text: task.task.to_string(),
            completed: task.is_completed,
            important: task.is_important,
            archived: task.is_archived,
            created_at: Some(base + Duration::seconds(i64::from(id))),
        };
        self.tasks.borrow_mut().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> RepoResult<()> {
        self.begin_call()?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| &t.id == id).ok_or_else(|| Self::not_found(id))?;
        if let Some(text) = &patch.task {
            task.text = text.clone();
        }
        if let Some(value) = patch.is_completed {
            task.completed = value;
        }
        if let Some(value) = patch.is_important {
            task.important = value;
        }
        if let Some(value) = patch.is_archived {
            task.archived = value;
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> RepoResult<()> {
        self.begin_call()?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
