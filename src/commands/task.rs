//! Task Commands
//!
//! One remote call per user action. Each returns the state transition to
//! apply once the call has succeeded; failures are logged and yield `None`.

use crate::models::{NewTask, TaskFlag, TaskId, TaskPatch};
use crate::repository::TaskRepository;
use crate::store::Action;

/// Empty once whitespace and byte-order marks are stripped
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// Fetch all tasks, newest first
pub async fn load_tasks(repo: &dyn TaskRepository) -> Option<Action> {
    match repo.list().await {
        Ok(tasks) => {
            log::info!("[TASKS] Loaded {} tasks", tasks.len());
            Some(Action::Loaded(tasks))
        }
        Err(e) => {
            log::error!("[TASKS] Failed to load tasks: {}", e);
            None
        }
    }
}

/// Insert a task. Blank text is rejected without a call.
pub async fn create_task(repo: &dyn TaskRepository, text: &str) -> Option<Action> {
    if is_blank(text) {
        return None;
    }
    match repo.insert(&NewTask::new(text)).await {
        Ok(task) => {
            log::info!("[TASKS] Created task {}", task.id);
            Some(Action::Created(task))
        }
        Err(e) => {
            log::error!("[TASKS] Failed to create task: {}", e);
            None
        }
    }
}

/// Replace a task's text. Blank text is rejected without a call.
pub async fn save_text(repo: &dyn TaskRepository, id: &TaskId, text: &str) -> Option<Action> {
    if is_blank(text) {
        return None;
    }
    match repo.update(id, &TaskPatch::text(text)).await {
        Ok(()) => Some(Action::TextUpdated { id: id.clone(), text: text.to_string() }),
        Err(e) => {
            log::error!("[TASKS] Failed to update task {}: {}", id, e);
            None
        }
    }
}

/// Write `!current` to the flag. No read-before-write: last writer wins.
pub async fn toggle_flag(repo: &dyn TaskRepository, id: &TaskId, flag: TaskFlag, current: bool) -> Option<Action> {
    let value = !current;
    match repo.update(id, &TaskPatch::flag(flag, value)).await {
        Ok(()) => Some(Action::FlagSet { id: id.clone(), flag, value }),
        Err(e) => {
            log::error!("[TASKS] Failed to set {:?}={} on task {}: {}", flag, value, id, e);
            None
        }
    }
}

/// Delete a task
pub async fn delete_task(repo: &dyn TaskRepository, id: &TaskId) -> Option<Action> {
    match repo.delete(id).await {
        Ok(()) => {
            log::info!("[TASKS] Deleted task {}", id);
            Some(Action::Deleted(id.clone()))
        }
        Err(e) => {
            log::error!("[TASKS] Failed to delete task {}: {}", id, e);
            None
        }
    }
}
