//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state itself
//! only changes through `AppState::reduce`, one `Action` at a time.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Task, TaskFlag, TaskId};

/// Record currently being edited and its staged text
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    pub id: TaskId,
    pub text: String,
}

/// Global view state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Local mirror of the remote table, newest first
    pub tasks: Vec<Task>,
    /// Selected tab
    pub tab: Category,
    /// Text in the new-task input
    pub draft: String,
    /// At most one record in edit mode
    pub editing: Option<EditState>,
}

/// State transitions. Remote-backed ones are only produced after the call succeeded.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Loaded(Vec<Task>),
    Created(Task),
    TextUpdated { id: TaskId, text: String },
    FlagSet { id: TaskId, flag: TaskFlag, value: bool },
    Deleted(TaskId),
    DraftChanged(String),
    TabSelected(Category),
    EditStarted(TaskId),
    EditChanged(String),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition from the old state to the next one
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Loaded(tasks) => self.tasks = tasks,
            Action::Created(task) => {
                self.tasks.insert(0, task);
                self.draft.clear();
            }
            Action::TextUpdated { id, text } => {
                if let Some(task) = self.task_mut(&id) {
                    task.text = text;
                }
                if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
                    self.editing = None;
                }
            }
            Action::FlagSet { id, flag, value } => {
                if let Some(task) = self.task_mut(&id) {
                    task.set_flag(flag, value);
                }
            }
            Action::Deleted(id) => {
                self.tasks.retain(|task| task.id != id);
                if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
                    self.editing = None;
                }
            }
            Action::DraftChanged(text) => self.draft = text,
            Action::TabSelected(tab) => self.tab = tab,
            Action::EditStarted(id) => {
                if let Some(text) = self.tasks.iter().find(|task| task.id == id).map(|task| task.text.clone()) {
                    self.editing = Some(EditState { id, text });
                }
            }
            Action::EditChanged(text) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.text = text;
                }
            }
        }
        self
    }

    fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }
}

/// Stored value of one flag, `None` when the task is not in the list.
///
/// Rows render from this rather than from the DOM, so a failed call never
/// changes what is shown.
pub fn flag_of(tasks: &[Task], id: &TaskId, flag: TaskFlag) -> Option<bool> {
    tasks.iter().find(|task| &task.id == id).map(|task| task.flag(flag))
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply an action to the store
pub fn dispatch(store: AppStore, action: Action) {
    store.update(|state| {
        let current = std::mem::take(state);
        *state = current.reduce(action);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, text: &str) -> Task {
        Task {
            id: TaskId::new(id),
            text: text.to_string(),
            completed: false,
            important: false,
            archived: false,
            created_at: None,
        }
    }

    fn loaded() -> AppState {
        AppState::new().reduce(Action::Loaded(vec![make_task("2", "Second"), make_task("1", "First")]))
    }

    #[test]
    fn test_fresh_state() {
        let state = AppState::new();
        assert!(state.tasks.is_empty());
        assert_eq!(state.tab, Category::All);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_created_prepends_and_clears_draft() {
        let state = loaded()
            .reduce(Action::DraftChanged("Third".to_string()))
            .reduce(Action::Created(make_task("3", "Third")));

        assert_eq!(state.tasks[0].text, "Third");
        assert_eq!(state.tasks.len(), 3);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let state = loaded().reduce(Action::EditStarted(TaskId::new("1")));
        assert_eq!(state.editing, Some(EditState { id: TaskId::new("1"), text: "First".to_string() }));

        let state = state.reduce(Action::EditChanged("First, revised".to_string()));
        assert_eq!(state.editing.as_ref().map(|e| e.text.as_str()), Some("First, revised"));

        let state = state.reduce(Action::TextUpdated { id: TaskId::new("1"), text: "First, revised".to_string() });
        assert_eq!(state.tasks[1].text, "First, revised");
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_starting_another_edit_replaces_the_first() {
        let state = loaded()
            .reduce(Action::EditStarted(TaskId::new("1")))
            .reduce(Action::EditChanged("unsaved".to_string()))
            .reduce(Action::EditStarted(TaskId::new("2")));

        assert_eq!(state.editing, Some(EditState { id: TaskId::new("2"), text: "Second".to_string() }));
        assert_eq!(state.tasks[1].text, "First");
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let state = loaded().reduce(Action::EditStarted(TaskId::new("99")));
        assert_eq!(state.editing, None);

        let state = state.reduce(Action::EditChanged("nothing to edit".to_string()));
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_flag_set_touches_one_task() {
        let state = loaded().reduce(Action::FlagSet { id: TaskId::new("2"), flag: TaskFlag::Archived, value: true });
        assert!(state.tasks[0].archived);
        assert!(!state.tasks[1].archived);
        assert!(!state.tasks[0].completed && !state.tasks[0].important);
    }

    #[test]
    fn test_deleted_removes_task_and_its_edit() {
        let state = loaded()
            .reduce(Action::EditStarted(TaskId::new("2")))
            .reduce(Action::Deleted(TaskId::new("2")));

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].id, TaskId::new("1"));
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_flag_of_reads_stored_value() {
        let state = loaded().reduce(Action::FlagSet { id: TaskId::new("1"), flag: TaskFlag::Completed, value: true });
        assert_eq!(flag_of(&state.tasks, &TaskId::new("1"), TaskFlag::Completed), Some(true));
        assert_eq!(flag_of(&state.tasks, &TaskId::new("2"), TaskFlag::Completed), Some(false));
        assert_eq!(flag_of(&state.tasks, &TaskId::new("99"), TaskFlag::Completed), None);
    }

    #[test]
    fn test_loaded_replaces_list_but_keeps_tab() {
        let state = loaded()
            .reduce(Action::TabSelected(Category::Complete))
            .reduce(Action::Loaded(vec![make_task("9", "Only")]));

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tab, Category::Complete);
    }
}
