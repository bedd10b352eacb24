//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod tab_bar;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use tab_bar::TabBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
