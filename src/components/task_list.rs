//! Task List Component
//!
//! Shows the tasks matching the selected tab.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::filter::visible_tasks;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filtered task list
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let tab = store.tab().get();
        store.tasks().with(|tasks| visible_tasks(tasks, tab))
    });

    view! {
        <div class="task-list">
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-message">"No tasks in this category."</p> }
            >
                <For
                    each=move || visible.get()
                    // Every displayed field is part of the key so edits re-render the row
                    key=|task| (
                        task.id.clone(),
                        task.text.clone(),
                        task.completed,
                        task.important,
                        task.archived,
                    )
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </Show>
        </div>
    }
}
