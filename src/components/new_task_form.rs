//! New Task Form Component
//!
//! Input and submit button for adding a task.

use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.draft().get_untracked();
        ctx.perform(move |repo| async move { commands::create_task(repo.as_ref(), &text).await });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || store.draft().get()
                    on:input=move |ev| dispatch(store, Action::DraftChanged(event_target_value(&ev)))
                />
                <button type="submit">"Add Task"</button>
            </div>
        </form>
    }
}
