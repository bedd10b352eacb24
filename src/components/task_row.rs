//! Task Row Component
//!
//! One task with its checkbox, text (or edit input) and action buttons.

use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;
use crate::models::{Task, TaskFlag};
use crate::store::{dispatch, flag_of, use_app_store, Action, AppStateStoreFields};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let completed = task.flag(TaskFlag::Completed);
    let important = task.flag(TaskFlag::Important);
    let archived = task.flag(TaskFlag::Archived);
    let text = task.text;
    let id = StoredValue::new(task.id);

    let is_editing = move || {
        store
            .editing()
            .with(|edit| edit.as_ref().is_some_and(|edit| id.with_value(|id| &edit.id == id)))
    };

    // Completion as stored; the checkbox never shows anything else
    let stored_completed = move || {
        id.with_value(|id| store.tasks().with(|tasks| flag_of(tasks, id, TaskFlag::Completed)))
            .unwrap_or(completed)
    };

    // Sends the negation of the stored value; last writer wins
    let toggle = move |flag: TaskFlag| {
        let id = id.get_value();
        let Some(current) = store.tasks().with_untracked(|tasks| flag_of(tasks, &id, flag)) else { return };
        ctx.perform(move |repo| async move { commands::toggle_flag(repo.as_ref(), &id, flag, current).await });
    };

    let save = move |_| {
        let id = id.get_value();
        let staged = store.editing().with_untracked(|edit| edit.as_ref().map(|edit| edit.text.clone()));
        let Some(text) = staged else { return };
        ctx.perform(move |repo| async move { commands::save_text(repo.as_ref(), &id, &text).await });
    };

    let delete = move |_| {
        let id = id.get_value();
        ctx.perform(move |repo| async move { commands::delete_task(repo.as_ref(), &id).await });
    };

    let row_class = {
        let mut class = String::from("task-row");
        if completed { class.push_str(" completed"); }
        if archived { class.push_str(" archived"); }
        class
    };

    // Focus the edit input once it is mounted
    let edit_input = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_input.get() {
            let _ = input.focus();
        }
    });

    let star_class = if important { "star-btn active" } else { "star-btn" };

    view! {
        <div class=row_class>
            // Checkbox
            <input
                type="checkbox"
                class="task-check"
                prop:checked=stored_completed
                disabled=archived
                on:click=move |ev| {
                    // The box only moves when the stored flag does
                    ev.prevent_default();
                    toggle(TaskFlag::Completed);
                }
            />

            // Text or edit input
            {move || if is_editing() {
                view! {
                    <input
                        type="text"
                        class="task-edit"
                        node_ref=edit_input
                        prop:value=move || store.editing().with(|edit| edit.as_ref().map(|edit| edit.text.clone()).unwrap_or_default())
                        on:input=move |ev| dispatch(store, Action::EditChanged(event_target_value(&ev)))
                    />
                }.into_any()
            } else {
                view! { <span class="task-text">{text.clone()}</span> }.into_any()
            }}

            // Actions
            <div class="task-actions">
                {(!archived).then(|| view! {
                    {move || if is_editing() {
                        view! { <button class="save-btn" on:click=save>"Save"</button> }.into_any()
                    } else {
                        view! {
                            <button
                                class="edit-btn"
                                title="Edit"
                                on:click=move |_| dispatch(store, Action::EditStarted(id.get_value()))
                            >
                                "✎"
                            </button>
                        }.into_any()
                    }}
                    <button
                        class=star_class
                        title="Important"
                        on:click=move |_| toggle(TaskFlag::Important)
                    >
                        "★"
                    </button>
                })}
                <button class="archive-btn" title="Archive" on:click=move |_| toggle(TaskFlag::Archived)>
                    "Archive"
                </button>
                <button class="delete-btn" title="Delete" on:click=delete>
                    "×"
                </button>
            </div>
        </div>
    }
}
