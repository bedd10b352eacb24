//! Tab Bar Component
//!
//! Category tabs that select which tasks the list shows.

use leptos::prelude::*;

use crate::models::Category;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

/// Tab bar component
#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="tab-bar">
            {Category::ALL.into_iter().map(|tab| {
                let is_active = move || store.tab().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| dispatch(store, Action::TabSelected(tab))
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
