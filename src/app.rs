//! Task List Frontend App
//!
//! Root component: wires the store, the remote repository and the layout.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTaskForm, TabBar, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::repository::{RemoteTaskRepository, TaskRepository};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let config = AppConfig::from_build_env();
    if !config.is_complete() {
        log::warn!("[CONFIG] SUPABASE_URL or SUPABASE_ANON_KEY not set, remote calls will fail");
    }
    let repo: Rc<dyn TaskRepository> = Rc::new(RemoteTaskRepository::new(&config));

    let ctx = AppContext::new(repo, store);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading tasks");
        ctx.perform(|repo| async move { commands::load_tasks(repo.as_ref()).await });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo App"</h1>

                <TabBar />

                <NewTaskForm />

                <TaskList />
            </main>
        </div>
    }
}
