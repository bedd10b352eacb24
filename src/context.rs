//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::repository::TaskRepository;
use crate::store::{dispatch, Action, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Remote task table
    repo: StoredValue<Rc<dyn TaskRepository>, LocalStorage>,
    /// View state
    store: AppStore,
}

impl AppContext {
    pub fn new(repo: Rc<dyn TaskRepository>, store: AppStore) -> Self {
        Self {
            repo: StoredValue::new_local(repo),
            store,
        }
    }

    /// Run a command on the event loop and apply its action once it resolves.
    ///
    /// Other interactions stay live while the call is in flight.
    pub fn perform<F, Fut>(&self, command: F)
    where
        F: FnOnce(Rc<dyn TaskRepository>) -> Fut + 'static,
        Fut: Future<Output = Option<Action>> + 'static,
    {
        let repo = self.repo.get_value();
        let store = self.store;
        spawn_local(async move {
            if let Some(action) = command(repo).await {
                dispatch(store, action);
            }
        });
    }
}
