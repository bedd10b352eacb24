//! Remote Task Repository
//!
//! `TaskRepository` over the hosted REST table.

use async_trait::async_trait;
use rest_table::{ClientConfig, Order, RestClient, Table};

use super::{RepoResult, TaskRepository};
use crate::config::AppConfig;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

const ID_COLUMN: &str = "id";
const CREATED_AT_COLUMN: &str = "created_at";

pub struct RemoteTaskRepository {
    table: Table,
}

impl RemoteTaskRepository {
    pub fn new(config: &AppConfig) -> Self {
        let client = RestClient::new(ClientConfig {
            url: config.url.clone(),
            api_key: config.anon_key.clone(),
        });
        Self { table: client.from(&config.table) }
    }
}

#[async_trait(?Send)]
impl TaskRepository for RemoteTaskRepository {
    async fn list(&self) -> RepoResult<Vec<Task>> {
        self.table.select_all(Some(&Order::desc(CREATED_AT_COLUMN))).await
    }

    async fn insert(&self, task: &NewTask<'_>) -> RepoResult<Task> {
        self.table.insert_one(task).await
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> RepoResult<()> {
        self.table
            .update_eq::<_, serde_json::Value>(ID_COLUMN, id.as_str(), patch)
            .await
            .map(|_| ())
    }

    async fn delete(&self, id: &TaskId) -> RepoResult<()> {
        self.table
            .delete_eq::<serde_json::Value>(ID_COLUMN, id.as_str())
            .await
            .map(|_| ())
    }
}
