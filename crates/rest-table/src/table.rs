//! Table Operations
//!
//! The four calls a generic record collection has to support.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::RestClient;
use crate::error::{Error, Result};

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Sort order for select queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    column: String,
    ascending: bool,
}

impl Order {
    pub fn asc(column: &str) -> Self {
        Self { column: column.to_string(), ascending: true }
    }

    pub fn desc(column: &str) -> Self {
        Self { column: column.to_string(), ascending: false }
    }

    fn to_param(&self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}

/// Handle to a single remote table
#[derive(Clone)]
pub struct Table {
    client: RestClient,
    name: String,
}

impl Table {
    pub(crate) fn new(client: RestClient, name: &str) -> Self {
        Self { client, name: name.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch every row, optionally ordered
    pub async fn select_all<T: DeserializeOwned>(&self, order: Option<&Order>) -> Result<Vec<T>> {
        let url = self.client.endpoint(&self.name, &select_query(order))?;
        log::debug!("[REST] GET {}", url);
        self.client.send(self.client.request(Method::GET, url)).await
    }

    /// Insert one row and return the stored representation
    pub async fn insert_one<B, T>(&self, row: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.client.endpoint(&self.name, &[])?;
        log::debug!("[REST] POST {}", url);
        let builder = self
            .client
            .request(Method::POST, url)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(row);
        let rows: Vec<T> = self.client.send(builder).await?;
        rows.into_iter().next().ok_or(Error::EmptyResponse)
    }

    /// Apply a partial update to rows where `column = value`.
    /// Matching nothing is an error.
    pub async fn update_eq<B, T>(&self, column: &str, value: &str, patch: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.client.endpoint(&self.name, &eq_query(column, value))?;
        log::debug!("[REST] PATCH {}", url);
        let builder = self
            .client
            .request(Method::PATCH, url)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(patch);
        let rows: Vec<T> = self.client.send(builder).await?;
        self.require_match(rows, column, value)
    }

    /// Delete rows where `column = value`. Matching nothing is an error.
    pub async fn delete_eq<T: DeserializeOwned>(&self, column: &str, value: &str) -> Result<Vec<T>> {
        let url = self.client.endpoint(&self.name, &eq_query(column, value))?;
        log::debug!("[REST] DELETE {}", url);
        let builder = self
            .client
            .request(Method::DELETE, url)
            .header(PREFER, RETURN_REPRESENTATION);
        let rows: Vec<T> = self.client.send(builder).await?;
        self.require_match(rows, column, value)
    }

    fn require_match<T>(&self, rows: Vec<T>, column: &str, value: &str) -> Result<Vec<T>> {
        if rows.is_empty() {
            Err(Error::NotFound(format!("{} where {} = {}", self.name, column, value)))
        } else {
            Ok(rows)
        }
    }
}

fn select_query(order: Option<&Order>) -> Vec<(&'static str, String)> {
    let mut query = vec![("select", "*".to_string())];
    if let Some(order) = order {
        query.push(("order", order.to_param()));
    }
    query
}

fn eq_query<'a>(column: &'a str, value: &str) -> Vec<(&'a str, String)> {
    vec![(column, format!("eq.{}", value))]
}
