//! HTTP Client
//!
//! Holds the endpoint and credential, signs every request and decodes
//! JSON array responses.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{status_error, Error, Result};
use crate::table::Table;

/// Endpoint location and access credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub api_key: String,
}

/// Shared client for one project endpoint
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: String,
    api_key: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Handle to one table
    pub fn from(&self, table: &str) -> Table {
        Table::new(self.clone(), table)
    }

    pub(crate) fn endpoint(&self, table: &str, query: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}/rest/v1/{}", self.base, table);
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.api_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
    }

    /// Send and decode a JSON array of rows
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_rows(status, &body)
    }
}

/// Non-success statuses become `Status` errors. An empty body decodes as no rows.
pub(crate) fn decode_rows<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Vec<T>> {
    if !status.is_success() {
        return Err(status_error(status.as_u16(), body));
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}
