// src/db/postgrest.rs
// DOCUMENTATION: REST client for the hosted database
// PURPOSE: Implement DataStore over the PostgREST endpoint under /rest/v1

use crate::db::{DataStore, Order, StoreError, Table};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// Hosted database client
/// DOCUMENTATION: One instance is built at startup and shared by every request.
/// An instance with an empty URL or key is allowed; each call then fails with
/// `StoreError::not_configured`.
pub struct PostgrestStore {
    /// HTTP client for making requests
    client: Client,
    /// Project URL, without trailing slash
    base_url: String,
    /// Key sent as both `apikey` and bearer token
    api_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }

    pub fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: Table) -> Result<RequestBuilder, StoreError> {
        if !self.is_configured() {
            return Err(StoreError::not_configured());
        }

        Ok(self
            .client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key))
    }

    /// Send a request and turn non-2xx responses into StoreError
    async fn send(&self, table: Table, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Store request on {} failed: {}", table, e);
            StoreError::new(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("Store error on {} ({}): {}", table, status, body);

        Err(serde_json::from_str::<StoreError>(&body)
            .unwrap_or_else(|_| StoreError::new(format!("Store returned {}: {}", status, body))))
    }

    async fn rows(table: Table, response: Response) -> Result<Vec<Value>, StoreError> {
        response.json::<Vec<Value>>().await.map_err(|e| {
            log::error!("Failed to parse store response for {}: {}", table, e);
            StoreError::new(format!("Parse error: {}", e))
        })
    }
}

fn order_param(order: Order) -> String {
    let direction = if order.ascending { "asc" } else { "desc" };
    format!("{}.{}", order.column, direction)
}

fn id_filter(id: &str) -> String {
    format!("eq.{}", id)
}

#[async_trait]
impl DataStore for PostgrestStore {
    async fn select(&self, table: Table, order: Order) -> Result<Vec<Value>, StoreError> {
        let request = self
            .request(Method::GET, table)?
            .query(&[("select", "*".to_string()), ("order", order_param(order))]);

        let response = self.send(table, request).await?;
        Self::rows(table, response).await
    }

    async fn exists_any(&self, table: Table) -> Result<bool, StoreError> {
        let request = self
            .request(Method::GET, table)?
            .query(&[("select", "id"), ("limit", "1")]);

        let response = self.send(table, request).await?;
        Ok(!Self::rows(table, response).await?.is_empty())
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        log::debug!("Inserting {} rows into {}", rows.len(), table);

        let request = self
            .request(Method::POST, table)?
            .header("Prefer", "return=representation")
            .json(&rows);

        let response = self.send(table, request).await?;
        Self::rows(table, response).await
    }

    async fn update(
        &self,
        table: Table,
        id: &str,
        fields: Value,
    ) -> Result<Option<Value>, StoreError> {
        let request = self
            .request(Method::PATCH, table)?
            .query(&[("id", id_filter(id))])
            .header("Prefer", "return=representation")
            .json(&fields);

        let response = self.send(table, request).await?;
        Ok(Self::rows(table, response).await?.into_iter().next())
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        let request = self
            .request(Method::DELETE, table)?
            .query(&[("id", id_filter(id))]);

        self.send(table, request).await?;
        Ok(())
    }
}
