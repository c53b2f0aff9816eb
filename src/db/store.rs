// src/db/store.rs
// DOCUMENTATION: Data store abstraction
// PURPOSE: Table-scoped operations consumed by handlers and the seed loader

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Tables exposed by the hosted database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Gallery,
    Testimonials,
    Bookings,
    ContactSubmissions,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Gallery => "gallery",
            Table::Testimonials => "testimonials",
            Table::Bookings => "bookings",
            Table::ContactSubmissions => "contact_submissions",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to a `select`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    /// Newest rows first, by the server-assigned creation timestamp
    pub const NEWEST_FIRST: Order = Order {
        column: "created_at",
        ascending: false,
    };
}

/// Error reported by the data store
/// DOCUMENTATION: Mirrors the `{code, message}` error body of the store's REST
/// layer. The message is surfaced to API callers verbatim.
#[derive(Error, Debug, Clone, PartialEq, Deserialize)]
#[error("{message}")]
pub struct StoreError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn not_configured() -> Self {
        Self::new("Store credentials are not configured")
    }
}

/// Table-scoped access to the hosted database
/// DOCUMENTATION: Rows travel as JSON objects; typing happens in the models layer.
/// Every method performs exactly one round trip to the store.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// All rows of `table`, sorted by `order`
    async fn select(&self, table: Table, order: Order) -> Result<Vec<Value>, StoreError>;

    /// Whether `table` holds at least one row
    async fn exists_any(&self, table: Table) -> Result<bool, StoreError>;

    /// Insert `rows` in a single call and return them as stored
    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<Vec<Value>, StoreError>;

    /// Apply `fields` to the row with `id`; `None` when no row matched
    async fn update(&self, table: Table, id: &str, fields: Value)
        -> Result<Option<Value>, StoreError>;

    /// Delete the row with `id`; succeeds whether or not it existed
    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError>;
}
