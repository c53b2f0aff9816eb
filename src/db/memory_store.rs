// src/db/memory_store.rs
// DOCUMENTATION: In-memory DataStore for tests
// PURPOSE: Assigns ids and timestamps like the hosted database, without network

use crate::db::{DataStore, Order, StoreError, Table};
use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<HashMap<Table, Vec<Value>>>,
    /// Rows inserted so far; drives monotonically increasing `created_at`
    sequence: AtomicUsize,
    /// Store calls received
    calls: AtomicUsize,
    /// When set, every call fails with this message
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row_count(&self, table: Table) -> usize {
        self.tables
            .lock()
            .unwrap()
            .get(&table)
            .map_or(0, Vec::len)
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(StoreError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn stamp(&self, row: Value) -> Value {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) as i64;
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq);

        let mut object = match row {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        object.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        object.insert(
            "created_at".into(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        Value::Object(object)
    }
}

fn id_matches(row: &Value, id: &str) -> bool {
    match row.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

fn sort_key(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn select(&self, table: Table, order: Order) -> Result<Vec<Value>, StoreError> {
        self.begin()?;
        let mut rows = self
            .tables
            .lock()
            .unwrap()
            .get(&table)
            .cloned()
            .unwrap_or_default();

        rows.sort_by_key(|row| sort_key(row, order.column));
        if !order.ascending {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn exists_any(&self, table: Table) -> Result<bool, StoreError> {
        self.begin()?;
        Ok(self.row_count(table) > 0)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        self.begin()?;
        let stamped: Vec<Value> = rows.into_iter().map(|row| self.stamp(row)).collect();
        self.tables
            .lock()
            .unwrap()
            .entry(table)
            .or_default()
            .extend(stamped.iter().cloned());
        Ok(stamped)
    }

    async fn update(
        &self,
        table: Table,
        id: &str,
        fields: Value,
    ) -> Result<Option<Value>, StoreError> {
        self.begin()?;
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| id_matches(row, id)))
        else {
            return Ok(None);
        };

        if let (Value::Object(target), Value::Object(changes)) = (&mut *row, fields) {
            target.extend(changes);
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        self.begin()?;
        if let Some(rows) = self.tables.lock().unwrap().get_mut(&table) {
            rows.retain(|row| !id_matches(row, id));
        }
        Ok(())
    }
}
