// src/models/resource.rs
// DOCUMENTATION: Shared resource plumbing
// PURPOSE: Tie each row type to its table, label and request payload

use crate::db::Table;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Record identifier as assigned by the store
/// DOCUMENTATION: The hosted schema may use integer or UUID keys, so both are
/// accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A row type exposed through the API
/// DOCUMENTATION: The row struct describes the expected columns; responses
/// still carry the store's rows unchanged, unknown columns and nulls included.
/// `Payload` is the request body accepted for create/update. It
/// serializes to exactly the columns the API writes, with absent optional
/// fields sent as `null`.
pub trait Resource: DeserializeOwned + Serialize {
    const TABLE: Table;
    /// Human-readable name used in response messages
    const LABEL: &'static str;

    type Payload: DeserializeOwned + Serialize + Validate;
}

/// Body returned by DELETE endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn for_resource(label: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", label),
        }
    }
}
