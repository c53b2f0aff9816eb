// src/models/contact.rs

use crate::db::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordId, Resource};

/// Message sent through the contact form; append-only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl Resource for ContactSubmission {
    const TABLE: Table = Table::ContactSubmissions;
    const LABEL: &'static str = "Contact submission";

    type Payload = ContactPayload;
}
