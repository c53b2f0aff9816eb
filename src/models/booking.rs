// src/models/booking.rs

use crate::db::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordId, Resource};

/// Session booking request; append-only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    /// Requested date as entered, e.g. "2024-06-01"
    pub date: String,
    /// Requested time as entered, e.g. "14:30"
    pub time: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 50))]
    pub phone: String,

    #[validate(length(min = 1))]
    pub service_type: String,

    #[validate(length(min = 1))]
    pub date: String,

    #[validate(length(min = 1))]
    pub time: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl Resource for Booking {
    const TABLE: Table = Table::Bookings;
    const LABEL: &'static str = "Booking";

    type Payload = BookingPayload;
}
