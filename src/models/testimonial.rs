// src/models/testimonial.rs

use crate::db::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordId, Resource};

/// Client testimonial
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create or replace a testimonial
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestimonialPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1))]
    pub comment: String,

    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,
}

impl Resource for Testimonial {
    const TABLE: Table = Table::Testimonials;
    const LABEL: &'static str = "Testimonial";

    type Payload = TestimonialPayload;
}
