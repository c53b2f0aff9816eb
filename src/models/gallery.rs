// src/models/gallery.rs
// DOCUMENTATION: Gallery item data structures
// PURPOSE: Portfolio images shown on the gallery page

use crate::db::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordId, Resource};

/// Gallery row as stored in the `gallery` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: RecordId,
    pub image_url: String,
    pub title: String,
    /// Open set of labels, e.g. "Wedding", "Portraits"
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /api/gallery and PUT /api/gallery/{id}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GalleryItemPayload {
    #[validate(url)]
    pub image_url: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for GalleryItem {
    const TABLE: Table = Table::Gallery;
    const LABEL: &'static str = "Gallery item";

    type Payload = GalleryItemPayload;
}
