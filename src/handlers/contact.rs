// src/handlers/contact.rs
// DOCUMENTATION: Contact form handler
// PURPOSE: Store submissions from the website's contact form

use crate::db::DataStore;
use crate::errors::GatewayError;
use crate::handlers::{not_found, validated, RequestBody};
use crate::models::{ContactPayload, ContactSubmission};
use crate::services::ResourceService;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/contact
pub async fn submit_contact(
    store: web::Data<dyn DataStore>,
    body: RequestBody<ContactPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;

    let submission =
        ResourceService::create::<ContactSubmission>(store.get_ref(), payload).await?;
    Ok(HttpResponse::Created().json(submission))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(submit_contact))
            .default_service(web::to(not_found)),
    );
}
