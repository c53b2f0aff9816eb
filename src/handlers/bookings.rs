// src/handlers/bookings.rs
// DOCUMENTATION: HTTP handlers for session bookings
// PURPOSE: List and append only; no update or delete is exposed

use crate::db::DataStore;
use crate::errors::GatewayError;
use crate::handlers::{not_found, validated, RequestBody};
use crate::models::{Booking, BookingPayload};
use crate::services::ResourceService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/bookings
pub async fn list_bookings(store: web::Data<dyn DataStore>) -> Result<impl Responder, GatewayError> {
    let bookings = ResourceService::list::<Booking>(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// POST /api/bookings
pub async fn create_booking(
    store: web::Data<dyn DataStore>,
    body: RequestBody<BookingPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;
    let service_type = payload.service_type.clone();

    let booking = ResourceService::create::<Booking>(store.get_ref(), payload).await?;
    log::info!("New booking for {}", service_type);
    Ok(HttpResponse::Created().json(booking))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bookings")
            .route(web::get().to(list_bookings))
            .route(web::post().to(create_booking))
            .default_service(web::to(not_found)),
    );
}
