// src/handlers/testimonials.rs
// DOCUMENTATION: HTTP handlers for testimonials
// PURPOSE: Same surface as the gallery

use crate::db::DataStore;
use crate::errors::GatewayError;
use crate::handlers::{not_found, validated, RequestBody};
use crate::models::{Testimonial, TestimonialPayload};
use crate::services::ResourceService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/testimonials
pub async fn list_testimonials(
    store: web::Data<dyn DataStore>,
) -> Result<impl Responder, GatewayError> {
    let testimonials = ResourceService::list::<Testimonial>(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

/// POST /api/testimonials
pub async fn create_testimonial(
    store: web::Data<dyn DataStore>,
    body: RequestBody<TestimonialPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;

    let testimonial =
        ResourceService::create::<Testimonial>(store.get_ref(), payload).await?;
    Ok(HttpResponse::Created().json(testimonial))
}

/// PUT /api/testimonials/{id}
pub async fn update_testimonial(
    store: web::Data<dyn DataStore>,
    path: web::Path<String>,
    body: RequestBody<TestimonialPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;

    let testimonial =
        ResourceService::update::<Testimonial>(store.get_ref(), &path.into_inner(), payload)
            .await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete_testimonial(
    store: web::Data<dyn DataStore>,
    path: web::Path<String>,
) -> Result<impl Responder, GatewayError> {
    let deleted = ResourceService::delete::<Testimonial>(store.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(deleted))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/testimonials")
            .service(
                web::resource("")
                    .route(web::get().to(list_testimonials))
                    .route(web::post().to(create_testimonial))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_testimonial))
                    .route(web::delete().to(delete_testimonial))
                    .default_service(web::to(not_found)),
            ),
    );
}
