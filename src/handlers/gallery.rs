// src/handlers/gallery.rs
// DOCUMENTATION: HTTP handlers for gallery items
// PURPOSE: Parse requests, call services, return responses

use crate::db::DataStore;
use crate::errors::GatewayError;
use crate::handlers::{not_found, validated, RequestBody};
use crate::models::{GalleryItem, GalleryItemPayload};
use crate::services::ResourceService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/gallery
pub async fn list_gallery(store: web::Data<dyn DataStore>) -> Result<impl Responder, GatewayError> {
    let items = ResourceService::list::<GalleryItem>(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/gallery
pub async fn create_gallery_item(
    store: web::Data<dyn DataStore>,
    body: RequestBody<GalleryItemPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;

    let item = ResourceService::create::<GalleryItem>(store.get_ref(), payload).await?;
    Ok(HttpResponse::Created().json(item))
}

/// PUT /api/gallery/{id}
pub async fn update_gallery_item(
    store: web::Data<dyn DataStore>,
    path: web::Path<String>,
    body: RequestBody<GalleryItemPayload>,
) -> Result<impl Responder, GatewayError> {
    let payload = validated(body)?;

    let item =
        ResourceService::update::<GalleryItem>(store.get_ref(), &path.into_inner(), payload)
            .await?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /api/gallery/{id}
pub async fn delete_gallery_item(
    store: web::Data<dyn DataStore>,
    path: web::Path<String>,
) -> Result<impl Responder, GatewayError> {
    let deleted = ResourceService::delete::<GalleryItem>(store.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(deleted))
}

/// Configuration for gallery routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gallery")
            .service(
                web::resource("")
                    .route(web::get().to(list_gallery))
                    .route(web::post().to(create_gallery_item))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_gallery_item))
                    .route(web::delete().to(delete_gallery_item))
                    .default_service(web::to(not_found)),
            ),
    );
}
