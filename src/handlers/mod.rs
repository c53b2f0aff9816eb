// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Route table for the whole API

pub mod bookings;
pub mod contact;
pub mod gallery;
pub mod health;
pub mod testimonials;

use crate::errors::GatewayError;
use crate::middleware::rate_limit;
use actix_web::middleware::from_fn;
use actix_web::{web, Either, HttpResponse};
use validator::Validate;

pub use bookings::config as bookings_config;
pub use contact::config as contact_config;
pub use gallery::config as gallery_config;
pub use health::config as health_config;
pub use testimonials::config as testimonials_config;

/// Fallback for unmatched (method, path) pairs
pub async fn not_found() -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::RouteNotFound)
}

/// Create/update body: JSON, or a urlencoded HTML form post
pub type RequestBody<P> = Either<web::Json<P>, web::Form<P>>;

/// Unwrap a request body and apply the payload's field rules
pub fn validated<P: Validate>(body: RequestBody<P>) -> Result<P, GatewayError> {
    let payload = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    payload
        .validate()
        .map_err(|e| GatewayError::ValidationError(e.to_string()))?;
    Ok(payload)
}

/// Unparsable or mistyped JSON bodies become 400 with the standard error body
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| GatewayError::InvalidInput(err.to_string()).into())
}

/// Same treatment for urlencoded form bodies
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| GatewayError::InvalidInput(err.to_string()).into())
}

/// Register every route: /health unthrottled, resources under a rate-limited /api
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        .configure(health_config)
        .service(
            web::scope("/api")
                .wrap(from_fn(rate_limit))
                .configure(gallery_config)
                .configure(testimonials_config)
                .configure(bookings_config)
                .configure(contact_config),
        )
        .default_service(web::to(not_found));
}

#[cfg(test)]
mod tests {
    use crate::db::InMemoryStore;
    use crate::middleware::{ClientRateLimiter, OriginPolicy};
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_health() {
        let app = init_test_app!(Arc::new(InMemoryStore::new()));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_404() {
        let app = init_test_app!(Arc::new(InMemoryStore::new()));

        for (method, uri) in [("GET", "/nope"), ("GET", "/api/nope"), ("PATCH", "/api/gallery")] {
            let req = test::TestRequest::default()
                .method(method.parse().unwrap())
                .uri(uri)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Route not found" }));
        }
    }

    #[actix_web::test]
    async fn test_unlisted_origin_rejected_in_production() {
        let store = Arc::new(InMemoryStore::new());
        let app = init_test_app!(store.clone());

        let req = test::TestRequest::get()
            .uri("/api/gallery")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Not allowed by CORS" }));
        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn test_loopback_origin_admitted_in_development() {
        let app = init_test_app!(
            Arc::new(InMemoryStore::new()),
            OriginPolicy::new(vec!["https://studio.example.com".into()], false),
            ClientRateLimiter::new(100, Duration::from_secs(900))
        );

        let req = test::TestRequest::get()
            .uri("/api/gallery")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_preflight_is_answered_before_routing() {
        let store = Arc::new(InMemoryStore::new());
        let app = init_test_app!(store.clone());

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/contact")
            .insert_header((header::ORIGIN, "https://studio.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type"
        );
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn test_rate_limit_applies_to_api_only() {
        let app = init_test_app!(
            Arc::new(InMemoryStore::new()),
            OriginPolicy::new(vec!["*".into()], true),
            ClientRateLimiter::new(2, Duration::from_secs(900))
        );
        let client = "203.0.113.7:5000".parse().unwrap();

        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri("/api/bookings")
                .peer_addr(client)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/api/bookings")
            .peer_addr(client)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Too many requests, please try again later." }));

        let req = test::TestRequest::get()
            .uri("/health")
            .peer_addr(client)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let other = "203.0.113.8:5000".parse().unwrap();
        let req = test::TestRequest::get()
            .uri("/api/bookings")
            .peer_addr(other)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
