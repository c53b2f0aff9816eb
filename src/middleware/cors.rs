// src/middleware/cors.rs
// DOCUMENTATION: Cross-origin admission control
// PURPOSE: Allow-list gate evaluated once per request, before routing

use crate::config::Config;
use crate::errors::GatewayError;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::http::Method;
use actix_web::middleware::Next;
use actix_web::{web, Error, HttpResponse, ResponseError};
use std::net::IpAddr;

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Static origin allow-list
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
    production: bool,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<String>, production: bool) -> Self {
        Self {
            allowed,
            production,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allowed_origins.clone(), config.is_production())
    }

    /// Decide whether a request with this `Origin` may proceed
    /// DOCUMENTATION: No origin means a non-browser client and is always admitted.
    /// Outside production, loopback origins are admitted even when unlisted.
    pub fn admits(&self, origin: Option<&str>) -> bool {
        let Some(origin) = origin else {
            return true;
        };

        if self.allowed.iter().any(|a| a == "*" || a == origin) {
            return true;
        }

        !self.production && is_loopback_origin(origin)
    }
}

/// `localhost`, `*.localhost` or a loopback IP, on any scheme and port
fn is_loopback_origin(origin: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(origin) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };

    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }

    host.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
}

fn is_preflight(req: &ServiceRequest) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
}

/// Origin gate middleware, registered on the whole App
/// DOCUMENTATION: Rejected origins get 403 without reaching any handler.
/// Admitted browser requests get CORS headers; preflights are answered here.
pub async fn admission<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let Some(origin) = req.headers().get(header::ORIGIN).cloned() else {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    };

    let admitted = match (origin.to_str(), req.app_data::<web::Data<OriginPolicy>>()) {
        (Ok(value), Some(policy)) => policy.admits(Some(value)),
        _ => false,
    };

    if !admitted {
        log::warn!("Rejected request from origin {:?}", origin);
        let response = GatewayError::OriginNotAllowed.error_response();
        return Ok(req.into_response(response).map_into_right_body());
    }

    if is_preflight(&req) {
        let mut builder = HttpResponse::NoContent();
        builder.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS));
        if let Some(requested) = req.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()));
        }

        let mut response = req.into_response(builder.finish());
        apply_cors_headers(response.headers_mut(), origin);
        return Ok(response.map_into_right_body());
    }

    let mut response = next.call(req).await?;
    apply_cors_headers(response.headers_mut(), origin);
    Ok(response.map_into_left_body())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(production: bool) -> OriginPolicy {
        OriginPolicy::new(vec!["https://studio.example.com".into()], production)
    }

    #[test]
    fn test_absent_origin_is_admitted() {
        assert!(policy(true).admits(None));
    }

    #[test]
    fn test_listed_origin_is_admitted() {
        assert!(policy(true).admits(Some("https://studio.example.com")));
        assert!(!policy(true).admits(Some("https://studio.example.com.evil.io")));
    }

    #[test]
    fn test_wildcard_admits_everything() {
        let any = OriginPolicy::new(vec!["*".into()], true);
        assert!(any.admits(Some("https://anything.example")));
    }

    #[test]
    fn test_loopback_only_outside_production() {
        for origin in [
            "http://localhost:5173",
            "http://127.0.0.1:3000",
            "http://[::1]:8080",
            "http://app.localhost",
        ] {
            assert!(policy(false).admits(Some(origin)), "{} in development", origin);
            assert!(!policy(true).admits(Some(origin)), "{} in production", origin);
        }
    }

    #[test]
    fn test_lookalike_hosts_are_not_loopback() {
        assert!(!is_loopback_origin("http://localhost.evil.io"));
        assert!(!is_loopback_origin("http://mylocalhost.com"));
        assert!(!is_loopback_origin("not an origin"));
        assert!(!policy(false).admits(Some("https://other.example.com")));
    }
}
