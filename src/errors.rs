// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::db::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to one HTTP status code. The response body is
/// always `{"error": "<message>"}` where the message is the Display output.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Store rejected the query or could not be reached; message kept verbatim
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Update matched no row; holds the resource label
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Body could not be parsed as the expected JSON payload
    #[error("{0}")]
    InvalidInput(String),

    /// Payload parsed but failed field validation
    #[error("{0}")]
    ValidationError(String),

    #[error("Not allowed by CORS")]
    OriginNotAllowed,

    #[error("Too many requests, please try again later.")]
    RateLimitExceeded,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    InternalError,
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GatewayError::OriginNotAllowed => StatusCode::FORBIDDEN,
            GatewayError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::RouteNotFound => StatusCode::NOT_FOUND,
            GatewayError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
