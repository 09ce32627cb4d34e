//! HTTP request handlers for API endpoints.

pub mod health;
pub mod station;

use axum::{Json, extract::Request, http::StatusCode};

use crate::api::dto::ErrorResponse;
use crate::api::middleware::RequestId;

/// JSON 404 for unknown routes
pub async fn not_found(request: Request) -> (StatusCode, Json<ErrorResponse>) {
    let mut body = ErrorResponse::new(
        "NOT_FOUND",
        &format!("No route for {}", request.uri().path()),
    );
    if let Some(RequestId(id)) = request.extensions().get::<RequestId>() {
        body = body.with_request_id(id);
    }
    (StatusCode::NOT_FOUND, Json(body))
}
