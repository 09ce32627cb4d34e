//! Router configuration for the API.

use axum::{Json, Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `GET /api/bj_info` - broadcaster info
/// - `GET /health` - liveness
/// - `GET /api-docs/openapi.json` - OpenAPI document
///
/// Middleware runs outermost first: CORS, request id, logging. The query
/// budget is enforced by the station service so an overrun still answers JSON.
pub fn create_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", handlers::station::station_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .fallback(handlers::not_found)
        // last added runs first, so logging sees the request id
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
