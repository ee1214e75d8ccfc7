// src/middleware/cors.rs

use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

// Política única para toda a API: qualquer origem, cabeçalhos fixos.
// O preflight (OPTIONS) é respondido pela própria camada.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
        ])
}
