// src/routes.rs

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, put},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::cors::cors_layer};

// Rota não mapeada: mesmo formato de erro do resto da API.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint não encontrado" })),
    )
}

// Todas as rotas ficam sob /companies; a empresa do caminho é a fronteira
// de tenancy de tudo que vem abaixo dela.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/companies",
            get(handlers::companies::list_companies).post(handlers::companies::create_company),
        )
        .route(
            "/companies/{company_id}",
            get(handlers::companies::get_company).put(handlers::companies::update_company),
        )
        .route(
            "/companies/{company_id}/professionals",
            get(handlers::professionals::list_professionals)
                .post(handlers::professionals::create_professional),
        )
        .route(
            "/companies/{company_id}/professionals/{professional_id}",
            get(handlers::professionals::get_professional)
                .put(handlers::professionals::update_professional),
        )
        .route(
            "/companies/{company_id}/services",
            get(handlers::services::list_services).post(handlers::services::create_service),
        )
        .route(
            "/companies/{company_id}/services/{service_id}",
            get(handlers::services::get_service).put(handlers::services::update_service),
        )
        .route(
            "/companies/{company_id}/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/companies/{company_id}/clients/{client_id}",
            get(handlers::clients::get_client).put(handlers::clients::update_client),
        )
        .route(
            "/companies/{company_id}/appointments",
            get(handlers::appointments::list_appointments)
                .post(handlers::appointments::create_appointment),
        )
        .route(
            "/companies/{company_id}/appointments/{appointment_id}",
            put(handlers::appointments::update_appointment)
                .delete(handlers::appointments::cancel_appointment),
        )
        .route(
            "/companies/{company_id}/availability",
            get(handlers::appointments::get_availability),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
