// src/handlers/clients.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{Client, ClientChanges, NewClient},
};

// GET /companies/{company_id}/clients
#[utoipa::path(
    get,
    path = "/companies/{company_id}/clients",
    tag = "Clients",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Clientes da empresa, ordenados por nome", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.clients.list_by_company(company_id).await?;

    Ok((StatusCode::OK, Json(clients)))
}

// POST /companies/{company_id}/clients
#[utoipa::path(
    post,
    path = "/companies/{company_id}/clients",
    tag = "Clients",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    request_body = NewClient,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<NewClient>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state.clients.create(company_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /companies/{company_id}/clients/{client_id}
#[utoipa::path(
    get,
    path = "/companies/{company_id}/clients/{client_id}",
    tag = "Clients",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("client_id" = Uuid, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Cliente encontrado", body = Client),
        (status = 404, description = "Cliente não encontrado nesta empresa")
    )
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    Path((company_id, client_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state
        .clients
        .find(company_id, client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(client)))
}

// PUT /companies/{company_id}/clients/{client_id}
#[utoipa::path(
    put,
    path = "/companies/{company_id}/clients/{client_id}",
    tag = "Clients",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("client_id" = Uuid, Path, description = "ID do cliente")
    ),
    request_body = ClientChanges,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 404, description = "Cliente não encontrado nesta empresa")
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    Path((company_id, client_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ClientChanges>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .clients
        .update(company_id, client_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(client)))
}
