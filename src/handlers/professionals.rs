// src/handlers/professionals.rs

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
    models::professional::{NewProfessional, Professional, ProfessionalChanges},
};

// GET /companies/{company_id}/professionals
#[utoipa::path(
    get,
    path = "/companies/{company_id}/professionals",
    tag = "Professionals",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Profissionais da empresa, ordenados por nome", body = Vec<Professional>)
    )
)]
pub async fn list_professionals(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let professionals = app_state.professionals.list_by_company(company_id).await?;

    Ok((StatusCode::OK, Json(professionals)))
}

// POST /companies/{company_id}/professionals
// O company_id do caminho é carimbado na linha; qualquer empresa que
// viesse no corpo seria ignorada (o payload nem tem o campo).
#[utoipa::path(
    post,
    path = "/companies/{company_id}/professionals",
    tag = "Professionals",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    request_body = NewProfessional,
    responses(
        (status = 201, description = "Profissional criado", body = Professional),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_professional(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<NewProfessional>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let professional = app_state
        .professionals
        .create(company_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(professional)))
}

// GET /companies/{company_id}/professionals/{professional_id}
#[utoipa::path(
    get,
    path = "/companies/{company_id}/professionals/{professional_id}",
    tag = "Professionals",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("professional_id" = Uuid, Path, description = "ID do profissional")
    ),
    responses(
        (status = 200, description = "Profissional encontrado", body = Professional),
        (status = 404, description = "Profissional não encontrado nesta empresa")
    )
)]
pub async fn get_professional(
    State(app_state): State<AppState>,
    Path((company_id, professional_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let professional = app_state
        .professionals
        .find(company_id, professional_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profissional não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(professional)))
}

// PUT /companies/{company_id}/professionals/{professional_id}
#[utoipa::path(
    put,
    path = "/companies/{company_id}/professionals/{professional_id}",
    tag = "Professionals",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("professional_id" = Uuid, Path, description = "ID do profissional")
    ),
    request_body = ProfessionalChanges,
    responses(
        (status = 200, description = "Profissional atualizado", body = Professional),
        (status = 404, description = "Profissional não encontrado nesta empresa")
    )
)]
pub async fn update_professional(
    State(app_state): State<AppState>,
    Path((company_id, professional_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ProfessionalChanges>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let professional = app_state
        .professionals
        .update(company_id, professional_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Profissional não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(professional)))
}
