// src/handlers/companies.rs

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
    models::company::{Company, CompanyChanges, NewCompany},
};

// GET /companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "Lista de empresas, ordenada pelo nome fantasia", body = Vec<Company>)
    )
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state.companies.list().await?;

    Ok((StatusCode::OK, Json(companies)))
}

// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    tag = "Companies",
    request_body = NewCompany,
    responses(
        (status = 201, description = "Empresa criada", body = Company),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    Json(payload): Json<NewCompany>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company = app_state.companies.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(company)))
}

// GET /companies/{company_id}
#[utoipa::path(
    get,
    path = "/companies/{company_id}",
    tag = "Companies",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Empresa encontrada", body = Company),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state
        .companies
        .find(company_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Empresa não encontrada".to_string()))?;

    Ok((StatusCode::OK, Json(company)))
}

// PUT /companies/{company_id}
#[utoipa::path(
    put,
    path = "/companies/{company_id}",
    tag = "Companies",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    request_body = CompanyChanges,
    responses(
        (status = 200, description = "Empresa atualizada", body = Company),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<CompanyChanges>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company = app_state
        .companies
        .update(company_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Empresa não encontrada".to_string()))?;

    Ok((StatusCode::OK, Json(company)))
}
