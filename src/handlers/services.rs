// src/handlers/services.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::service::{NewService, Service, ServiceChanges},
};

// O `validator` não cobre Decimal; o preço é checado à mão antes do banco.
fn ensure_non_negative_price(price: Option<Decimal>) -> Result<(), AppError> {
    match price {
        Some(p) if p < Decimal::ZERO => Err(AppError::InvalidInput(
            "O preço não pode ser negativo".to_string(),
        )),
        _ => Ok(()),
    }
}

// GET /companies/{company_id}/services
#[utoipa::path(
    get,
    path = "/companies/{company_id}/services",
    tag = "Services",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    responses(
        (status = 200, description = "Serviços da empresa, ordenados por nome", body = Vec<Service>)
    )
)]
pub async fn list_services(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state.services.list_by_company(company_id).await?;

    Ok((StatusCode::OK, Json(services)))
}

// POST /companies/{company_id}/services
#[utoipa::path(
    post,
    path = "/companies/{company_id}/services",
    tag = "Services",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    request_body = NewService,
    responses(
        (status = 201, description = "Serviço criado", body = Service),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<NewService>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    ensure_non_negative_price(payload.price)?;

    let service = app_state.services.create(company_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(service)))
}

// GET /companies/{company_id}/services/{service_id}
#[utoipa::path(
    get,
    path = "/companies/{company_id}/services/{service_id}",
    tag = "Services",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("service_id" = Uuid, Path, description = "ID do serviço")
    ),
    responses(
        (status = 200, description = "Serviço encontrado", body = Service),
        (status = 404, description = "Serviço não encontrado nesta empresa")
    )
)]
pub async fn get_service(
    State(app_state): State<AppState>,
    Path((company_id, service_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state
        .services
        .find(company_id, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Serviço não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(service)))
}

// PUT /companies/{company_id}/services/{service_id}
#[utoipa::path(
    put,
    path = "/companies/{company_id}/services/{service_id}",
    tag = "Services",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("service_id" = Uuid, Path, description = "ID do serviço")
    ),
    request_body = ServiceChanges,
    responses(
        (status = 200, description = "Serviço atualizado", body = Service),
        (status = 404, description = "Serviço não encontrado nesta empresa")
    )
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    Path((company_id, service_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ServiceChanges>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    ensure_non_negative_price(payload.price)?;

    let service = app_state
        .services
        .update(company_id, service_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Serviço não encontrado".to_string()))?;

    Ok((StatusCode::OK, Json(service)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preco_negativo_e_rejeitado() {
        assert!(ensure_non_negative_price(Some(Decimal::new(-100, 2))).is_err());
        assert!(ensure_non_negative_price(Some(Decimal::ZERO)).is_ok());
        assert!(ensure_non_negative_price(Some(Decimal::new(4500, 2))).is_ok());
        assert!(ensure_non_negative_price(None).is_ok());
    }
}
