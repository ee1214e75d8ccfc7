// src/handlers/appointments.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::appointment::{
        Appointment, AppointmentChanges, AppointmentDetails, AppointmentFilters,
        Availability, AvailabilityParams, NewAppointment,
    },
};

// GET /companies/{company_id}/appointments
#[utoipa::path(
    get,
    path = "/companies/{company_id}/appointments",
    tag = "Appointments",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        AppointmentFilters
    ),
    responses(
        (status = 200, description = "Agendamentos da empresa, ordenados por (date, start_time)", body = Vec<AppointmentDetails>)
    )
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(filters): Query<AppointmentFilters>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = app_state
        .agenda_service
        .list_appointments(company_id, &filters)
        .await?;

    Ok((StatusCode::OK, Json(appointments)))
}

// POST /companies/{company_id}/appointments
#[utoipa::path(
    post,
    path = "/companies/{company_id}/appointments",
    tag = "Appointments",
    params(("company_id" = Uuid, Path, description = "ID da empresa")),
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Agendamento criado com status pending e hora_fim calculada", body = AppointmentDetails),
        (status = 400, description = "Profissional, serviço ou cliente de outra empresa")
    )
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<NewAppointment>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .agenda_service
        .create_appointment(&app_state.db_pool, company_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// PUT /companies/{company_id}/appointments/{appointment_id}
#[utoipa::path(
    put,
    path = "/companies/{company_id}/appointments/{appointment_id}",
    tag = "Appointments",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("appointment_id" = Uuid, Path, description = "ID do agendamento")
    ),
    request_body = AppointmentChanges,
    responses(
        (status = 200, description = "Agendamento atualizado", body = AppointmentDetails),
        (status = 400, description = "Profissional ou serviço de outra empresa"),
        (status = 404, description = "Agendamento não encontrado nesta empresa")
    )
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    Path((company_id, appointment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<AppointmentChanges>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .agenda_service
        .update_appointment(&app_state.db_pool, company_id, appointment_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /companies/{company_id}/appointments/{appointment_id}
// Não apaga nada: transiciona o status para cancelled.
#[utoipa::path(
    delete,
    path = "/companies/{company_id}/appointments/{appointment_id}",
    tag = "Appointments",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        ("appointment_id" = Uuid, Path, description = "ID do agendamento")
    ),
    responses(
        (status = 200, description = "Agendamento cancelado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado nesta empresa")
    )
)]
pub async fn cancel_appointment(
    State(app_state): State<AppState>,
    Path((company_id, appointment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .agenda_service
        .cancel_appointment(company_id, appointment_id)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

// GET /companies/{company_id}/availability?professional_id=&date=
#[utoipa::path(
    get,
    path = "/companies/{company_id}/availability",
    tag = "Appointments",
    params(
        ("company_id" = Uuid, Path, description = "ID da empresa"),
        AvailabilityParams
    ),
    responses(
        (status = 200, description = "Intervalos ocupados do profissional no dia", body = Availability),
        (status = 400, description = "professional_id ou date ausentes")
    )
)]
pub async fn get_availability(
    State(app_state): State<AppState>,
    Path(_company_id): Path<Uuid>,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    // Os dois parâmetros são obrigatórios; sem eles não há consulta.
    let professional_id = params.professional_id.ok_or_else(|| {
        AppError::MissingParameter("professional_id e date são obrigatórios".to_string())
    })?;
    let date = params.date.ok_or_else(|| {
        AppError::MissingParameter("professional_id e date são obrigatórios".to_string())
    })?;

    let availability = app_state
        .agenda_service
        .availability(professional_id, date)
        .await?;

    Ok((StatusCode::OK, Json(availability)))
}
