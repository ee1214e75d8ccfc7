// src/models/appointment.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

// --- ENUMS ---

// Mapeia o CREATE TYPE appointment_status do banco.
// "Apagar" um agendamento é uma transição para Cancelled, nunca DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

// --- AGENDAMENTO (linha crua, sem joins) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub client_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,

    // Dia de start_time, desnormalizado para filtros por faixa de datas
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    // Sempre calculado no servidor: start_time + duração do serviço
    pub end_time: DateTime<Utc>,

    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- AGENDAMENTO COM JOINS (forma de resposta da API) ---

// A criação e a listagem devolvem o agendamento já desnormalizado com os
// dados do cliente, do profissional e do serviço, como o frontend consome.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AppointmentDetails {
    pub id: Uuid,
    pub company_id: Uuid,
    pub client_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,

    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub client_name: String,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,

    pub professional_name: String,
    pub professional_role: Option<String>,

    pub service_name: String,
    pub service_duration_minutes: i32,
    #[schema(value_type = Option<f64>)]
    pub service_price: Option<Decimal>,
}

// --- PAYLOADS ---

// Nenhum campo calculado é aceito aqui: end_time, date e status que
// venham no JSON são simplesmente ignorados pelo serde.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewAppointment {
    pub client_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,

    #[schema(example = "2024-01-10T09:00:00Z")]
    pub start_time: DateTime<Utc>,
    pub notes: Option<String>,
}

// Distingue "campo ausente" (externo None) de "null explícito" (Some(None)):
// ausente mantém o valor gravado, null limpa.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AppointmentChanges {
    pub client_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,

    // notes é o único campo anulável atualizável: `"notes": null` apaga.
    #[serde(default, deserialize_with = "explicit_null")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

// --- FILTROS DE LISTAGEM ---

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AppointmentFilters {
    pub professional_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
    // Faixa inclusiva sobre a coluna `date`
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

// --- DISPONIBILIDADE ---

#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityParams {
    pub professional_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

// Intervalo ocupado de um profissional em um dia. A API devolve só os
// intervalos; o cálculo de horários livres fica a cargo do chamador.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OccupiedSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Availability {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub occupied_slots: Vec<OccupiedSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializa_em_minusculas() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Pending).unwrap(),
            json!("pending")
        );
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Cancelled).unwrap(),
            json!("cancelled")
        );
    }

    #[test]
    fn status_desserializa_de_minusculas() {
        let status: AppointmentStatus = serde_json::from_value(json!("confirmed")).unwrap();
        assert_eq!(status, AppointmentStatus::Confirmed);

        assert!(serde_json::from_value::<AppointmentStatus>(json!("agendado")).is_err());
    }

    // end_time e status enviados pelo cliente não existem no payload de
    // criação: o serde os descarta e o servidor decide os dois.
    #[test]
    fn criacao_ignora_campos_calculados_do_corpo() {
        let body = json!({
            "client_id": "550e8400-e29b-41d4-a716-446655440000",
            "professional_id": "550e8400-e29b-41d4-a716-446655440001",
            "service_id": "550e8400-e29b-41d4-a716-446655440002",
            "start_time": "2024-01-10T09:00:00Z",
            "status": "completed",
            "end_time": "2024-01-10T23:59:00Z",
            "date": "2030-12-31"
        });

        let parsed: NewAppointment = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.start_time.to_rfc3339(), "2024-01-10T09:00:00+00:00");
    }

    // Três formas de notes na atualização: ausente (mantém), null explícito
    // (limpa) e valor novo (troca).
    #[test]
    fn atualizacao_distingue_notes_ausente_de_null() {
        let ausente: AppointmentChanges = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ausente.notes, None);

        let limpa: AppointmentChanges =
            serde_json::from_value(json!({ "notes": null })).unwrap();
        assert_eq!(limpa.notes, Some(None));

        let troca: AppointmentChanges =
            serde_json::from_value(json!({ "notes": "trazer documento" })).unwrap();
        assert_eq!(troca.notes, Some(Some("trazer documento".to_string())));
    }
}
