// src/models/service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Serviço oferecido por uma empresa. A duração em minutos é o que
// determina o hora_fim de cada agendamento.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    // NUMERIC(10,2) no banco
    #[schema(value_type = Option<f64>, example = 45.0)]
    pub price: Option<Decimal>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewService {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Corte masculino")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "a duração deve ser positiva"))]
    #[schema(example = 30)]
    pub duration_minutes: i32,

    #[schema(value_type = Option<f64>, example = 45.0)]
    pub price: Option<Decimal>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ServiceChanges {
    #[validate(length(min = 1, message = "obrigatório"))]
    pub name: Option<String>,
    pub description: Option<String>,

    #[validate(range(min = 1, message = "a duração deve ser positiva"))]
    pub duration_minutes: Option<i32>,

    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub active: Option<bool>,
}
