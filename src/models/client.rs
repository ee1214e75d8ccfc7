// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewClient {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Maria da Silva")]
    pub name: String,

    pub phone: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientChanges {
    #[validate(length(min = 1, message = "obrigatório"))]
    pub name: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub notes: Option<String>,
}
