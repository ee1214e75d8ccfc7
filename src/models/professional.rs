// src/models/professional.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Professional {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    // Função exibida na agenda (ex: "Barbeiro", "Manicure")
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O company_id nunca vem do corpo: é sempre o da URL.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewProfessional {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "João Pereira")]
    pub name: String,

    #[schema(example = "Barbeiro")]
    pub role: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProfessionalChanges {
    #[validate(length(min = 1, message = "obrigatório"))]
    pub name: Option<String>,
    pub role: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}
