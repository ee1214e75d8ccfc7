// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// A empresa é a raiz de propriedade: tudo abaixo dela pertence a exatamente
// uma empresa. Nunca é apagada fisicamente, só desativada via `active`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    // Nome fantasia: é por ele que as listagens ordenam.
    pub trade_name: String,
    pub document: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewCompany {
    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Barbearia Central LTDA")]
    pub name: String,

    #[validate(length(min = 1, message = "obrigatório"))]
    #[schema(example = "Barbearia Central")]
    pub trade_name: String,

    #[schema(example = "12.345.678/0001-90")]
    pub document: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// Atualização parcial: só o que vier preenchido é alterado.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompanyChanges {
    #[validate(length(min = 1, message = "obrigatório"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "obrigatório"))]
    pub trade_name: Option<String>,

    pub document: Option<String>,

    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}
