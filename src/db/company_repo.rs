// src/db/company_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::company::{Company, CompanyChanges, NewCompany},
};

// O repositório de empresas, responsável pelas interações com a tabela 'companies'
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Listagem ordenada pelo nome fantasia
    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        let companies =
            sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY trade_name")
                .fetch_all(&self.pool)
                .await?;

        Ok(companies)
    }

    pub async fn create(&self, new: &NewCompany) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, trade_name, document, email, phone, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.trade_name)
        .bind(&new.document)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(company)
    }

    // Atualização parcial via COALESCE: campos ausentes ficam como estão.
    pub async fn update(
        &self,
        id: Uuid,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET
                name       = COALESCE($2, name),
                trade_name = COALESCE($3, trade_name),
                document   = COALESCE($4, document),
                email      = COALESCE($5, email),
                phone      = COALESCE($6, phone),
                address    = COALESCE($7, address),
                active     = COALESCE($8, active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.trade_name)
        .bind(&changes.document)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(&changes.address)
        .bind(changes.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }
}
