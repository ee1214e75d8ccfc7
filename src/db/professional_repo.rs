// src/db/professional_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::professional::{NewProfessional, Professional, ProfessionalChanges},
};

#[derive(Clone)]
pub struct ProfessionalRepository {
    pool: PgPool,
}

impl ProfessionalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Professional>, AppError> {
        let professionals = sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals WHERE company_id = $1 ORDER BY name",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(professionals)
    }

    // O company_id é sempre o do caminho da URL, nunca o do corpo.
    pub async fn create(
        &self,
        company_id: Uuid,
        new: &NewProfessional,
    ) -> Result<Professional, AppError> {
        let professional = sqlx::query_as::<_, Professional>(
            r#"
            INSERT INTO professionals (company_id, name, role, email, phone, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&new.name)
        .bind(&new.role)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(new.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(professional)
    }

    // Escopado pelos dois ids: um id de outra empresa não retorna nada.
    pub async fn find(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Professional>, AppError> {
        let professional = sqlx::query_as::<_, Professional>(
            "SELECT * FROM professionals WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(professional)
    }

    // A empresa dona nunca muda: company_id fica de fora do SET.
    pub async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        changes: &ProfessionalChanges,
    ) -> Result<Option<Professional>, AppError> {
        let professional = sqlx::query_as::<_, Professional>(
            r#"
            UPDATE professionals SET
                name       = COALESCE($3, name),
                role       = COALESCE($4, role),
                email      = COALESCE($5, email),
                phone      = COALESCE($6, phone),
                active     = COALESCE($7, active),
                updated_at = now()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&changes.name)
        .bind(&changes.role)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(changes.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(professional)
    }

    // Resolução de posse usada na validação de agendamentos.
    // Genérico sobre Executor para poder rodar dentro de uma transação.
    pub async fn company_of<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, (Uuid,)>("SELECT company_id FROM professionals WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(row.map(|r| r.0))
    }
}
