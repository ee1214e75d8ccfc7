// src/db/service_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::service::{NewService, Service, ServiceChanges},
};

#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE company_id = $1 ORDER BY name",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    pub async fn create(&self, company_id: Uuid, new: &NewService) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (company_id, name, description, duration_minutes, price, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.duration_minutes)
        .bind(new.price)
        .bind(new.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn find(&self, company_id: Uuid, id: Uuid) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        changes: &ServiceChanges,
    ) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services SET
                name             = COALESCE($3, name),
                description      = COALESCE($4, description),
                duration_minutes = COALESCE($5, duration_minutes),
                price            = COALESCE($6, price),
                active           = COALESCE($7, active),
                updated_at       = now()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.duration_minutes)
        .bind(changes.price)
        .bind(changes.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    // Duração e empresa dona, em uma leitura só: é tudo que a criação de
    // agendamento precisa saber sobre o serviço.
    pub async fn duration_and_company<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<(i32, Uuid)>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, (i32, Uuid)>(
            "SELECT duration_minutes, company_id FROM services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row)
    }
}
