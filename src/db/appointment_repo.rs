// src/db/appointment_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::appointment::{
        Appointment, AppointmentChanges, AppointmentDetails, AppointmentFilters,
        AppointmentStatus, NewAppointment, OccupiedSlot,
    },
};

// Projeção desnormalizada que a API devolve na criação, atualização e
// listagem: o agendamento com os dados de cliente, profissional e serviço.
const DETAILS_SELECT: &str = r#"
    SELECT
        a.id, a.company_id, a.client_id, a.professional_id, a.service_id,
        a.date, a.start_time, a.end_time, a.status, a.notes,
        a.created_at, a.updated_at,
        c.name AS client_name, c.phone AS client_phone, c.email AS client_email,
        p.name AS professional_name, p.role AS professional_role,
        s.name AS service_name,
        s.duration_minutes AS service_duration_minutes,
        s.price AS service_price
    FROM appointments a
    JOIN clients c       ON c.id = a.client_id
    JOIN professionals p ON p.id = a.professional_id
    JOIN services s      ON s.id = a.service_id
"#;

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Insere a linha já com os campos calculados pelo serviço de agenda.
    // O status é sempre Pending aqui, independente do que veio na requisição.
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        company_id: Uuid,
        new: &NewAppointment,
        end_time: DateTime<Utc>,
        date: NaiveDate,
    ) -> Result<Uuid, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (id,) = sqlx::query_as::<_, (Uuid,)>(
            r#"
            INSERT INTO appointments
                (company_id, client_id, professional_id, service_id,
                 date, start_time, end_time, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(company_id)
        .bind(new.client_id)
        .bind(new.professional_id)
        .bind(new.service_id)
        .bind(date)
        .bind(new.start_time)
        .bind(end_time)
        .bind(AppointmentStatus::Pending)
        .bind(&new.notes)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn find_details<'e, E>(
        &self,
        executor: E,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<AppointmentDetails>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{DETAILS_SELECT} WHERE a.id = $1 AND a.company_id = $2");
        let details = sqlx::query_as::<_, AppointmentDetails>(&sql)
            .bind(id)
            .bind(company_id)
            .fetch_optional(executor)
            .await?;

        Ok(details)
    }

    // start_time e service_id atuais, para o recálculo de hora_fim quando a
    // atualização só muda um dos dois.
    pub async fn current_schedule<'e, E>(
        &self,
        executor: E,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<(DateTime<Utc>, Uuid)>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, (DateTime<Utc>, Uuid)>(
            "SELECT start_time, service_id FROM appointments WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(executor)
        .await?;

        Ok(row)
    }

    // Atualização parcial. end_time/date só vêm preenchidos quando o serviço
    // de agenda recalculou a janela; o filtro pelos dois ids garante que um
    // agendamento de outra empresa nunca é alterado. notes não usa COALESCE
    // porque "null explícito" precisa limpar o campo, não mantê-lo.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        company_id: Uuid,
        id: Uuid,
        changes: &AppointmentChanges,
        end_time: Option<DateTime<Utc>>,
        date: Option<NaiveDate>,
    ) -> Result<Option<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, (Uuid,)>(
            r#"
            UPDATE appointments SET
                client_id       = COALESCE($3, client_id),
                professional_id = COALESCE($4, professional_id),
                service_id      = COALESCE($5, service_id),
                start_time      = COALESCE($6, start_time),
                end_time        = COALESCE($7, end_time),
                date            = COALESCE($8, date),
                status          = COALESCE($9, status),
                notes           = CASE WHEN $10 THEN $11::text ELSE notes END,
                updated_at      = now()
            WHERE id = $1 AND company_id = $2
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(changes.client_id)
        .bind(changes.professional_id)
        .bind(changes.service_id)
        .bind(changes.start_time)
        .bind(end_time)
        .bind(date)
        .bind(changes.status)
        .bind(changes.notes.is_some())
        .bind(changes.notes.clone().flatten())
        .fetch_optional(executor)
        .await?;

        Ok(row.map(|r| r.0))
    }

    // "Deletar" é transicionar para cancelled. Idempotente: cancelar duas
    // vezes só reescreve o mesmo status.
    pub async fn cancel(&self, company_id: Uuid, id: Uuid) -> Result<Option<Appointment>, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments SET status = 'cancelled', updated_at = now()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }

    // Filtros opcionais resolvidos no próprio SQL: parâmetro nulo desliga a
    // condição. Ordenação fixa por (date, start_time) ascendente.
    pub async fn list(
        &self,
        company_id: Uuid,
        filters: &AppointmentFilters,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        let sql = format!(
            r#"{DETAILS_SELECT}
            WHERE a.company_id = $1
              AND ($2::uuid IS NULL OR a.professional_id = $2)
              AND ($3::appointment_status IS NULL OR a.status = $3)
              AND ($4::date IS NULL OR a.date >= $4)
              AND ($5::date IS NULL OR a.date <= $5)
            ORDER BY a.date, a.start_time
            "#
        );

        let appointments = sqlx::query_as::<_, AppointmentDetails>(&sql)
            .bind(company_id)
            .bind(filters.professional_id)
            .bind(filters.status)
            .bind(filters.date_from)
            .bind(filters.date_to)
            .fetch_all(&self.pool)
            .await?;

        Ok(appointments)
    }

    // Intervalos ocupados de um profissional em um dia: tudo que não foi
    // cancelado nem concluído conta como ocupado.
    pub async fn occupied_slots(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<OccupiedSlot>, AppError> {
        let slots = sqlx::query_as::<_, OccupiedSlot>(
            r#"
            SELECT start_time, end_time
            FROM appointments
            WHERE professional_id = $1
              AND date = $2
              AND status NOT IN ('cancelled', 'completed')
            ORDER BY start_time
            "#,
        )
        .bind(professional_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }
}
