// src/services/agenda_service.rs

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, ClientRepository, ProfessionalRepository, ServiceRepository},
    models::appointment::{
        Appointment, AppointmentChanges, AppointmentDetails, AppointmentFilters, Availability,
        NewAppointment,
    },
};

// hora_fim nunca vem do cliente: é sempre início + duração do serviço,
// em granularidade de minutos, sem conversão de fuso.
fn compute_end_time(start_time: DateTime<Utc>, duration_minutes: i32) -> DateTime<Utc> {
    start_time + Duration::minutes(i64::from(duration_minutes))
}

// A coluna `date` é o dia calendário do início, desnormalizada para as
// consultas por faixa.
fn appointment_date(start_time: DateTime<Utc>) -> NaiveDate {
    start_time.date_naive()
}

// Mescla o corpo parcial da atualização com os valores já gravados: o que
// não veio na requisição continua valendo o que está no banco.
fn effective_schedule(
    new_start: Option<DateTime<Utc>>,
    new_service: Option<Uuid>,
    current_start: DateTime<Utc>,
    current_service: Uuid,
) -> (DateTime<Utc>, Uuid) {
    (
        new_start.unwrap_or(current_start),
        new_service.unwrap_or(current_service),
    )
}

// O núcleo da agenda: valida posse entre empresas, calcula a janela de
// horário e conversa com o banco. Criação e atualização rodam dentro de
// uma transação para que as leituras de validação e a escrita enxerguem
// o mesmo estado.
#[derive(Clone)]
pub struct AgendaService {
    appointments: AppointmentRepository,
    professionals: ProfessionalRepository,
    services: ServiceRepository,
    clients: ClientRepository,
}

impl AgendaService {
    pub fn new(
        appointments: AppointmentRepository,
        professionals: ProfessionalRepository,
        services: ServiceRepository,
        clients: ClientRepository,
    ) -> Self {
        Self {
            appointments,
            professionals,
            services,
            clients,
        }
    }

    // Ordem de validação: profissional, serviço, cliente. A primeira
    // referência de outra empresa (ou inexistente) aborta tudo antes de
    // qualquer escrita.
    //
    // Observação: não há verificação de sobreposição de horários. Dois
    // agendamentos do mesmo profissional podem se cruzar; quem decide se
    // isso é aceitável é o chamador.
    pub async fn create_appointment(
        &self,
        pool: &PgPool,
        company_id: Uuid,
        new: &NewAppointment,
    ) -> Result<AppointmentDetails, AppError> {
        let mut tx = pool.begin().await?;

        let professional_company = self
            .professionals
            .company_of(&mut *tx, new.professional_id)
            .await?;
        if professional_company != Some(company_id) {
            return Err(AppError::TenancyViolation(
                "Profissional não pertence a esta empresa".to_string(),
            ));
        }

        let (duration_minutes, service_company) = self
            .services
            .duration_and_company(&mut *tx, new.service_id)
            .await?
            .ok_or_else(|| {
                AppError::TenancyViolation("Serviço não pertence a esta empresa".to_string())
            })?;
        if service_company != company_id {
            return Err(AppError::TenancyViolation(
                "Serviço não pertence a esta empresa".to_string(),
            ));
        }

        let client_company = self.clients.company_of(&mut *tx, new.client_id).await?;
        if client_company != Some(company_id) {
            return Err(AppError::TenancyViolation(
                "Cliente não pertence a esta empresa".to_string(),
            ));
        }

        let end_time = compute_end_time(new.start_time, duration_minutes);
        let date = appointment_date(new.start_time);

        let id = self
            .appointments
            .insert(&mut *tx, company_id, new, end_time, date)
            .await?;
        let details = self
            .appointments
            .find_details(&mut *tx, company_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        tx.commit().await?;
        Ok(details)
    }

    // Atualização parcial. Se profissional ou serviço mudarem, a posse é
    // revalidada como na criação; se hora ou serviço mudarem, hora_fim e
    // date são recalculados sobre os valores efetivos (corpo + banco).
    pub async fn update_appointment(
        &self,
        pool: &PgPool,
        company_id: Uuid,
        appointment_id: Uuid,
        changes: &AppointmentChanges,
    ) -> Result<AppointmentDetails, AppError> {
        let mut tx = pool.begin().await?;

        if let Some(professional_id) = changes.professional_id {
            let owner = self
                .professionals
                .company_of(&mut *tx, professional_id)
                .await?;
            if owner != Some(company_id) {
                return Err(AppError::TenancyViolation(
                    "Profissional não pertence a esta empresa".to_string(),
                ));
            }
        }

        if let Some(service_id) = changes.service_id {
            let owner = self
                .services
                .duration_and_company(&mut *tx, service_id)
                .await?
                .map(|(_, company)| company);
            if owner != Some(company_id) {
                return Err(AppError::TenancyViolation(
                    "Serviço não pertence a esta empresa".to_string(),
                ));
            }
        }

        let mut end_time = None;
        let mut date = None;
        if changes.start_time.is_some() || changes.service_id.is_some() {
            let (current_start, current_service) = self
                .appointments
                .current_schedule(&mut *tx, company_id, appointment_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

            let (start, service_id) = effective_schedule(
                changes.start_time,
                changes.service_id,
                current_start,
                current_service,
            );

            if let Some((duration_minutes, _)) =
                self.services.duration_and_company(&mut *tx, service_id).await?
            {
                end_time = Some(compute_end_time(start, duration_minutes));
                date = Some(appointment_date(start));
            }
        }

        let updated_id = self
            .appointments
            .update(&mut *tx, company_id, appointment_id, changes, end_time, date)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;
        let details = self
            .appointments
            .find_details(&mut *tx, company_id, updated_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        tx.commit().await?;
        Ok(details)
    }

    pub async fn cancel_appointment(
        &self,
        company_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, AppError> {
        self.appointments
            .cancel(company_id, appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))
    }

    pub async fn list_appointments(
        &self,
        company_id: Uuid,
        filters: &AppointmentFilters,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        self.appointments.list(company_id, filters).await
    }

    pub async fn availability(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Availability, AppError> {
        let occupied_slots = self
            .appointments
            .occupied_slots(professional_id, date)
            .await?;

        Ok(Availability {
            professional_id,
            date,
            occupied_slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn hora_fim_soma_a_duracao_do_servico() {
        let start = ts("2024-01-10T09:00:00Z");
        assert_eq!(compute_end_time(start, 60), ts("2024-01-10T10:00:00Z"));
        assert_eq!(compute_end_time(start, 45), ts("2024-01-10T09:45:00Z"));
    }

    #[test]
    fn date_e_o_dia_calendario_do_inicio() {
        assert_eq!(
            appointment_date(ts("2024-01-10T09:00:00Z")),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    // Serviço longo atravessando a meia-noite: hora_fim cai no dia seguinte,
    // mas `date` continua sendo o dia do início.
    #[test]
    fn janela_pode_atravessar_a_meia_noite() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 23, 30, 0).unwrap();
        let end = compute_end_time(start, 45);

        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 11, 0, 15, 0).unwrap());
        assert_eq!(
            appointment_date(start),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn atualizacao_sem_novo_inicio_usa_o_inicio_gravado() {
        let current_start = ts("2024-01-10T09:00:00Z");
        let current_service = Uuid::new_v4();
        let new_service = Uuid::new_v4();

        // Só o serviço mudou: o início efetivo é o que está no banco e o
        // serviço efetivo é o novo.
        let (start, service) =
            effective_schedule(None, Some(new_service), current_start, current_service);
        assert_eq!(start, current_start);
        assert_eq!(service, new_service);

        // O recálculo usa o início antigo com a duração nova.
        assert_eq!(compute_end_time(start, 90), ts("2024-01-10T10:30:00Z"));
    }

    #[test]
    fn atualizacao_sem_novo_servico_usa_o_servico_gravado() {
        let current_start = ts("2024-01-10T09:00:00Z");
        let new_start = ts("2024-01-12T14:00:00Z");
        let current_service = Uuid::new_v4();

        let (start, service) =
            effective_schedule(Some(new_start), None, current_start, current_service);
        assert_eq!(start, new_start);
        assert_eq!(service, current_service);
        assert_eq!(
            appointment_date(start),
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()
        );
    }
}
