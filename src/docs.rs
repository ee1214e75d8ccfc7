// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agenda API",
        description = "API multi-tenant de agendamentos: empresas, profissionais, serviços, clientes e agenda."
    ),
    paths(
        // --- Empresas ---
        handlers::companies::list_companies,
        handlers::companies::create_company,
        handlers::companies::get_company,
        handlers::companies::update_company,

        // --- Profissionais ---
        handlers::professionals::list_professionals,
        handlers::professionals::create_professional,
        handlers::professionals::get_professional,
        handlers::professionals::update_professional,

        // --- Serviços ---
        handlers::services::list_services,
        handlers::services::create_service,
        handlers::services::get_service,
        handlers::services::update_service,

        // --- Clientes ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::get_client,
        handlers::clients::update_client,

        // --- Agendamentos ---
        handlers::appointments::list_appointments,
        handlers::appointments::create_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::cancel_appointment,
        handlers::appointments::get_availability,
    ),
    components(
        schemas(
            models::company::Company,
            models::company::NewCompany,
            models::company::CompanyChanges,
            models::professional::Professional,
            models::professional::NewProfessional,
            models::professional::ProfessionalChanges,
            models::service::Service,
            models::service::NewService,
            models::service::ServiceChanges,
            models::client::Client,
            models::client::NewClient,
            models::client::ClientChanges,
            models::appointment::AppointmentStatus,
            models::appointment::Appointment,
            models::appointment::AppointmentDetails,
            models::appointment::NewAppointment,
            models::appointment::AppointmentChanges,
            models::appointment::OccupiedSlot,
            models::appointment::Availability,
        )
    )
)]
pub struct ApiDoc;
