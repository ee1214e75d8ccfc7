// src/config.rs

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AppointmentRepository, ClientRepository, CompanyRepository, ProfessionalRepository,
        ServiceRepository,
    },
    services::AgendaService,
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub companies: CompanyRepository,
    pub professionals: ProfessionalRepository,
    pub services: ServiceRepository,
    pub clients: ClientRepository,
    pub agenda_service: AgendaService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool))
    }

    // Monta o gráfico de dependências a partir de uma pool pronta.
    // Os testes usam este caminho com uma pool preguiçosa.
    pub fn with_pool(db_pool: PgPool) -> Self {
        let companies = CompanyRepository::new(db_pool.clone());
        let professionals = ProfessionalRepository::new(db_pool.clone());
        let services = ServiceRepository::new(db_pool.clone());
        let clients = ClientRepository::new(db_pool.clone());

        let agenda_service = AgendaService::new(
            AppointmentRepository::new(db_pool.clone()),
            professionals.clone(),
            services.clone(),
            clients.clone(),
        );

        Self {
            db_pool,
            companies,
            professionals,
            services,
            clients,
            agenda_service,
        }
    }
}
