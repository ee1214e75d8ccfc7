pub mod agenda_service;
pub use agenda_service::AgendaService;
