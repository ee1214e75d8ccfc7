pub mod appointment_repo;
pub use appointment_repo::AppointmentRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod professional_repo;
pub use professional_repo::ProfessionalRepository;
pub mod service_repo;
pub use service_repo::ServiceRepository;
