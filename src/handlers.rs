pub mod appointments;
pub mod clients;
pub mod companies;
pub mod professionals;
pub mod services;
