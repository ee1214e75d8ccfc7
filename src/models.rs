pub mod appointment;
pub mod client;
pub mod company;
pub mod professional;
pub mod service;
