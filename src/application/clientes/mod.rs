//! Clientes: customer records with unique DNI/NIE and email.

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{CreateClienteCommand, UpdateClienteCommand};
pub use queries::ListClientesQuery;
pub use service::ClienteService;
