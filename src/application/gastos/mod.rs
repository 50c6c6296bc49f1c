//! Gastos: expenses of a local, optionally paying down a prestamo.

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{CreateGastoCommand, UpdateGastoCommand};
pub use queries::ListGastosQuery;
pub use service::GastoService;
