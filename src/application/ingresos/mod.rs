//! Ingresos: payments received against a contrato.

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{CreateIngresoCommand, UpdateIngresoCommand};
pub use queries::ListIngresosQuery;
pub use service::IngresoService;
