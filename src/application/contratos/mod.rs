//! Contratos: rental agreements and the overlap rule that guards them.

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{CreateContratoCommand, FinalizarContratoCommand, UpdateContratoCommand};
pub use queries::ListContratosQuery;
pub use service::ContratoService;
