//! Prestamos: bank loans financing a local and their repayment summary.

pub mod commands;
pub mod service;

pub use commands::{CreatePrestamoCommand, UpdatePrestamoCommand};
pub use service::PrestamoService;
