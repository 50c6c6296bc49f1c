//! Direcciones: postal addresses, optionally owned by a cliente.

pub mod commands;
pub mod service;

pub use commands::{CreateDireccionCommand, UpdateDireccionCommand};
pub use service::DireccionService;
