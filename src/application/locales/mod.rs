//! Locales: properties that host trasteros.

pub mod commands;
pub mod service;

pub use commands::{CreateLocalCommand, UpdateLocalCommand};
pub use service::LocalService;
