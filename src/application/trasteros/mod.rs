//! Trasteros: rentable units, their estado and availability.

pub mod commands;
pub mod queries;
pub mod service;

pub use commands::{CreateTrasteroCommand, UpdateTrasteroCommand};
pub use queries::{DisponiblesQuery, ListTrasterosQuery};
pub use service::TrasteroService;
