//! Trastero aggregate: a rentable storage unit inside a local.

pub mod model;
pub mod repository;

pub use model::{NewTrastero, Trastero, TrasteroEstado, TrasteroFilter};
pub use repository::TrasteroRepository;
