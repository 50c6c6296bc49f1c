//! Ingreso aggregate: money received against a contrato.

pub mod model;
pub mod repository;

pub use model::{CategoriaIngreso, Ingreso, IngresoFilter, NewIngreso};
pub use repository::IngresoRepository;
