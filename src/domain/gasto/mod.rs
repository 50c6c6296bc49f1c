//! Gasto aggregate: expenses charged to a local.

pub mod model;
pub mod repository;

pub use model::{CategoriaGasto, Gasto, GastoFilter, NewGasto};
pub use repository::GastoRepository;
