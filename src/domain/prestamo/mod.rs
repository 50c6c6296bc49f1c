//! Prestamo aggregate: bank loans financing a local.

pub mod model;
pub mod repository;

pub use model::{NewPrestamo, Prestamo, PrestamoEstado, PrestamoFilter, PrestamoResumen};
pub use repository::PrestamoRepository;
