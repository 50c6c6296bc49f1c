//! Contrato aggregate
//!
//! A rental agreement between a cliente and a trastero. Two contracts
//! that block the unit (activo or pendiente) may never share a day.

pub mod model;
pub mod repository;

pub use model::{Contrato, ContratoEstado, ContratoFilter, DateRange, NewContrato};
pub use repository::ContratoRepository;
