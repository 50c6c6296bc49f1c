//! Cliente aggregate
//!
//! Customers renting trasteros. DNI/NIE and email are unique.

pub mod model;
pub mod repository;

pub use model::{Cliente, ClienteFilter, NewCliente};
pub use repository::ClienteRepository;
