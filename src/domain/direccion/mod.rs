//! Direccion aggregate (postal addresses of clientes and locales)

pub mod model;
pub mod repository;

pub use model::{Direccion, NewDireccion};
pub use repository::DireccionRepository;
