//! Local aggregate: a property that contains trasteros.

pub mod model;
pub mod repository;

pub use model::{Local, NewLocal};
pub use repository::LocalRepository;
