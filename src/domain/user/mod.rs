//! User aggregate
//!
//! Back-office accounts with role-based access.

pub mod model;
pub mod repository;

pub use model::{NewUser, User, UserFilter, UserRole};
pub use repository::UserRepository;
