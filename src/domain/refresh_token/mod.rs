//! Refresh tokens issued at login and rotated on refresh.

pub mod model;
pub mod repository;

pub use model::{NewRefreshToken, RefreshToken};
pub use repository::RefreshTokenRepository;
