//! # Trastero admin
//!
//! Back-office backend for a storage-unit (trastero) rental business:
//! clientes, locales, trasteros, contratos, payments, expenses and bank
//! loans, behind a JWT-protected REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, invariants and repository traits
//! - **application**: one service per business context, domain events
//! - **infrastructure**: SeaORM persistence, migrations, crypto
//! - **interfaces**: HTTP API with Swagger documentation
//! - **server**: process lifecycle shared by the CLI binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiDoc, AppState};

pub use application::{create_event_bus, EventBus, SharedEventBus};
