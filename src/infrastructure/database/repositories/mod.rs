//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod cliente_repository;
pub mod contrato_repository;
pub mod direccion_repository;
pub mod gasto_repository;
pub mod ingreso_repository;
pub mod local_repository;
pub mod prestamo_repository;
pub mod refresh_token_repository;
pub mod repository_provider;
pub mod trastero_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use std::str::FromStr;

use sea_orm::{DbErr, SqlErr};

use crate::domain::{DomainError, DomainResult};

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Maps unique-constraint violations to `Conflict(message)`.
pub(crate) fn unique_err(message: &str) -> impl Fn(DbErr) -> DomainError + '_ {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(message.to_string()),
        _ => db_err(e),
    }
}

/// Parses an enum stored as text. A value the domain does not know is a
/// data problem, not a client error.
pub(crate) fn parse_stored<T>(column: &str, raw: &str) -> DomainResult<T>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|_| DomainError::Database(format!("unexpected {} value '{}'", column, raw)))
}

pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> DomainError {
    DomainError::not_found(entity, id)
}
