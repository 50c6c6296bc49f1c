//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::cliente::ClienteRepository;
use super::contrato::ContratoRepository;
use super::direccion::DireccionRepository;
use super::gasto::GastoRepository;
use super::ingreso::IngresoRepository;
use super::local::LocalRepository;
use super::prestamo::PrestamoRepository;
use super::refresh_token::RefreshTokenRepository;
use super::trastero::TrasteroRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let trastero = repos.trasteros().find_by_id(7).await?;
///     let solapados = repos.contratos().find_overlapping(7, &periodo, None).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn refresh_tokens(&self) -> &dyn RefreshTokenRepository;
    fn clientes(&self) -> &dyn ClienteRepository;
    fn direcciones(&self) -> &dyn DireccionRepository;
    fn locales(&self) -> &dyn LocalRepository;
    fn trasteros(&self) -> &dyn TrasteroRepository;
    fn contratos(&self) -> &dyn ContratoRepository;
    fn ingresos(&self) -> &dyn IngresoRepository;
    fn gastos(&self) -> &dyn GastoRepository;
    fn prestamos(&self) -> &dyn PrestamoRepository;
}
