//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::cliente::ClienteRepository;
use crate::domain::contrato::ContratoRepository;
use crate::domain::direccion::DireccionRepository;
use crate::domain::gasto::GastoRepository;
use crate::domain::ingreso::IngresoRepository;
use crate::domain::local::LocalRepository;
use crate::domain::prestamo::PrestamoRepository;
use crate::domain::refresh_token::RefreshTokenRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::trastero::TrasteroRepository;
use crate::domain::user::UserRepository;

use super::cliente_repository::SeaOrmClienteRepository;
use super::contrato_repository::SeaOrmContratoRepository;
use super::direccion_repository::SeaOrmDireccionRepository;
use super::gasto_repository::SeaOrmGastoRepository;
use super::ingreso_repository::SeaOrmIngresoRepository;
use super::local_repository::SeaOrmLocalRepository;
use super::prestamo_repository::SeaOrmPrestamoRepository;
use super::refresh_token_repository::SeaOrmRefreshTokenRepository;
use super::trastero_repository::SeaOrmTrasteroRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let trastero = repos.trasteros().find_by_id(12).await?;
/// let pagos = repos.ingresos().count_by_contrato(4).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    refresh_tokens: SeaOrmRefreshTokenRepository,
    clientes: SeaOrmClienteRepository,
    direcciones: SeaOrmDireccionRepository,
    locales: SeaOrmLocalRepository,
    trasteros: SeaOrmTrasteroRepository,
    contratos: SeaOrmContratoRepository,
    ingresos: SeaOrmIngresoRepository,
    gastos: SeaOrmGastoRepository,
    prestamos: SeaOrmPrestamoRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            refresh_tokens: SeaOrmRefreshTokenRepository::new(db.clone()),
            clientes: SeaOrmClienteRepository::new(db.clone()),
            direcciones: SeaOrmDireccionRepository::new(db.clone()),
            locales: SeaOrmLocalRepository::new(db.clone()),
            trasteros: SeaOrmTrasteroRepository::new(db.clone()),
            contratos: SeaOrmContratoRepository::new(db.clone()),
            ingresos: SeaOrmIngresoRepository::new(db.clone()),
            gastos: SeaOrmGastoRepository::new(db.clone()),
            prestamos: SeaOrmPrestamoRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn refresh_tokens(&self) -> &dyn RefreshTokenRepository {
        &self.refresh_tokens
    }

    fn clientes(&self) -> &dyn ClienteRepository {
        &self.clientes
    }

    fn direcciones(&self) -> &dyn DireccionRepository {
        &self.direcciones
    }

    fn locales(&self) -> &dyn LocalRepository {
        &self.locales
    }

    fn trasteros(&self) -> &dyn TrasteroRepository {
        &self.trasteros
    }

    fn contratos(&self) -> &dyn ContratoRepository {
        &self.contratos
    }

    fn ingresos(&self) -> &dyn IngresoRepository {
        &self.ingresos
    }

    fn gastos(&self) -> &dyn GastoRepository {
        &self.gastos
    }

    fn prestamos(&self) -> &dyn PrestamoRepository {
        &self.prestamos
    }
}
