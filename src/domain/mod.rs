//! Domain layer: entities, invariants and repository interfaces.

pub mod cliente;
pub mod common;
pub mod contrato;
pub mod dashboard;
pub mod direccion;
pub mod events;
pub mod gasto;
pub mod ingreso;
pub mod local;
pub mod prestamo;
pub mod refresh_token;
pub mod repositories;
pub mod trastero;
pub mod user;

pub use cliente::{Cliente, ClienteFilter, ClienteRepository, NewCliente};
pub use common::{
    add_importe, ensure_max_importe, sum_importes, DateFilter, MetodoPago, MAX_IMPORTE,
};
pub use contrato::{Contrato, ContratoEstado, ContratoFilter, ContratoRepository, DateRange, NewContrato};
pub use direccion::{Direccion, DireccionRepository, NewDireccion};
pub use events::{DomainEvent, EventMessage};
pub use gasto::{CategoriaGasto, Gasto, GastoFilter, GastoRepository, NewGasto};
pub use ingreso::{CategoriaIngreso, Ingreso, IngresoFilter, IngresoRepository, NewIngreso};
pub use local::{Local, LocalRepository, NewLocal};
pub use prestamo::{NewPrestamo, Prestamo, PrestamoEstado, PrestamoFilter, PrestamoRepository, PrestamoResumen};
pub use refresh_token::{NewRefreshToken, RefreshToken, RefreshTokenRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use trastero::{NewTrastero, Trastero, TrasteroEstado, TrasteroFilter, TrasteroRepository};
pub use user::{NewUser, User, UserFilter, UserRepository, UserRole};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
