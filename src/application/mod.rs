//! Application layer: one service per business context.
//!
//! Commands and queries are plain structs; the service methods are their
//! handlers. Services work against `RepositoryProvider` and publish
//! domain events on the shared `EventBus`.

pub mod clientes;
pub mod contratos;
pub mod dashboard;
pub mod direcciones;
pub mod events;
pub mod gastos;
pub mod identity;
pub mod ingresos;
pub mod locales;
pub mod prestamos;
pub mod trasteros;

pub use clientes::ClienteService;
pub use contratos::ContratoService;
pub use dashboard::DashboardService;
pub use direcciones::DireccionService;
pub use events::{
    create_event_bus, spawn_audit_subscriber, EventBus, EventSubscriber, SharedEventBus,
};
pub use gastos::GastoService;
pub use identity::{spawn_refresh_token_purge, AuthService, UserService};
pub use ingresos::IngresoService;
pub use locales::LocalService;
pub use prestamos::PrestamoService;
pub use trasteros::TrasteroService;

/// What a delete command actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row removed
    Deleted,
    /// Row kept with `activo = false` because history references it
    Deactivated,
}

pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
