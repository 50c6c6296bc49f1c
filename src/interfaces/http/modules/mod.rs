pub mod auth;
pub mod clientes;
pub mod contratos;
pub mod dashboard;
pub mod direcciones;
pub mod gastos;
pub mod health;
pub mod ingresos;
pub mod locales;
pub mod metrics;
pub mod prestamos;
pub mod request_id;
pub mod trasteros;
pub mod users;
