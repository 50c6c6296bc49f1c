//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_refresh_tokens;
mod m20240101_000003_create_clientes;
mod m20240101_000004_create_direcciones;
mod m20240101_000005_create_locales;
mod m20240101_000006_create_trasteros;
mod m20240101_000007_create_contratos;
mod m20240101_000008_create_ingresos;
mod m20240101_000009_create_prestamos;
mod m20240101_000010_create_gastos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_refresh_tokens::Migration),
            Box::new(m20240101_000003_create_clientes::Migration),
            Box::new(m20240101_000004_create_direcciones::Migration),
            Box::new(m20240101_000005_create_locales::Migration),
            Box::new(m20240101_000006_create_trasteros::Migration),
            Box::new(m20240101_000007_create_contratos::Migration),
            Box::new(m20240101_000008_create_ingresos::Migration),
            Box::new(m20240101_000009_create_prestamos::Migration),
            Box::new(m20240101_000010_create_gastos::Migration),
        ]
    }
}
