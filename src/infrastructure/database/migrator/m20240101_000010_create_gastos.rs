//! Create gastos table

use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_locales::Locales;
use super::m20240101_000009_create_prestamos::Prestamos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gastos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gastos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gastos::LocalId).integer().not_null())
                    .col(ColumnDef::new(Gastos::PrestamoId).integer())
                    .col(ColumnDef::new(Gastos::Concepto).string().not_null())
                    .col(ColumnDef::new(Gastos::Importe).big_integer().not_null())
                    .col(ColumnDef::new(Gastos::Fecha).date().not_null())
                    .col(
                        ColumnDef::new(Gastos::Categoria)
                            .string_len(20)
                            .not_null()
                            .default("otros"),
                    )
                    .col(ColumnDef::new(Gastos::MetodoPago).string_len(20))
                    .col(ColumnDef::new(Gastos::Observaciones).text())
                    .col(
                        ColumnDef::new(Gastos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gastos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gastos_local")
                            .from(Gastos::Table, Gastos::LocalId)
                            .to(Locales::Table, Locales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gastos_prestamo")
                            .from(Gastos::Table, Gastos::PrestamoId)
                            .to(Prestamos::Table, Prestamos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gastos_local_fecha")
                    .table(Gastos::Table)
                    .col(Gastos::LocalId)
                    .col(Gastos::Fecha)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gastos_prestamo")
                    .table(Gastos::Table)
                    .col(Gastos::PrestamoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gastos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Gastos {
    Table,
    Id,
    LocalId,
    PrestamoId,
    Concepto,
    Importe,
    Fecha,
    Categoria,
    MetodoPago,
    Observaciones,
    CreatedAt,
    UpdatedAt,
}
