//! Create locales table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_direcciones::Direcciones;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Locales::Nombre)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Locales::DireccionId).integer())
                    .col(ColumnDef::new(Locales::SuperficieTotal).double())
                    .col(ColumnDef::new(Locales::ReferenciaCatastral).string_len(32))
                    .col(ColumnDef::new(Locales::ValorCatastral).big_integer())
                    .col(ColumnDef::new(Locales::FechaCompra).date())
                    .col(ColumnDef::new(Locales::PrecioCompra).big_integer())
                    .col(
                        ColumnDef::new(Locales::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Locales::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Locales::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locales_direccion")
                            .from(Locales::Table, Locales::DireccionId)
                            .to(Direcciones::Table, Direcciones::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Locales {
    Table,
    Id,
    Nombre,
    DireccionId,
    SuperficieTotal,
    ReferenciaCatastral,
    ValorCatastral,
    FechaCompra,
    PrecioCompra,
    Activo,
    CreatedAt,
    UpdatedAt,
}
