//! Create trasteros table
//!
//! A unit number is unique inside its local.

use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_locales::Locales;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trasteros::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trasteros::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trasteros::LocalId).integer().not_null())
                    .col(ColumnDef::new(Trasteros::Numero).string_len(32).not_null())
                    .col(ColumnDef::new(Trasteros::Nombre).string())
                    .col(ColumnDef::new(Trasteros::Superficie).double())
                    .col(
                        ColumnDef::new(Trasteros::PrecioMensual)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Trasteros::Estado)
                            .string_len(20)
                            .not_null()
                            .default("disponible"),
                    )
                    .col(ColumnDef::new(Trasteros::Observaciones).text())
                    .col(
                        ColumnDef::new(Trasteros::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Trasteros::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trasteros::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trasteros_local")
                            .from(Trasteros::Table, Trasteros::LocalId)
                            .to(Locales::Table, Locales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trasteros_local_numero")
                    .table(Trasteros::Table)
                    .col(Trasteros::LocalId)
                    .col(Trasteros::Numero)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trasteros_estado")
                    .table(Trasteros::Table)
                    .col(Trasteros::Estado)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trasteros::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Trasteros {
    Table,
    Id,
    LocalId,
    Numero,
    Nombre,
    Superficie,
    PrecioMensual,
    Estado,
    Observaciones,
    Activo,
    CreatedAt,
    UpdatedAt,
}
