//! Create contratos table

use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_clientes::Clientes;
use super::m20240101_000006_create_trasteros::Trasteros;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contratos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contratos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contratos::TrasteroId).integer().not_null())
                    .col(ColumnDef::new(Contratos::ClienteId).integer().not_null())
                    .col(ColumnDef::new(Contratos::FechaInicio).date().not_null())
                    .col(ColumnDef::new(Contratos::FechaFin).date())
                    .col(
                        ColumnDef::new(Contratos::PrecioMensual)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contratos::Fianza)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Contratos::FianzaPagada)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Contratos::FianzaDevuelta)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Contratos::DiaPago)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Contratos::Estado)
                            .string_len(20)
                            .not_null()
                            .default("activo"),
                    )
                    .col(ColumnDef::new(Contratos::Observaciones).text())
                    .col(
                        ColumnDef::new(Contratos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contratos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_trastero")
                            .from(Contratos::Table, Contratos::TrasteroId)
                            .to(Trasteros::Table, Trasteros::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_cliente")
                            .from(Contratos::Table, Contratos::ClienteId)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contratos_trastero_estado")
                    .table(Contratos::Table)
                    .col(Contratos::TrasteroId)
                    .col(Contratos::Estado)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contratos_cliente")
                    .table(Contratos::Table)
                    .col(Contratos::ClienteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contratos_fecha_fin")
                    .table(Contratos::Table)
                    .col(Contratos::FechaFin)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contratos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Contratos {
    Table,
    Id,
    TrasteroId,
    ClienteId,
    FechaInicio,
    FechaFin,
    PrecioMensual,
    Fianza,
    FianzaPagada,
    FianzaDevuelta,
    DiaPago,
    Estado,
    Observaciones,
    CreatedAt,
    UpdatedAt,
}
