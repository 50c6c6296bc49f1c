//! Create ingresos table

use sea_orm_migration::prelude::*;

use super::m20240101_000007_create_contratos::Contratos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingresos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingresos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ingresos::ContratoId).integer().not_null())
                    .col(ColumnDef::new(Ingresos::Concepto).string().not_null())
                    .col(ColumnDef::new(Ingresos::Importe).big_integer().not_null())
                    .col(ColumnDef::new(Ingresos::FechaPago).date().not_null())
                    .col(
                        ColumnDef::new(Ingresos::MetodoPago)
                            .string_len(20)
                            .not_null()
                            .default("transferencia"),
                    )
                    .col(
                        ColumnDef::new(Ingresos::Categoria)
                            .string_len(20)
                            .not_null()
                            .default("mensualidad"),
                    )
                    .col(ColumnDef::new(Ingresos::Observaciones).text())
                    .col(
                        ColumnDef::new(Ingresos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Ingresos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingresos_contrato")
                            .from(Ingresos::Table, Ingresos::ContratoId)
                            .to(Contratos::Table, Contratos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ingresos_contrato")
                    .table(Ingresos::Table)
                    .col(Ingresos::ContratoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ingresos_fecha_pago")
                    .table(Ingresos::Table)
                    .col(Ingresos::FechaPago)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingresos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Ingresos {
    Table,
    Id,
    ContratoId,
    Concepto,
    Importe,
    FechaPago,
    MetodoPago,
    Categoria,
    Observaciones,
    CreatedAt,
    UpdatedAt,
}
