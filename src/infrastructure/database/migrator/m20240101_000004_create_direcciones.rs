//! Create direcciones table

use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_clientes::Clientes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Direcciones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Direcciones::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Direcciones::ClienteId).integer())
                    .col(ColumnDef::new(Direcciones::TipoVia).string_len(32))
                    .col(ColumnDef::new(Direcciones::NombreVia).string().not_null())
                    .col(ColumnDef::new(Direcciones::Numero).string_len(16))
                    .col(ColumnDef::new(Direcciones::Piso).string_len(16))
                    .col(ColumnDef::new(Direcciones::Puerta).string_len(16))
                    .col(
                        ColumnDef::new(Direcciones::CodigoPostal)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Direcciones::Ciudad).string().not_null())
                    .col(ColumnDef::new(Direcciones::Provincia).string())
                    .col(
                        ColumnDef::new(Direcciones::Pais)
                            .string()
                            .not_null()
                            .default("España"),
                    )
                    .col(
                        ColumnDef::new(Direcciones::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Direcciones::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_direcciones_cliente")
                            .from(Direcciones::Table, Direcciones::ClienteId)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_direcciones_cliente")
                    .table(Direcciones::Table)
                    .col(Direcciones::ClienteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Direcciones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Direcciones {
    Table,
    Id,
    ClienteId,
    TipoVia,
    NombreVia,
    Numero,
    Piso,
    Puerta,
    CodigoPostal,
    Ciudad,
    Provincia,
    Pais,
    CreatedAt,
    UpdatedAt,
}
