//! Create clientes table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clientes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clientes::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Clientes::Apellidos)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Clientes::DniNie).string_len(16).unique_key())
                    .col(ColumnDef::new(Clientes::Email).string().unique_key())
                    .col(ColumnDef::new(Clientes::Telefono).string_len(32))
                    .col(ColumnDef::new(Clientes::Observaciones).text())
                    .col(
                        ColumnDef::new(Clientes::RgpdAceptado)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Clientes::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Clientes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Clientes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clientes_apellidos")
                    .table(Clientes::Table)
                    .col(Clientes::Apellidos)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Clientes {
    Table,
    Id,
    Nombre,
    Apellidos,
    DniNie,
    Email,
    Telefono,
    Observaciones,
    RgpdAceptado,
    Activo,
    CreatedAt,
    UpdatedAt,
}
