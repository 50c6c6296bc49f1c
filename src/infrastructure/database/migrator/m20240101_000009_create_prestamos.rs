//! Create prestamos table

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
                    .table(Prestamos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prestamos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prestamos::LocalId).integer().not_null())
                    .col(ColumnDef::new(Prestamos::EntidadBancaria).string().not_null())
                    .col(ColumnDef::new(Prestamos::NumeroPrestamo).string_len(64))
                    .col(
                        ColumnDef::new(Prestamos::CapitalSolicitado)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prestamos::TotalADevolver)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Prestamos::TipoInteres).integer())
                    .col(ColumnDef::new(Prestamos::FechaConcesion).date().not_null())
                    .col(
                        ColumnDef::new(Prestamos::Estado)
                            .string_len(20)
                            .not_null()
                            .default("activo"),
                    )
                    .col(ColumnDef::new(Prestamos::Observaciones).text())
                    .col(
                        ColumnDef::new(Prestamos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prestamos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prestamos_local")
                            .from(Prestamos::Table, Prestamos::LocalId)
                            .to(Locales::Table, Locales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prestamos_local")
                    .table(Prestamos::Table)
                    .col(Prestamos::LocalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prestamos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Prestamos {
    Table,
    Id,
    LocalId,
    EntidadBancaria,
    NumeroPrestamo,
    CapitalSolicitado,
    TotalADevolver,
    TipoInteres,
    FechaConcesion,
    Estado,
    Observaciones,
    CreatedAt,
    UpdatedAt,
}
