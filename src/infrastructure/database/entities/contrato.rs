//! Contrato entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contratos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: Date,
    /// NULL for open-ended contracts
    #[sea_orm(nullable)]
    pub fecha_fin: Option<Date>,
    pub precio_mensual: i64,
    pub fianza: i64,
    pub fianza_pagada: bool,
    pub fianza_devuelta: bool,
    pub dia_pago: i32,
    /// activo, finalizado, cancelado, pendiente
    pub estado: String,
    #[sea_orm(nullable)]
    pub observaciones: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trastero::Entity",
        from = "Column::TrasteroId",
        to = "super::trastero::Column::Id"
    )]
    Trastero,
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id"
    )]
    Cliente,
    #[sea_orm(has_many = "super::ingreso::Entity")]
    Ingresos,
}

impl Related<super::trastero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trastero.def()
    }
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::ingreso::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingresos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
