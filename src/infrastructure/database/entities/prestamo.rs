//! Prestamo entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prestamos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub local_id: i32,
    pub entidad_bancaria: String,
    #[sea_orm(nullable)]
    pub numero_prestamo: Option<String>,
    pub capital_solicitado: i64,
    pub total_a_devolver: i64,
    /// Basis points
    #[sea_orm(nullable)]
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: Date,
    pub estado: String,
    #[sea_orm(nullable)]
    pub observaciones: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local::Entity",
        from = "Column::LocalId",
        to = "super::local::Column::Id"
    )]
    Local,
    #[sea_orm(has_many = "super::gasto::Entity")]
    Gastos,
}

impl Related<super::local::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Local.def()
    }
}

impl Related<super::gasto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gastos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
