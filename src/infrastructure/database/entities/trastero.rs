//! Trastero entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trasteros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub local_id: i32,
    pub numero: String,
    #[sea_orm(nullable)]
    pub nombre: Option<String>,
    #[sea_orm(nullable)]
    pub superficie: Option<f64>,
    /// Cents
    pub precio_mensual: i64,
    /// disponible, ocupado, mantenimiento, reservado
    pub estado: String,
    #[sea_orm(nullable)]
    pub observaciones: Option<String>,
    pub activo: bool,
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
    #[sea_orm(has_many = "super::contrato::Entity")]
    Contratos,
}

impl Related<super::local::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Local.def()
    }
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contratos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
