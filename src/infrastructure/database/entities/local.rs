//! Local entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nombre: String,
    #[sea_orm(nullable)]
    pub direccion_id: Option<i32>,
    #[sea_orm(nullable)]
    pub superficie_total: Option<f64>,
    #[sea_orm(nullable)]
    pub referencia_catastral: Option<String>,
    /// Cents
    #[sea_orm(nullable)]
    pub valor_catastral: Option<i64>,
    #[sea_orm(nullable)]
    pub fecha_compra: Option<Date>,
    /// Cents
    #[sea_orm(nullable)]
    pub precio_compra: Option<i64>,
    pub activo: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::direccion::Entity",
        from = "Column::DireccionId",
        to = "super::direccion::Column::Id",
        on_delete = "SetNull"
    )]
    Direccion,
    #[sea_orm(has_many = "super::trastero::Entity")]
    Trasteros,
}

impl Related<super::direccion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Direccion.def()
    }
}

impl Related<super::trastero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trasteros.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
