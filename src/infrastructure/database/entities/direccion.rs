//! Direccion entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "direcciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(nullable)]
    pub cliente_id: Option<i32>,
    #[sea_orm(nullable)]
    pub tipo_via: Option<String>,
    pub nombre_via: String,
    #[sea_orm(nullable)]
    pub numero: Option<String>,
    #[sea_orm(nullable)]
    pub piso: Option<String>,
    #[sea_orm(nullable)]
    pub puerta: Option<String>,
    pub codigo_postal: String,
    pub ciudad: String,
    #[sea_orm(nullable)]
    pub provincia: Option<String>,
    pub pais: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id",
        on_delete = "Cascade"
    )]
    Cliente,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
