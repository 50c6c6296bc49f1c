//! Cliente entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    #[sea_orm(unique, nullable)]
    pub dni_nie: Option<String>,
    #[sea_orm(unique, nullable)]
    pub email: Option<String>,
    #[sea_orm(nullable)]
    pub telefono: Option<String>,
    #[sea_orm(nullable)]
    pub observaciones: Option<String>,
    pub rgpd_aceptado: bool,
    pub activo: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contrato::Entity")]
    Contratos,
    #[sea_orm(has_many = "super::direccion::Entity")]
    Direcciones,
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contratos.def()
    }
}

impl Related<super::direccion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Direcciones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
