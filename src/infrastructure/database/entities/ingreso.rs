//! Ingreso entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingresos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contrato_id: i32,
    pub concepto: String,
    /// Cents
    pub importe: i64,
    pub fecha_pago: Date,
    pub metodo_pago: String,
    pub categoria: String,
    #[sea_orm(nullable)]
    pub observaciones: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contrato::Entity",
        from = "Column::ContratoId",
        to = "super::contrato::Column::Id"
    )]
    Contrato,
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrato.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
