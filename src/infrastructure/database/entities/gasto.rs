//! Gasto entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gastos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub local_id: i32,
    #[sea_orm(nullable)]
    pub prestamo_id: Option<i32>,
    pub concepto: String,
    /// Cents
    pub importe: i64,
    pub fecha: Date,
    pub categoria: String,
    #[sea_orm(nullable)]
    pub metodo_pago: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::prestamo::Entity",
        from = "Column::PrestamoId",
        to = "super::prestamo::Column::Id"
    )]
    Prestamo,
}

impl Related<super::local::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Local.def()
    }
}

impl Related<super::prestamo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prestamo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
