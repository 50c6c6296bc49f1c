use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::locales::{CreateLocalCommand, UpdateLocalCommand};
use crate::domain::Local;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocalDto {
    pub id: i32,
    pub nombre: String,
    pub direccion_id: Option<i32>,
    /// Square metres
    pub superficie_total: Option<f64>,
    pub referencia_catastral: Option<String>,
    /// Cents
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    /// Cents
    pub precio_compra: Option<i64>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Local> for LocalDto {
    fn from(l: Local) -> Self {
        Self {
            id: l.id,
            nombre: l.nombre,
            direccion_id: l.direccion_id,
            superficie_total: l.superficie_total,
            referencia_catastral: l.referencia_catastral,
            valor_catastral: l.valor_catastral,
            fecha_compra: l.fecha_compra,
            precio_compra: l.precio_compra,
            activo: l.activo,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocalRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub direccion_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub superficie_total: Option<f64>,
    #[validate(length(max = 30))]
    pub referencia_catastral: Option<String>,
    #[validate(range(min = 0, max = 100000000000i64))]
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    #[validate(range(min = 0, max = 100000000000i64))]
    pub precio_compra: Option<i64>,
}

impl From<CreateLocalRequest> for CreateLocalCommand {
    fn from(r: CreateLocalRequest) -> Self {
        Self {
            nombre: r.nombre,
            direccion_id: r.direccion_id,
            superficie_total: r.superficie_total,
            referencia_catastral: r.referencia_catastral,
            valor_catastral: r.valor_catastral,
            fecha_compra: r.fecha_compra,
            precio_compra: r.precio_compra,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocalRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    pub direccion_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub superficie_total: Option<f64>,
    #[validate(length(max = 30))]
    pub referencia_catastral: Option<String>,
    #[validate(range(min = 0, max = 100000000000i64))]
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    #[validate(range(min = 0, max = 100000000000i64))]
    pub precio_compra: Option<i64>,
    pub activo: Option<bool>,
}

impl From<UpdateLocalRequest> for UpdateLocalCommand {
    fn from(r: UpdateLocalRequest) -> Self {
        Self {
            nombre: r.nombre,
            direccion_id: r.direccion_id,
            superficie_total: r.superficie_total,
            referencia_catastral: r.referencia_catastral,
            valor_catastral: r.valor_catastral,
            fecha_compra: r.fecha_compra,
            precio_compra: r.precio_compra,
            activo: r.activo,
        }
    }
}
