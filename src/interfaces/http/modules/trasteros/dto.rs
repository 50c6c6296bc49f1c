use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::trasteros::{CreateTrasteroCommand, UpdateTrasteroCommand};
use crate::domain::Trastero;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrasteroDto {
    pub id: i32,
    pub local_id: i32,
    pub numero: String,
    pub nombre: Option<String>,
    pub superficie: Option<f64>,
    /// Cents
    pub precio_mensual: i64,
    #[schema(example = "disponible")]
    pub estado: String,
    pub observaciones: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trastero> for TrasteroDto {
    fn from(t: Trastero) -> Self {
        Self {
            id: t.id,
            local_id: t.local_id,
            numero: t.numero,
            nombre: t.nombre,
            superficie: t.superficie,
            precio_mensual: t.precio_mensual,
            estado: t.estado.to_string(),
            observaciones: t.observaciones,
            activo: t.activo,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTrasteroRequest {
    pub local_id: i32,
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "A-01")]
    pub numero: String,
    #[validate(length(max = 100))]
    pub nombre: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub superficie: Option<f64>,
    /// Cents, must be positive
    #[validate(range(min = 1, max = 100000000000i64))]
    pub precio_mensual: i64,
    /// disponible, ocupado, mantenimiento or reservado
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

impl CreateTrasteroRequest {
    pub fn into_command(self, estado: Option<crate::domain::TrasteroEstado>) -> CreateTrasteroCommand {
        CreateTrasteroCommand {
            local_id: self.local_id,
            numero: self.numero,
            nombre: self.nombre,
            superficie: self.superficie,
            precio_mensual: self.precio_mensual,
            estado,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTrasteroRequest {
    pub local_id: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub numero: Option<String>,
    #[validate(length(max = 100))]
    pub nombre: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub superficie: Option<f64>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub precio_mensual: Option<i64>,
    pub observaciones: Option<String>,
    pub activo: Option<bool>,
}

impl From<UpdateTrasteroRequest> for UpdateTrasteroCommand {
    fn from(r: UpdateTrasteroRequest) -> Self {
        Self {
            local_id: r.local_id,
            numero: r.numero,
            nombre: r.nombre,
            superficie: r.superficie,
            precio_mensual: r.precio_mensual,
            observaciones: r.observaciones,
            activo: r.activo,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CambiarEstadoRequest {
    #[validate(length(min = 1))]
    #[schema(example = "mantenimiento")]
    pub estado: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTrasterosParams {
    pub local_id: Option<i32>,
    pub estado: Option<String>,
    pub activo: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DisponiblesParams {
    /// First day of the requested period
    pub fecha_inicio: NaiveDate,
    /// Open-ended when absent
    pub fecha_fin: Option<NaiveDate>,
    pub local_id: Option<i32>,
}
