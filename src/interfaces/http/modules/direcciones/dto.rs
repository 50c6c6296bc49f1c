use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::direcciones::{CreateDireccionCommand, UpdateDireccionCommand};
use crate::domain::Direccion;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DireccionDto {
    pub id: i32,
    pub cliente_id: Option<i32>,
    pub tipo_via: Option<String>,
    pub nombre_via: String,
    pub numero: Option<String>,
    pub piso: Option<String>,
    pub puerta: Option<String>,
    pub codigo_postal: String,
    pub ciudad: String,
    pub provincia: Option<String>,
    pub pais: String,
    /// Single-line rendering
    pub completa: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Direccion> for DireccionDto {
    fn from(d: Direccion) -> Self {
        Self {
            completa: d.one_line(),
            id: d.id,
            cliente_id: d.cliente_id,
            tipo_via: d.tipo_via,
            nombre_via: d.nombre_via,
            numero: d.numero,
            piso: d.piso,
            puerta: d.puerta,
            codigo_postal: d.codigo_postal,
            ciudad: d.ciudad,
            provincia: d.provincia,
            pais: d.pais,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDireccionRequest {
    pub cliente_id: Option<i32>,
    #[validate(length(max = 30))]
    pub tipo_via: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub nombre_via: String,
    #[validate(length(max = 10))]
    pub numero: Option<String>,
    #[validate(length(max = 10))]
    pub piso: Option<String>,
    #[validate(length(max = 10))]
    pub puerta: Option<String>,
    #[validate(length(min = 1, max = 10))]
    #[schema(example = "28013")]
    pub codigo_postal: String,
    #[validate(length(min = 1, max = 100))]
    pub ciudad: String,
    #[validate(length(max = 100))]
    pub provincia: Option<String>,
    /// Defaults to "España"
    #[validate(length(max = 60))]
    pub pais: Option<String>,
}

impl From<CreateDireccionRequest> for CreateDireccionCommand {
    fn from(r: CreateDireccionRequest) -> Self {
        Self {
            cliente_id: r.cliente_id,
            tipo_via: r.tipo_via,
            nombre_via: r.nombre_via,
            numero: r.numero,
            piso: r.piso,
            puerta: r.puerta,
            codigo_postal: r.codigo_postal,
            ciudad: r.ciudad,
            provincia: r.provincia,
            pais: r.pais,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDireccionRequest {
    pub cliente_id: Option<i32>,
    #[validate(length(max = 30))]
    pub tipo_via: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub nombre_via: Option<String>,
    #[validate(length(max = 10))]
    pub numero: Option<String>,
    #[validate(length(max = 10))]
    pub piso: Option<String>,
    #[validate(length(max = 10))]
    pub puerta: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub codigo_postal: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub ciudad: Option<String>,
    #[validate(length(max = 100))]
    pub provincia: Option<String>,
    #[validate(length(max = 60))]
    pub pais: Option<String>,
}

impl From<UpdateDireccionRequest> for UpdateDireccionCommand {
    fn from(r: UpdateDireccionRequest) -> Self {
        Self {
            cliente_id: r.cliente_id,
            tipo_via: r.tipo_via,
            nombre_via: r.nombre_via,
            numero: r.numero,
            piso: r.piso,
            puerta: r.puerta,
            codigo_postal: r.codigo_postal,
            ciudad: r.ciudad,
            provincia: r.provincia,
            pais: r.pais,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDireccionesParams {
    pub cliente_id: Option<i32>,
}
