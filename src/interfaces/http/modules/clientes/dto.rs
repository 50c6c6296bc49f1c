//! Cliente DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::clientes::{CreateClienteCommand, UpdateClienteCommand};
use crate::domain::Cliente;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClienteDto {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    pub nombre_completo: String,
    pub dni_nie: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: bool,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cliente> for ClienteDto {
    fn from(c: Cliente) -> Self {
        Self {
            nombre_completo: c.nombre_completo(),
            id: c.id,
            nombre: c.nombre,
            apellidos: c.apellidos,
            dni_nie: c.dni_nie,
            email: c.email,
            telefono: c.telefono,
            observaciones: c.observaciones,
            rgpd_aceptado: c.rgpd_aceptado,
            activo: c.activo,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(max = 150))]
    pub apellidos: Option<String>,
    /// DNI (8 digits + letter) or NIE (X/Y/Z + 7 digits + letter)
    #[validate(length(max = 20))]
    #[schema(example = "12345678Z")]
    pub dni_nie: Option<String>,
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    #[serde(default)]
    pub rgpd_aceptado: bool,
}

impl From<CreateClienteRequest> for CreateClienteCommand {
    fn from(r: CreateClienteRequest) -> Self {
        Self {
            nombre: r.nombre,
            apellidos: r.apellidos,
            dni_nie: r.dni_nie,
            email: r.email,
            telefono: r.telefono,
            observaciones: r.observaciones,
            rgpd_aceptado: r.rgpd_aceptado,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    #[validate(length(max = 150))]
    pub apellidos: Option<String>,
    #[validate(length(max = 20))]
    pub dni_nie: Option<String>,
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: Option<bool>,
    pub activo: Option<bool>,
}

impl From<UpdateClienteRequest> for UpdateClienteCommand {
    fn from(r: UpdateClienteRequest) -> Self {
        Self {
            nombre: r.nombre,
            apellidos: r.apellidos,
            dni_nie: r.dni_nie,
            email: r.email,
            telefono: r.telefono,
            observaciones: r.observaciones,
            rgpd_aceptado: r.rgpd_aceptado,
            activo: r.activo,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListClientesParams {
    /// Matches nombre, apellidos, DNI/NIE or email
    pub search: Option<String>,
    pub activo: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
