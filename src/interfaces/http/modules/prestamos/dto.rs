use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::prestamos::{CreatePrestamoCommand, UpdatePrestamoCommand};
use crate::domain::{Prestamo, PrestamoEstado, PrestamoResumen};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrestamoDto {
    pub id: i32,
    pub local_id: i32,
    pub entidad_bancaria: String,
    pub numero_prestamo: Option<String>,
    /// Cents
    pub capital_solicitado: i64,
    /// Cents
    pub total_a_devolver: i64,
    /// Basis points (350 = 3.50 %)
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: NaiveDate,
    #[schema(example = "activo")]
    pub estado: String,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prestamo> for PrestamoDto {
    fn from(p: Prestamo) -> Self {
        Self {
            id: p.id,
            local_id: p.local_id,
            entidad_bancaria: p.entidad_bancaria,
            numero_prestamo: p.numero_prestamo,
            capital_solicitado: p.capital_solicitado,
            total_a_devolver: p.total_a_devolver,
            tipo_interes: p.tipo_interes,
            fecha_concesion: p.fecha_concesion,
            estado: p.estado.to_string(),
            observaciones: p.observaciones,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrestamoResumenDto {
    pub prestamo_id: i32,
    pub total_a_devolver: i64,
    pub total_pagado: i64,
    pub importe_pendiente: i64,
    /// 0-100 with two decimals
    pub porcentaje_amortizado: f64,
}

impl From<PrestamoResumen> for PrestamoResumenDto {
    fn from(r: PrestamoResumen) -> Self {
        Self {
            prestamo_id: r.prestamo_id,
            total_a_devolver: r.total_a_devolver,
            total_pagado: r.total_pagado,
            importe_pendiente: r.importe_pendiente,
            porcentaje_amortizado: r.porcentaje_amortizado,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePrestamoRequest {
    pub local_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub entidad_bancaria: String,
    #[validate(length(max = 50))]
    pub numero_prestamo: Option<String>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub capital_solicitado: i64,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub total_a_devolver: i64,
    #[validate(range(min = 0))]
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: NaiveDate,
    /// activo (default), cancelado or finalizado
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

impl CreatePrestamoRequest {
    pub fn into_command(self, estado: Option<PrestamoEstado>) -> CreatePrestamoCommand {
        CreatePrestamoCommand {
            local_id: self.local_id,
            entidad_bancaria: self.entidad_bancaria,
            numero_prestamo: self.numero_prestamo,
            capital_solicitado: self.capital_solicitado,
            total_a_devolver: self.total_a_devolver,
            tipo_interes: self.tipo_interes,
            fecha_concesion: self.fecha_concesion,
            estado,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePrestamoRequest {
    #[validate(length(min = 1, max = 100))]
    pub entidad_bancaria: Option<String>,
    #[validate(length(max = 50))]
    pub numero_prestamo: Option<String>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub capital_solicitado: Option<i64>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub total_a_devolver: Option<i64>,
    #[validate(range(min = 0))]
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: Option<NaiveDate>,
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

impl UpdatePrestamoRequest {
    pub fn into_command(self, estado: Option<PrestamoEstado>) -> UpdatePrestamoCommand {
        UpdatePrestamoCommand {
            entidad_bancaria: self.entidad_bancaria,
            numero_prestamo: self.numero_prestamo,
            capital_solicitado: self.capital_solicitado,
            total_a_devolver: self.total_a_devolver,
            tipo_interes: self.tipo_interes,
            fecha_concesion: self.fecha_concesion,
            estado,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPrestamosParams {
    pub local_id: Option<i32>,
    pub estado: Option<String>,
}
