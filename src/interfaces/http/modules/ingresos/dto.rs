use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::ingresos::{CreateIngresoCommand, UpdateIngresoCommand};
use crate::domain::{CategoriaIngreso, Ingreso, MetodoPago};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngresoDto {
    pub id: i32,
    pub contrato_id: i32,
    pub concepto: String,
    /// Cents
    pub importe: i64,
    pub fecha_pago: NaiveDate,
    #[schema(example = "transferencia")]
    pub metodo_pago: String,
    #[schema(example = "mensualidad")]
    pub categoria: String,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ingreso> for IngresoDto {
    fn from(i: Ingreso) -> Self {
        Self {
            id: i.id,
            contrato_id: i.contrato_id,
            concepto: i.concepto,
            importe: i.importe,
            fecha_pago: i.fecha_pago,
            metodo_pago: i.metodo_pago.to_string(),
            categoria: i.categoria.to_string(),
            observaciones: i.observaciones,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIngresoRequest {
    pub contrato_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub concepto: String,
    /// Cents, must be positive
    #[validate(range(min = 1, max = 100000000000i64))]
    pub importe: i64,
    pub fecha_pago: NaiveDate,
    /// efectivo, transferencia, tarjeta, bizum or domiciliacion
    pub metodo_pago: String,
    /// mensualidad (default), fianza, penalizacion or otros
    pub categoria: Option<String>,
    pub observaciones: Option<String>,
}

impl CreateIngresoRequest {
    pub fn into_command(
        self,
        metodo_pago: MetodoPago,
        categoria: Option<CategoriaIngreso>,
    ) -> CreateIngresoCommand {
        CreateIngresoCommand {
            contrato_id: self.contrato_id,
            concepto: self.concepto,
            importe: self.importe,
            fecha_pago: self.fecha_pago,
            metodo_pago,
            categoria,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateIngresoRequest {
    #[validate(length(min = 1, max = 200))]
    pub concepto: Option<String>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub importe: Option<i64>,
    pub fecha_pago: Option<NaiveDate>,
    pub metodo_pago: Option<String>,
    pub categoria: Option<String>,
    pub observaciones: Option<String>,
}

impl UpdateIngresoRequest {
    pub fn into_command(
        self,
        metodo_pago: Option<MetodoPago>,
        categoria: Option<CategoriaIngreso>,
    ) -> UpdateIngresoCommand {
        UpdateIngresoCommand {
            concepto: self.concepto,
            importe: self.importe,
            fecha_pago: self.fecha_pago,
            metodo_pago,
            categoria,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngresosParams {
    pub contrato_id: Option<i32>,
    pub categoria: Option<String>,
    /// Inclusive lower bound on fecha_pago
    pub desde: Option<NaiveDate>,
    /// Inclusive upper bound on fecha_pago
    pub hasta: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
