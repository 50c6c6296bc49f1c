use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::gastos::{CreateGastoCommand, UpdateGastoCommand};
use crate::domain::{CategoriaGasto, Gasto, MetodoPago};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GastoDto {
    pub id: i32,
    pub local_id: i32,
    pub prestamo_id: Option<i32>,
    pub concepto: String,
    /// Cents
    pub importe: i64,
    pub fecha: NaiveDate,
    #[schema(example = "suministros")]
    pub categoria: String,
    pub metodo_pago: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Gasto> for GastoDto {
    fn from(g: Gasto) -> Self {
        Self {
            id: g.id,
            local_id: g.local_id,
            prestamo_id: g.prestamo_id,
            concepto: g.concepto,
            importe: g.importe,
            fecha: g.fecha,
            categoria: g.categoria.to_string(),
            metodo_pago: g.metodo_pago.map(|m| m.to_string()),
            observaciones: g.observaciones,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGastoRequest {
    pub local_id: i32,
    /// Links the gasto to a loan repayment
    pub prestamo_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub concepto: String,
    /// Cents, must be positive
    #[validate(range(min = 1, max = 100000000000i64))]
    pub importe: i64,
    pub fecha: NaiveDate,
    /// Defaults to otros, or cuota_prestamo when prestamo_id is set
    pub categoria: Option<String>,
    pub metodo_pago: Option<String>,
    pub observaciones: Option<String>,
}

impl CreateGastoRequest {
    pub fn into_command(
        self,
        categoria: Option<CategoriaGasto>,
        metodo_pago: Option<MetodoPago>,
    ) -> CreateGastoCommand {
        CreateGastoCommand {
            local_id: self.local_id,
            prestamo_id: self.prestamo_id,
            concepto: self.concepto,
            importe: self.importe,
            fecha: self.fecha,
            categoria,
            metodo_pago,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGastoRequest {
    pub local_id: Option<i32>,
    pub prestamo_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub concepto: Option<String>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub importe: Option<i64>,
    pub fecha: Option<NaiveDate>,
    pub categoria: Option<String>,
    pub metodo_pago: Option<String>,
    pub observaciones: Option<String>,
}

impl UpdateGastoRequest {
    pub fn into_command(
        self,
        categoria: Option<CategoriaGasto>,
        metodo_pago: Option<MetodoPago>,
    ) -> UpdateGastoCommand {
        UpdateGastoCommand {
            local_id: self.local_id,
            prestamo_id: self.prestamo_id,
            concepto: self.concepto,
            importe: self.importe,
            fecha: self.fecha,
            categoria,
            metodo_pago,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGastosParams {
    pub local_id: Option<i32>,
    pub prestamo_id: Option<i32>,
    pub categoria: Option<String>,
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
