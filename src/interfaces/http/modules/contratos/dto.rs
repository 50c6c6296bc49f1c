use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::contratos::{
    CreateContratoCommand, FinalizarContratoCommand, UpdateContratoCommand,
};
use crate::domain::{Contrato, ContratoEstado};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContratoDto {
    pub id: i32,
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    /// Cents
    pub precio_mensual: i64,
    /// Cents
    pub fianza: i64,
    pub fianza_pagada: bool,
    pub fianza_devuelta: bool,
    pub dia_pago: i32,
    #[schema(example = "activo")]
    pub estado: String,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contrato> for ContratoDto {
    fn from(c: Contrato) -> Self {
        Self {
            id: c.id,
            trastero_id: c.trastero_id,
            cliente_id: c.cliente_id,
            fecha_inicio: c.fecha_inicio,
            fecha_fin: c.fecha_fin,
            precio_mensual: c.precio_mensual,
            fianza: c.fianza,
            fianza_pagada: c.fianza_pagada,
            fianza_devuelta: c.fianza_devuelta,
            dia_pago: c.dia_pago,
            estado: c.estado.to_string(),
            observaciones: c.observaciones,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

fn default_dia_pago() -> i32 {
    1
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContratoRequest {
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    /// Open-ended when absent
    pub fecha_fin: Option<NaiveDate>,
    /// Cents; defaults to the trastero price
    #[validate(range(min = 1, max = 100000000000i64))]
    pub precio_mensual: Option<i64>,
    /// Cents
    #[serde(default)]
    #[validate(range(min = 0, max = 100000000000i64))]
    pub fianza: i64,
    #[serde(default)]
    pub fianza_pagada: bool,
    /// Day of month the rent is due (1-28)
    #[serde(default = "default_dia_pago")]
    #[validate(range(min = 1, max = 28))]
    pub dia_pago: i32,
    /// activo or pendiente; defaults to activo
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

impl CreateContratoRequest {
    pub fn into_command(self, estado: Option<ContratoEstado>) -> CreateContratoCommand {
        CreateContratoCommand {
            trastero_id: self.trastero_id,
            cliente_id: self.cliente_id,
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            precio_mensual: self.precio_mensual,
            fianza: self.fianza,
            fianza_pagada: self.fianza_pagada,
            dia_pago: self.dia_pago,
            estado,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContratoRequest {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    #[validate(range(min = 1, max = 100000000000i64))]
    pub precio_mensual: Option<i64>,
    #[validate(range(min = 0, max = 100000000000i64))]
    pub fianza: Option<i64>,
    pub fianza_pagada: Option<bool>,
    #[validate(range(min = 1, max = 28))]
    pub dia_pago: Option<i32>,
    pub estado: Option<String>,
    pub observaciones: Option<String>,
}

impl UpdateContratoRequest {
    pub fn into_command(self, estado: Option<ContratoEstado>) -> UpdateContratoCommand {
        UpdateContratoCommand {
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            precio_mensual: self.precio_mensual,
            fianza: self.fianza,
            fianza_pagada: self.fianza_pagada,
            dia_pago: self.dia_pago,
            estado,
            observaciones: self.observaciones,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct FinalizarContratoRequest {
    /// Defaults to today
    pub fecha_fin: Option<NaiveDate>,
}

impl From<FinalizarContratoRequest> for FinalizarContratoCommand {
    fn from(r: FinalizarContratoRequest) -> Self {
        Self {
            fecha_fin: r.fecha_fin,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListContratosParams {
    pub cliente_id: Option<i32>,
    pub trastero_id: Option<i32>,
    pub estado: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProximosVencerParams {
    /// Look-ahead window in days (default 30)
    pub dias: Option<i64>,
}

impl ProximosVencerParams {
    pub fn dias(&self) -> i64 {
        self.dias.unwrap_or(30)
    }
}
