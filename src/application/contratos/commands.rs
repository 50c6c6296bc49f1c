use chrono::NaiveDate;

use crate::domain::ContratoEstado;

#[derive(Debug, Clone)]
pub struct CreateContratoCommand {
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    /// Defaults to the trastero's current price
    pub precio_mensual: Option<i64>,
    pub fianza: i64,
    pub fianza_pagada: bool,
    pub dia_pago: i32,
    /// `activo` or `pendiente`; defaults to `activo`
    pub estado: Option<ContratoEstado>,
    pub observaciones: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateContratoCommand {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub precio_mensual: Option<i64>,
    pub fianza: Option<i64>,
    pub fianza_pagada: Option<bool>,
    pub dia_pago: Option<i32>,
    pub estado: Option<ContratoEstado>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FinalizarContratoCommand {
    /// Defaults to today
    pub fecha_fin: Option<NaiveDate>,
}
