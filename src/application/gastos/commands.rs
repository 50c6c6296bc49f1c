use chrono::NaiveDate;

use crate::domain::{CategoriaGasto, MetodoPago};

#[derive(Debug, Clone)]
pub struct CreateGastoCommand {
    pub local_id: i32,
    pub prestamo_id: Option<i32>,
    pub concepto: String,
    pub importe: i64,
    pub fecha: NaiveDate,
    pub categoria: Option<CategoriaGasto>,
    pub metodo_pago: Option<MetodoPago>,
    pub observaciones: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGastoCommand {
    pub local_id: Option<i32>,
    pub prestamo_id: Option<i32>,
    pub concepto: Option<String>,
    pub importe: Option<i64>,
    pub fecha: Option<NaiveDate>,
    pub categoria: Option<CategoriaGasto>,
    pub metodo_pago: Option<MetodoPago>,
    pub observaciones: Option<String>,
}
