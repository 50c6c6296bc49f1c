use chrono::NaiveDate;

use crate::domain::{CategoriaIngreso, MetodoPago};

#[derive(Debug, Clone)]
pub struct CreateIngresoCommand {
    pub contrato_id: i32,
    pub concepto: String,
    pub importe: i64,
    pub fecha_pago: NaiveDate,
    pub metodo_pago: MetodoPago,
    pub categoria: Option<CategoriaIngreso>,
    pub observaciones: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateIngresoCommand {
    pub concepto: Option<String>,
    pub importe: Option<i64>,
    pub fecha_pago: Option<NaiveDate>,
    pub metodo_pago: Option<MetodoPago>,
    pub categoria: Option<CategoriaIngreso>,
    pub observaciones: Option<String>,
}
