use chrono::NaiveDate;

use crate::domain::PrestamoEstado;

#[derive(Debug, Clone)]
pub struct CreatePrestamoCommand {
    pub local_id: i32,
    pub entidad_bancaria: String,
    pub numero_prestamo: Option<String>,
    pub capital_solicitado: i64,
    pub total_a_devolver: i64,
    /// Basis points
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: NaiveDate,
    pub estado: Option<PrestamoEstado>,
    pub observaciones: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePrestamoCommand {
    pub entidad_bancaria: Option<String>,
    pub numero_prestamo: Option<String>,
    pub capital_solicitado: Option<i64>,
    pub total_a_devolver: Option<i64>,
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: Option<NaiveDate>,
    pub estado: Option<PrestamoEstado>,
    pub observaciones: Option<String>,
}
