use crate::domain::TrasteroEstado;

#[derive(Debug, Clone, Default)]
pub struct CreateTrasteroCommand {
    pub local_id: i32,
    pub numero: String,
    pub nombre: Option<String>,
    pub superficie: Option<f64>,
    pub precio_mensual: i64,
    pub estado: Option<TrasteroEstado>,
    pub observaciones: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrasteroCommand {
    pub local_id: Option<i32>,
    pub numero: Option<String>,
    pub nombre: Option<String>,
    pub superficie: Option<f64>,
    pub precio_mensual: Option<i64>,
    pub observaciones: Option<String>,
    pub activo: Option<bool>,
}
