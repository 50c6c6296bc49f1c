#[derive(Debug, Clone, Default)]
pub struct CreateClienteCommand {
    pub nombre: String,
    pub apellidos: Option<String>,
    pub dni_nie: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: bool,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateClienteCommand {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni_nie: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: Option<bool>,
    pub activo: Option<bool>,
}
