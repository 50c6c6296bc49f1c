#[derive(Debug, Clone, Default)]
pub struct CreateDireccionCommand {
    pub cliente_id: Option<i32>,
    pub tipo_via: Option<String>,
    pub nombre_via: String,
    pub numero: Option<String>,
    pub piso: Option<String>,
    pub puerta: Option<String>,
    pub codigo_postal: String,
    pub ciudad: String,
    pub provincia: Option<String>,
    /// Defaults to "España"
    pub pais: Option<String>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDireccionCommand {
    pub cliente_id: Option<i32>,
    pub tipo_via: Option<String>,
    pub nombre_via: Option<String>,
    pub numero: Option<String>,
    pub piso: Option<String>,
    pub puerta: Option<String>,
    pub codigo_postal: Option<String>,
    pub ciudad: Option<String>,
    pub provincia: Option<String>,
    pub pais: Option<String>,
}
