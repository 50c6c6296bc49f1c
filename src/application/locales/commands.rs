use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct CreateLocalCommand {
    pub nombre: String,
    pub direccion_id: Option<i32>,
    pub superficie_total: Option<f64>,
    pub referencia_catastral: Option<String>,
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    pub precio_compra: Option<i64>,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocalCommand {
    pub nombre: Option<String>,
    pub direccion_id: Option<i32>,
    pub superficie_total: Option<f64>,
    pub referencia_catastral: Option<String>,
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    pub precio_compra: Option<i64>,
    pub activo: Option<bool>,
}
