use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Local {
    pub id: i32,
    pub nombre: String,
    pub direccion_id: Option<i32>,
    /// Square metres
    pub superficie_total: Option<f64>,
    pub referencia_catastral: Option<String>,
    /// Cents
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    /// Cents
    pub precio_compra: Option<i64>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLocal {
    pub nombre: String,
    pub direccion_id: Option<i32>,
    pub superficie_total: Option<f64>,
    pub referencia_catastral: Option<String>,
    pub valor_catastral: Option<i64>,
    pub fecha_compra: Option<NaiveDate>,
    pub precio_compra: Option<i64>,
}
