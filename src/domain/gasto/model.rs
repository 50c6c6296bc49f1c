use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::{invalid_value, DateFilter, MetodoPago};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoriaGasto {
    Suministros,
    Seguros,
    Impuestos,
    Mantenimiento,
    CuotaPrestamo,
    Gestoria,
    Comunidad,
    Otros,
}

impl CategoriaGasto {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suministros => "suministros",
            Self::Seguros => "seguros",
            Self::Impuestos => "impuestos",
            Self::Mantenimiento => "mantenimiento",
            Self::CuotaPrestamo => "cuota_prestamo",
            Self::Gestoria => "gestoria",
            Self::Comunidad => "comunidad",
            Self::Otros => "otros",
        }
    }
}

impl Default for CategoriaGasto {
    fn default() -> Self {
        Self::Otros
    }
}

impl fmt::Display for CategoriaGasto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoriaGasto {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suministros" => Ok(Self::Suministros),
            "seguros" => Ok(Self::Seguros),
            "impuestos" => Ok(Self::Impuestos),
            "mantenimiento" => Ok(Self::Mantenimiento),
            "cuota_prestamo" | "cuota_préstamo" => Ok(Self::CuotaPrestamo),
            "gestoria" | "gestoría" => Ok(Self::Gestoria),
            "comunidad" => Ok(Self::Comunidad),
            "otros" => Ok(Self::Otros),
            other => Err(invalid_value("categoria", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gasto {
    pub id: i32,
    pub local_id: i32,
    pub prestamo_id: Option<i32>,
    pub concepto: String,
    /// Cents, always positive
    pub importe: i64,
    pub fecha: NaiveDate,
    pub categoria: CategoriaGasto,
    pub metodo_pago: Option<MetodoPago>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGasto {
    pub local_id: i32,
    pub prestamo_id: Option<i32>,
    pub concepto: String,
    pub importe: i64,
    pub fecha: NaiveDate,
    pub categoria: CategoriaGasto,
    pub metodo_pago: Option<MetodoPago>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GastoFilter {
    pub local_id: Option<i32>,
    pub prestamo_id: Option<i32>,
    pub categoria: Option<CategoriaGasto>,
    pub fechas: DateFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categoria_parsing() {
        assert_eq!(
            "cuota_prestamo".parse::<CategoriaGasto>().unwrap(),
            CategoriaGasto::CuotaPrestamo
        );
        assert_eq!("Gestoría".parse::<CategoriaGasto>().unwrap(), CategoriaGasto::Gestoria);
        assert!("ocio".parse::<CategoriaGasto>().is_err());
    }
}
