use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::{ensure_max_importe, invalid_value, DateFilter, MetodoPago};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoriaIngreso {
    Mensualidad,
    Fianza,
    Penalizacion,
    Otros,
}

impl Default for CategoriaIngreso {
    fn default() -> Self {
        Self::Mensualidad
    }
}

impl CategoriaIngreso {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mensualidad => "mensualidad",
            Self::Fianza => "fianza",
            Self::Penalizacion => "penalizacion",
            Self::Otros => "otros",
        }
    }
}

impl fmt::Display for CategoriaIngreso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoriaIngreso {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mensualidad" => Ok(Self::Mensualidad),
            "fianza" => Ok(Self::Fianza),
            "penalizacion" | "penalización" => Ok(Self::Penalizacion),
            "otros" => Ok(Self::Otros),
            other => Err(invalid_value("categoria", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ingreso {
    pub id: i32,
    pub contrato_id: i32,
    pub concepto: String,
    /// Cents, always positive
    pub importe: i64,
    pub fecha_pago: NaiveDate,
    pub metodo_pago: MetodoPago,
    pub categoria: CategoriaIngreso,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewIngreso {
    pub contrato_id: i32,
    pub concepto: String,
    pub importe: i64,
    pub fecha_pago: NaiveDate,
    pub metodo_pago: MetodoPago,
    pub categoria: CategoriaIngreso,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct IngresoFilter {
    pub contrato_id: Option<i32>,
    pub categoria: Option<CategoriaIngreso>,
    pub fechas: DateFilter,
}

/// Amounts are stored in cents, strictly positive and capped at `MAX_IMPORTE`.
pub fn validate_importe(importe: i64) -> Result<(), DomainError> {
    if importe <= 0 {
        return Err(DomainError::Validation("importe must be greater than 0".into()));
    }
    ensure_max_importe("importe", importe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categoria_parsing() {
        assert_eq!(
            "Penalización".parse::<CategoriaIngreso>().unwrap(),
            CategoriaIngreso::Penalizacion
        );
        assert_eq!(CategoriaIngreso::default().as_str(), "mensualidad");
        assert!("regalo".parse::<CategoriaIngreso>().is_err());
    }

    #[test]
    fn importe_must_be_positive() {
        assert!(validate_importe(1).is_ok());
        assert!(validate_importe(0).is_err());
        assert!(validate_importe(-500).is_err());
    }
}
