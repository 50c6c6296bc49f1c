use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::{ensure_max_importe, invalid_value};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrestamoEstado {
    Activo,
    Cancelado,
    Finalizado,
}

impl Default for PrestamoEstado {
    fn default() -> Self {
        Self::Activo
    }
}

impl PrestamoEstado {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "activo",
            Self::Cancelado => "cancelado",
            Self::Finalizado => "finalizado",
        }
    }
}

impl fmt::Display for PrestamoEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrestamoEstado {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activo" => Ok(Self::Activo),
            "cancelado" => Ok(Self::Cancelado),
            "finalizado" => Ok(Self::Finalizado),
            other => Err(invalid_value("estado", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prestamo {
    pub id: i32,
    pub local_id: i32,
    pub entidad_bancaria: String,
    pub numero_prestamo: Option<String>,
    /// Cents
    pub capital_solicitado: i64,
    /// Cents, capital plus interest
    pub total_a_devolver: i64,
    /// Basis points (350 = 3.50 %)
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: NaiveDate,
    pub estado: PrestamoEstado,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prestamo {
    /// Repayment summary given the sum of linked gastos.
    pub fn resumen(&self, total_pagado: i64) -> PrestamoResumen {
        let pendiente = (self.total_a_devolver - total_pagado).max(0);
        let porcentaje = if self.total_a_devolver > 0 {
            let pct = total_pagado as f64 * 100.0 / self.total_a_devolver as f64;
            (pct.clamp(0.0, 100.0) * 100.0).round() / 100.0
        } else {
            0.0
        };
        PrestamoResumen {
            prestamo_id: self.id,
            total_a_devolver: self.total_a_devolver,
            total_pagado,
            importe_pendiente: pendiente,
            porcentaje_amortizado: porcentaje,
        }
    }
}

pub fn validate_importes(capital_solicitado: i64, total_a_devolver: i64) -> Result<(), DomainError> {
    if capital_solicitado <= 0 {
        return Err(DomainError::Validation(
            "capital_solicitado must be greater than 0".into(),
        ));
    }
    if total_a_devolver < capital_solicitado {
        return Err(DomainError::Validation(
            "total_a_devolver must be greater than or equal to capital_solicitado".into(),
        ));
    }
    ensure_max_importe("total_a_devolver", total_a_devolver)
}

#[derive(Debug, Clone)]
pub struct NewPrestamo {
    pub local_id: i32,
    pub entidad_bancaria: String,
    pub numero_prestamo: Option<String>,
    pub capital_solicitado: i64,
    pub total_a_devolver: i64,
    pub tipo_interes: Option<i32>,
    pub fecha_concesion: NaiveDate,
    pub estado: PrestamoEstado,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PrestamoFilter {
    pub local_id: Option<i32>,
    pub estado: Option<PrestamoEstado>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrestamoResumen {
    pub prestamo_id: i32,
    pub total_a_devolver: i64,
    pub total_pagado: i64,
    pub importe_pendiente: i64,
    pub porcentaje_amortizado: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prestamo(total: i64) -> Prestamo {
        Prestamo {
            id: 3,
            local_id: 1,
            entidad_bancaria: "Banco Sabadell".into(),
            numero_prestamo: None,
            capital_solicitado: total,
            total_a_devolver: total,
            tipo_interes: Some(350),
            fecha_concesion: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            estado: PrestamoEstado::Activo,
            observaciones: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn resumen_partial_payment() {
        let r = prestamo(100_000_00).resumen(25_000_00);
        assert_eq!(r.importe_pendiente, 75_000_00);
        assert_eq!(r.porcentaje_amortizado, 25.0);
    }

    #[test]
    fn resumen_overpayment_floors_pending_at_zero() {
        let r = prestamo(1_000_00).resumen(1_200_00);
        assert_eq!(r.importe_pendiente, 0);
        assert_eq!(r.porcentaje_amortizado, 100.0);
    }

    #[test]
    fn resumen_rounds_to_two_decimals() {
        let r = prestamo(300).resumen(100);
        assert_eq!(r.porcentaje_amortizado, 33.33);
    }

    #[test]
    fn importes_validation() {
        assert!(validate_importes(1000, 1200).is_ok());
        assert!(validate_importes(1000, 1000).is_ok());
        assert!(validate_importes(1000, 999).is_err());
        assert!(validate_importes(0, 10).is_err());
    }
}
