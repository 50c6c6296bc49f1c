//! Trastero domain entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::common::invalid_value;
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrasteroEstado {
    Disponible,
    Ocupado,
    Mantenimiento,
    Reservado,
}

impl Default for TrasteroEstado {
    fn default() -> Self {
        Self::Disponible
    }
}

impl TrasteroEstado {
    pub const ALL: [TrasteroEstado; 4] = [
        Self::Disponible,
        Self::Ocupado,
        Self::Mantenimiento,
        Self::Reservado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disponible => "disponible",
            Self::Ocupado => "ocupado",
            Self::Mantenimiento => "mantenimiento",
            Self::Reservado => "reservado",
        }
    }

    /// Whether new contracts may be signed for a unit in this state.
    pub fn is_rentable(&self) -> bool {
        !matches!(self, Self::Mantenimiento)
    }
}

impl fmt::Display for TrasteroEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrasteroEstado {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disponible" => Ok(Self::Disponible),
            "ocupado" => Ok(Self::Ocupado),
            "mantenimiento" => Ok(Self::Mantenimiento),
            "reservado" => Ok(Self::Reservado),
            other => Err(invalid_value("estado", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trastero {
    pub id: i32,
    pub local_id: i32,
    /// Unit number, unique inside the local (e.g. "A-12")
    pub numero: String,
    pub nombre: Option<String>,
    /// Square metres
    pub superficie: Option<f64>,
    /// Cents
    pub precio_mensual: i64,
    pub estado: TrasteroEstado,
    pub observaciones: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTrastero {
    pub local_id: i32,
    pub numero: String,
    pub nombre: Option<String>,
    pub superficie: Option<f64>,
    pub precio_mensual: i64,
    pub estado: TrasteroEstado,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TrasteroFilter {
    pub local_id: Option<i32>,
    pub estado: Option<TrasteroEstado>,
    pub activo: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_parsing() {
        for estado in TrasteroEstado::ALL {
            assert_eq!(estado.as_str().parse::<TrasteroEstado>().unwrap(), estado);
        }
        assert_eq!("OCUPADO".parse::<TrasteroEstado>().unwrap(), TrasteroEstado::Ocupado);
        assert!("alquilado".parse::<TrasteroEstado>().is_err());
    }

    #[test]
    fn mantenimiento_is_not_rentable() {
        assert!(!TrasteroEstado::Mantenimiento.is_rentable());
        assert!(TrasteroEstado::Reservado.is_rentable());
    }
}
