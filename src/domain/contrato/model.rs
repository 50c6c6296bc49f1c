//! Contrato domain entity and date-range rules

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::invalid_value;
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContratoEstado {
    Activo,
    Finalizado,
    Cancelado,
    Pendiente,
}

impl ContratoEstado {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "activo",
            Self::Finalizado => "finalizado",
            Self::Cancelado => "cancelado",
            Self::Pendiente => "pendiente",
        }
    }

    /// Activo and pendiente contracts reserve the trastero.
    pub fn blocks_trastero(&self) -> bool {
        matches!(self, Self::Activo | Self::Pendiente)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Finalizado | Self::Cancelado)
    }
}

impl Default for ContratoEstado {
    fn default() -> Self {
        Self::Activo
    }
}

impl fmt::Display for ContratoEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContratoEstado {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activo" => Ok(Self::Activo),
            "finalizado" => Ok(Self::Finalizado),
            "cancelado" => Ok(Self::Cancelado),
            "pendiente" => Ok(Self::Pendiente),
            other => Err(invalid_value("estado", other)),
        }
    }
}

/// Closed date interval; `fin = None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub inicio: NaiveDate,
    pub fin: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(inicio: NaiveDate, fin: Option<NaiveDate>) -> Result<Self, DomainError> {
        if let Some(fin) = fin {
            if fin < inicio {
                return Err(DomainError::Validation(format!(
                    "fecha_fin ({}) must not be earlier than fecha_inicio ({})",
                    fin, inicio
                )));
            }
        }
        Ok(Self { inicio, fin })
    }

    /// `[a1, a2]` and `[b1, b2]` overlap iff `a1 <= b2 && b1 <= a2`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        let self_before_other_ends = other.fin.map_or(true, |fin| self.inicio <= fin);
        let other_before_self_ends = self.fin.map_or(true, |fin| other.inicio <= fin);
        self_before_other_ends && other_before_self_ends
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.inicio && self.fin.map_or(true, |fin| date <= fin)
    }

    /// Days until `fin` counted from `today`; `None` for open-ended ranges.
    pub fn days_until_end(&self, today: NaiveDate) -> Option<i64> {
        self.fin.map(|fin| (fin - today).num_days())
    }
}

pub const DIA_PAGO_MIN: i32 = 1;
pub const DIA_PAGO_MAX: i32 = 28;

pub fn validate_dia_pago(dia: i32) -> Result<(), DomainError> {
    if (DIA_PAGO_MIN..=DIA_PAGO_MAX).contains(&dia) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "dia_pago must be between {} and {}",
            DIA_PAGO_MIN, DIA_PAGO_MAX
        )))
    }
}

#[derive(Debug, Clone)]
pub struct Contrato {
    pub id: i32,
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    /// Cents
    pub precio_mensual: i64,
    /// Cents
    pub fianza: i64,
    pub fianza_pagada: bool,
    pub fianza_devuelta: bool,
    pub dia_pago: i32,
    pub estado: ContratoEstado,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contrato {
    pub fn periodo(&self) -> DateRange {
        DateRange {
            inicio: self.fecha_inicio,
            fin: self.fecha_fin,
        }
    }

    /// Active and covering `date`.
    pub fn is_current_on(&self, date: NaiveDate) -> bool {
        self.estado == ContratoEstado::Activo && self.periodo().contains(date)
    }
}

#[derive(Debug, Clone)]
pub struct NewContrato {
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub precio_mensual: i64,
    pub fianza: i64,
    pub fianza_pagada: bool,
    pub dia_pago: i32,
    pub estado: ContratoEstado,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContratoFilter {
    pub cliente_id: Option<i32>,
    pub trastero_id: Option<i32>,
    pub estado: Option<ContratoEstado>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(inicio: NaiveDate, fin: Option<NaiveDate>) -> DateRange {
        DateRange::new(inicio, fin).unwrap()
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(DateRange::new(d(2024, 6, 1), Some(d(2024, 5, 31))).is_err());
        assert!(DateRange::new(d(2024, 6, 1), Some(d(2024, 6, 1))).is_ok());
    }

    #[test]
    fn intersecting_ranges_overlap() {
        let a = range(d(2024, 1, 1), Some(d(2024, 6, 30)));
        let b = range(d(2024, 6, 1), Some(d(2024, 12, 31)));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn shared_boundary_day_overlaps() {
        let a = range(d(2024, 1, 1), Some(d(2024, 6, 30)));
        let b = range(d(2024, 6, 30), Some(d(2024, 12, 31)));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = range(d(2024, 1, 1), Some(d(2024, 6, 30)));
        let b = range(d(2024, 7, 1), None);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn open_ended_range_overlaps_everything_after_start() {
        let open = range(d(2024, 3, 1), None);
        assert!(open.overlaps(&range(d(2030, 1, 1), Some(d(2030, 1, 2)))));
        assert!(open.overlaps(&range(d(2023, 1, 1), None)));
        assert!(!open.overlaps(&range(d(2023, 1, 1), Some(d(2024, 2, 29)))));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = range(d(2024, 1, 1), Some(d(2024, 12, 31)));
        let inner = range(d(2024, 5, 1), Some(d(2024, 5, 2)));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn days_until_end() {
        let r = range(d(2024, 1, 1), Some(d(2024, 1, 31)));
        assert_eq!(r.days_until_end(d(2024, 1, 21)), Some(10));
        assert_eq!(range(d(2024, 1, 1), None).days_until_end(d(2024, 1, 1)), None);
    }

    #[test]
    fn dia_pago_bounds() {
        assert!(validate_dia_pago(1).is_ok());
        assert!(validate_dia_pago(28).is_ok());
        assert!(validate_dia_pago(0).is_err());
        assert!(validate_dia_pago(31).is_err());
    }

    #[test]
    fn estado_blocking() {
        assert!(ContratoEstado::Activo.blocks_trastero());
        assert!(ContratoEstado::Pendiente.blocks_trastero());
        assert!(!ContratoEstado::Finalizado.blocks_trastero());
        assert!(!ContratoEstado::Cancelado.blocks_trastero());
        assert_eq!("Pendiente".parse::<ContratoEstado>().unwrap(), ContratoEstado::Pendiente);
    }
}
