//! Value types shared by several aggregates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::DomainError;

/// Payment method for ingresos and gastos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetodoPago {
    Efectivo,
    Transferencia,
    Tarjeta,
    Bizum,
    Domiciliacion,
}

impl MetodoPago {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Efectivo => "efectivo",
            Self::Transferencia => "transferencia",
            Self::Tarjeta => "tarjeta",
            Self::Bizum => "bizum",
            Self::Domiciliacion => "domiciliacion",
        }
    }
}

impl fmt::Display for MetodoPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetodoPago {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "efectivo" => Ok(Self::Efectivo),
            "transferencia" => Ok(Self::Transferencia),
            "tarjeta" => Ok(Self::Tarjeta),
            "bizum" => Ok(Self::Bizum),
            "domiciliacion" | "domiciliación" => Ok(Self::Domiciliacion),
            other => Err(invalid_value("metodo_pago", other)),
        }
    }
}

/// Inclusive date window used by list filters and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(desde: Option<NaiveDate>, hasta: Option<NaiveDate>) -> Result<Self, DomainError> {
        if let (Some(d), Some(h)) = (desde, hasta) {
            if h < d {
                return Err(DomainError::Validation(
                    "'hasta' must not be earlier than 'desde'".into(),
                ));
            }
        }
        Ok(Self { desde, hasta })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.desde.map_or(true, |d| date >= d) && self.hasta.map_or(true, |h| date <= h)
    }
}

/// Largest amount accepted for any single money field: 1,000 million euros in cents.
pub const MAX_IMPORTE: i64 = 100_000_000_000;

pub fn ensure_max_importe(field: &str, value: i64) -> Result<(), DomainError> {
    if value > MAX_IMPORTE {
        return Err(DomainError::Validation(format!(
            "{} must not exceed {} cents",
            field, MAX_IMPORTE
        )));
    }
    Ok(())
}

/// Adds two cent amounts, reporting overflow instead of wrapping.
pub fn add_importe(acc: i64, value: i64) -> Result<i64, DomainError> {
    acc.checked_add(value)
        .ok_or_else(|| DomainError::Validation("amount total is out of range".into()))
}

pub fn sum_importes(values: impl IntoIterator<Item = i64>) -> Result<i64, DomainError> {
    values.into_iter().try_fold(0, add_importe)
}

pub(crate) fn invalid_value(field: &str, value: &str) -> DomainError {
    DomainError::Validation(format!("invalid {}: '{}'", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metodo_pago_parses_case_insensitive() {
        assert_eq!("Bizum".parse::<MetodoPago>().unwrap(), MetodoPago::Bizum);
        assert_eq!(
            "domiciliación".parse::<MetodoPago>().unwrap(),
            MetodoPago::Domiciliacion
        );
        assert!("cheque".parse::<MetodoPago>().is_err());
    }

    #[test]
    fn importe_cap_is_inclusive() {
        assert!(ensure_max_importe("importe", MAX_IMPORTE).is_ok());
        assert!(matches!(
            ensure_max_importe("importe", MAX_IMPORTE + 1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn sum_reports_overflow() {
        assert_eq!(sum_importes([1, 2, 3]).unwrap(), 6);
        assert_eq!(sum_importes(std::iter::empty()).unwrap(), 0);
        assert!(matches!(
            sum_importes([i64::MAX, 1]),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn date_filter_rejects_inverted_range() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1);
        let h = NaiveDate::from_ymd_opt(2024, 4, 1);
        assert!(DateFilter::new(d, h).is_err());
    }

    #[test]
    fn date_filter_contains_is_inclusive() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let h = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let f = DateFilter::new(Some(d), Some(h)).unwrap();
        assert!(f.contains(d));
        assert!(f.contains(h));
        assert!(!f.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(DateFilter::default().contains(h));
    }
}
