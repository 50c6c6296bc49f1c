//! Read models and pure calculations behind the dashboard.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::common::add_importe;
use super::trastero::{Trastero, TrasteroEstado};
use super::DomainError;

/// Occupied units over active units, as a percentage with two decimals.
pub fn tasa_ocupacion(ocupados: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = ocupados as f64 * 100.0 / total as f64;
    (pct * 100.0).round() / 100.0
}

/// Per-estado counters for a set of trasteros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcupacionCounts {
    pub total: u64,
    pub disponibles: u64,
    pub ocupados: u64,
    pub reservados: u64,
    pub mantenimiento: u64,
}

impl OcupacionCounts {
    /// Counts only active trasteros.
    pub fn from_trasteros<'a>(trasteros: impl IntoIterator<Item = &'a Trastero>) -> Self {
        let mut counts = Self::default();
        for t in trasteros.into_iter().filter(|t| t.activo) {
            counts.total += 1;
            match t.estado {
                TrasteroEstado::Disponible => counts.disponibles += 1,
                TrasteroEstado::Ocupado => counts.ocupados += 1,
                TrasteroEstado::Reservado => counts.reservados += 1,
                TrasteroEstado::Mantenimiento => counts.mantenimiento += 1,
            }
        }
        counts
    }

    pub fn tasa(&self) -> f64 {
        tasa_ocupacion(self.ocupados, self.total)
    }
}

/// Totals for a single `YYYY-MM` bucket (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub ingresos: i64,
    pub gastos: i64,
}

impl MonthTotals {
    pub fn beneficio(&self) -> i64 {
        self.ingresos - self.gastos
    }
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Buckets dated amounts by month. Every month in `[desde, hasta]` gets
/// an entry, even when empty.
pub fn monthly_breakdown(
    desde: NaiveDate,
    hasta: NaiveDate,
    ingresos: impl IntoIterator<Item = (NaiveDate, i64)>,
    gastos: impl IntoIterator<Item = (NaiveDate, i64)>,
) -> Result<BTreeMap<String, MonthTotals>, DomainError> {
    let mut months = BTreeMap::new();
    let (mut y, mut m) = (desde.year(), desde.month());
    while (y, m) <= (hasta.year(), hasta.month()) {
        months.insert(format!("{:04}-{:02}", y, m), MonthTotals::default());
        if m == 12 {
            y += 1;
            m = 1;
        } else {
            m += 1;
        }
    }
    for (fecha, importe) in ingresos {
        if let Some(bucket) = months.get_mut(&month_key(fecha)) {
            bucket.ingresos = add_importe(bucket.ingresos, importe)?;
        }
    }
    for (fecha, importe) in gastos {
        if let Some(bucket) = months.get_mut(&month_key(fecha)) {
            bucket.gastos = add_importe(bucket.gastos, importe)?;
        }
    }
    Ok(months)
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next.and_then(|n| n.pred_opt()).unwrap_or(date);
    (first, last)
}

/// January 1st and December 31st of the year containing `date`.
pub fn year_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
    (first, last)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn trastero(estado: TrasteroEstado, activo: bool) -> Trastero {
        Trastero {
            id: 1,
            local_id: 1,
            numero: "1".into(),
            nombre: None,
            superficie: None,
            precio_mensual: 5000,
            estado,
            observaciones: None,
            activo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tasa_ocupacion_handles_empty_and_rounds() {
        assert_eq!(tasa_ocupacion(0, 0), 0.0);
        assert_eq!(tasa_ocupacion(3, 4), 75.0);
        assert_eq!(tasa_ocupacion(1, 3), 33.33);
        assert_eq!(tasa_ocupacion(2, 3), 66.67);
    }

    #[test]
    fn counts_skip_inactive_trasteros() {
        let ts = vec![
            trastero(TrasteroEstado::Ocupado, true),
            trastero(TrasteroEstado::Ocupado, true),
            trastero(TrasteroEstado::Disponible, true),
            trastero(TrasteroEstado::Mantenimiento, true),
            trastero(TrasteroEstado::Ocupado, false),
        ];
        let c = OcupacionCounts::from_trasteros(&ts);
        assert_eq!(c.total, 4);
        assert_eq!(c.ocupados, 2);
        assert_eq!(c.mantenimiento, 1);
        assert_eq!(c.tasa(), 50.0);
    }

    #[test]
    fn monthly_breakdown_fills_every_month() {
        let months = monthly_breakdown(
            d(2024, 11, 15),
            d(2025, 2, 3),
            vec![(d(2024, 11, 20), 5000), (d(2025, 2, 1), 7000), (d(2025, 3, 1), 1)],
            vec![(d(2024, 11, 2), 1200)],
        )
        .unwrap();
        let keys: Vec<_> = months.keys().cloned().collect();
        assert_eq!(keys, vec!["2024-11", "2024-12", "2025-01", "2025-02"]);
        assert_eq!(months["2024-11"].beneficio(), 3800);
        assert_eq!(months["2024-12"], MonthTotals::default());
        assert_eq!(months["2025-02"].ingresos, 7000);
    }

    #[test]
    fn monthly_breakdown_reports_overflow() {
        let result = monthly_breakdown(
            d(2024, 1, 1),
            d(2024, 1, 31),
            vec![(d(2024, 1, 2), i64::MAX), (d(2024, 1, 3), 1)],
            vec![],
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn month_bounds_handles_december_and_leap_years() {
        assert_eq!(month_bounds(d(2024, 12, 10)), (d(2024, 12, 1), d(2024, 12, 31)));
        assert_eq!(month_bounds(d(2024, 2, 10)), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(year_bounds(d(2025, 6, 1)), (d(2025, 1, 1), d(2025, 12, 31)));
    }
}
