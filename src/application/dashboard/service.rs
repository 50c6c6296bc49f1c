//! Dashboard queries
//!
//! Aggregation happens in memory over repository results; the pure
//! arithmetic lives in `domain::dashboard`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::today;
use crate::domain::dashboard::{monthly_breakdown, month_bounds, year_bounds, OcupacionCounts};
use crate::domain::{
    add_importe, sum_importes, ContratoEstado, ContratoFilter, DateFilter, DomainResult,
    GastoFilter, IngresoFilter, RepositoryProvider, TrasteroFilter,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub clientes_activos: u64,
    pub locales: u64,
    pub trasteros: OcupacionCounts,
    pub contratos_activos: u64,
    pub tasa_ocupacion: f64,
    pub ingresos_mes: i64,
    pub gastos_mes: i64,
    pub beneficio_mes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OcupacionLocal {
    pub local_id: i32,
    pub nombre: String,
    pub counts: OcupacionCounts,
    pub tasa: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesFinanciero {
    /// `YYYY-MM`
    pub mes: String,
    pub ingresos: i64,
    pub gastos: i64,
    pub beneficio: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumenFinanciero {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub total_ingresos: i64,
    pub total_gastos: i64,
    pub beneficio: i64,
    pub meses: Vec<MesFinanciero>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentabilidadLocal {
    pub local_id: i32,
    pub nombre: String,
    pub ingresos: i64,
    pub gastos: i64,
    pub beneficio: i64,
}

pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn stats(&self) -> DomainResult<DashboardStats> {
        let clientes_activos = self.repos.clientes().count_activos().await?;
        let locales = self.repos.locales().find_all().await?.len() as u64;
        let trasteros = self
            .repos
            .trasteros()
            .find_all(TrasteroFilter::default())
            .await?;
        let counts = OcupacionCounts::from_trasteros(&trasteros);
        let contratos_activos = self
            .repos
            .contratos()
            .find_all(ContratoFilter {
                estado: Some(ContratoEstado::Activo),
                ..Default::default()
            })
            .await?
            .len() as u64;

        let (desde, hasta) = month_bounds(today());
        let fechas = DateFilter {
            desde: Some(desde),
            hasta: Some(hasta),
        };
        let (ingresos_mes, gastos_mes) = self.totals(fechas).await?;

        Ok(DashboardStats {
            clientes_activos,
            locales,
            tasa_ocupacion: counts.tasa(),
            trasteros: counts,
            contratos_activos,
            ingresos_mes,
            gastos_mes,
            beneficio_mes: ingresos_mes - gastos_mes,
        })
    }

    pub async fn ocupacion(&self) -> DomainResult<Vec<OcupacionLocal>> {
        let locales = self.repos.locales().find_all().await?;
        let trasteros = self
            .repos
            .trasteros()
            .find_all(TrasteroFilter::default())
            .await?;

        Ok(locales
            .into_iter()
            .map(|local| {
                let counts =
                    OcupacionCounts::from_trasteros(trasteros.iter().filter(|t| t.local_id == local.id));
                OcupacionLocal {
                    local_id: local.id,
                    nombre: local.nombre,
                    tasa: counts.tasa(),
                    counts,
                }
            })
            .collect())
    }

    /// Totals plus a `YYYY-MM` breakdown; defaults to the current year.
    pub async fn financiero(
        &self,
        desde: Option<NaiveDate>,
        hasta: Option<NaiveDate>,
    ) -> DomainResult<ResumenFinanciero> {
        let (desde, hasta) = resolve_window(desde, hasta)?;
        let fechas = DateFilter {
            desde: Some(desde),
            hasta: Some(hasta),
        };

        let ingresos = self
            .repos
            .ingresos()
            .find_all(IngresoFilter {
                fechas,
                ..Default::default()
            })
            .await?;
        let gastos = self
            .repos
            .gastos()
            .find_all(GastoFilter {
                fechas,
                ..Default::default()
            })
            .await?;

        let total_ingresos = sum_importes(ingresos.iter().map(|i| i.importe))?;
        let total_gastos = sum_importes(gastos.iter().map(|g| g.importe))?;
        let meses = monthly_breakdown(
            desde,
            hasta,
            ingresos.iter().map(|i| (i.fecha_pago, i.importe)),
            gastos.iter().map(|g| (g.fecha, g.importe)),
        )?
        .into_iter()
        .map(|(mes, t)| MesFinanciero {
            mes,
            ingresos: t.ingresos,
            gastos: t.gastos,
            beneficio: t.beneficio(),
        })
        .collect();

        Ok(ResumenFinanciero {
            desde,
            hasta,
            total_ingresos,
            total_gastos,
            beneficio: total_ingresos - total_gastos,
            meses,
        })
    }

    /// Per-local result: ingresos reach a local through contrato -> trastero.
    pub async fn rentabilidad(
        &self,
        desde: Option<NaiveDate>,
        hasta: Option<NaiveDate>,
    ) -> DomainResult<Vec<RentabilidadLocal>> {
        let (desde, hasta) = resolve_window(desde, hasta)?;
        let fechas = DateFilter {
            desde: Some(desde),
            hasta: Some(hasta),
        };

        let locales = self.repos.locales().find_all().await?;
        let trastero_local: HashMap<i32, i32> = self
            .repos
            .trasteros()
            .find_all(TrasteroFilter::default())
            .await?
            .into_iter()
            .map(|t| (t.id, t.local_id))
            .collect();
        let contrato_local: HashMap<i32, i32> = self
            .repos
            .contratos()
            .find_all(ContratoFilter::default())
            .await?
            .into_iter()
            .filter_map(|c| trastero_local.get(&c.trastero_id).map(|l| (c.id, *l)))
            .collect();

        let mut ingresos_por_local: HashMap<i32, i64> = HashMap::new();
        for ingreso in self
            .repos
            .ingresos()
            .find_all(IngresoFilter {
                fechas,
                ..Default::default()
            })
            .await?
        {
            if let Some(local_id) = contrato_local.get(&ingreso.contrato_id) {
                let total = ingresos_por_local.entry(*local_id).or_default();
                *total = add_importe(*total, ingreso.importe)?;
            }
        }

        let mut gastos_por_local: HashMap<i32, i64> = HashMap::new();
        for gasto in self
            .repos
            .gastos()
            .find_all(GastoFilter {
                fechas,
                ..Default::default()
            })
            .await?
        {
            let total = gastos_por_local.entry(gasto.local_id).or_default();
            *total = add_importe(*total, gasto.importe)?;
        }

        Ok(locales
            .into_iter()
            .map(|local| {
                let ingresos = ingresos_por_local.get(&local.id).copied().unwrap_or(0);
                let gastos = gastos_por_local.get(&local.id).copied().unwrap_or(0);
                RentabilidadLocal {
                    local_id: local.id,
                    nombre: local.nombre,
                    ingresos,
                    gastos,
                    beneficio: ingresos - gastos,
                }
            })
            .collect())
    }

    async fn totals(&self, fechas: DateFilter) -> DomainResult<(i64, i64)> {
        let ingresos = self
            .repos
            .ingresos()
            .find_all(IngresoFilter {
                fechas,
                ..Default::default()
            })
            .await?;
        let gastos = self
            .repos
            .gastos()
            .find_all(GastoFilter {
                fechas,
                ..Default::default()
            })
            .await?;
        Ok((
            sum_importes(ingresos.iter().map(|i| i.importe))?,
            sum_importes(gastos.iter().map(|g| g.importe))?,
        ))
    }
}

/// Missing bounds fall back to the current year.
fn resolve_window(
    desde: Option<NaiveDate>,
    hasta: Option<NaiveDate>,
) -> DomainResult<(NaiveDate, NaiveDate)> {
    let (inicio_anio, fin_anio) = year_bounds(today());
    let desde = desde.unwrap_or(inicio_anio);
    let hasta = hasta.unwrap_or(fin_anio);
    DateFilter::new(Some(desde), Some(hasta))?;
    Ok((desde, hasta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn window_defaults_to_current_year() {
        let (desde, hasta) = resolve_window(None, None).unwrap();
        assert_eq!((desde, hasta), year_bounds(today()));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let h = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            resolve_window(Some(d), Some(h)),
            Err(DomainError::Validation(_))
        ));
    }
}
