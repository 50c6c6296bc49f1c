use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::dashboard::{
    DashboardStats, MesFinanciero, OcupacionLocal, RentabilidadLocal, ResumenFinanciero,
};
use crate::domain::dashboard::OcupacionCounts;
use crate::domain::Contrato;
use crate::interfaces::http::modules::contratos::dto::ContratoDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OcupacionCountsDto {
    pub total: u64,
    pub disponibles: u64,
    pub ocupados: u64,
    pub reservados: u64,
    pub mantenimiento: u64,
}

impl From<OcupacionCounts> for OcupacionCountsDto {
    fn from(c: OcupacionCounts) -> Self {
        Self {
            total: c.total,
            disponibles: c.disponibles,
            ocupados: c.ocupados,
            reservados: c.reservados,
            mantenimiento: c.mantenimiento,
        }
    }
}

/// Headline figures; money in cents, rates as percentages
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub clientes_activos: u64,
    pub locales: u64,
    pub trasteros: OcupacionCountsDto,
    pub contratos_activos: u64,
    pub tasa_ocupacion: f64,
    pub ingresos_mes: i64,
    pub gastos_mes: i64,
    pub beneficio_mes: i64,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(s: DashboardStats) -> Self {
        Self {
            clientes_activos: s.clientes_activos,
            locales: s.locales,
            trasteros: s.trasteros.into(),
            contratos_activos: s.contratos_activos,
            tasa_ocupacion: s.tasa_ocupacion,
            ingresos_mes: s.ingresos_mes,
            gastos_mes: s.gastos_mes,
            beneficio_mes: s.beneficio_mes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OcupacionLocalDto {
    pub local_id: i32,
    pub nombre: String,
    pub trasteros: OcupacionCountsDto,
    pub tasa_ocupacion: f64,
}

impl From<OcupacionLocal> for OcupacionLocalDto {
    fn from(o: OcupacionLocal) -> Self {
        Self {
            local_id: o.local_id,
            nombre: o.nombre,
            trasteros: o.counts.into(),
            tasa_ocupacion: o.tasa,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MesFinancieroDto {
    #[schema(example = "2024-03")]
    pub mes: String,
    pub ingresos: i64,
    pub gastos: i64,
    pub beneficio: i64,
}

impl From<MesFinanciero> for MesFinancieroDto {
    fn from(m: MesFinanciero) -> Self {
        Self {
            mes: m.mes,
            ingresos: m.ingresos,
            gastos: m.gastos,
            beneficio: m.beneficio,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResumenFinancieroDto {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub total_ingresos: i64,
    pub total_gastos: i64,
    pub beneficio: i64,
    pub meses: Vec<MesFinancieroDto>,
}

impl From<ResumenFinanciero> for ResumenFinancieroDto {
    fn from(r: ResumenFinanciero) -> Self {
        Self {
            desde: r.desde,
            hasta: r.hasta,
            total_ingresos: r.total_ingresos,
            total_gastos: r.total_gastos,
            beneficio: r.beneficio,
            meses: r.meses.into_iter().map(MesFinancieroDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RentabilidadLocalDto {
    pub local_id: i32,
    pub nombre: String,
    pub ingresos: i64,
    pub gastos: i64,
    pub beneficio: i64,
}

impl From<RentabilidadLocal> for RentabilidadLocalDto {
    fn from(r: RentabilidadLocal) -> Self {
        Self {
            local_id: r.local_id,
            nombre: r.nombre,
            ingresos: r.ingresos,
            gastos: r.gastos,
            beneficio: r.beneficio,
        }
    }
}

/// A contrato about to end and the days left
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContratoVencimientoDto {
    pub contrato: ContratoDto,
    pub dias_restantes: Option<i64>,
}

impl ContratoVencimientoDto {
    pub fn new(contrato: Contrato, today: NaiveDate) -> Self {
        Self {
            dias_restantes: contrato.periodo().days_until_end(today),
            contrato: contrato.into(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PeriodoParams {
    /// Defaults to January 1st of the current year
    pub desde: Option<NaiveDate>,
    /// Defaults to December 31st of the current year
    pub hasta: Option<NaiveDate>,
}

