//! Dashboard: read-only aggregates over the other contexts.

pub mod service;

pub use service::{
    DashboardService, DashboardStats, MesFinanciero, OcupacionLocal, RentabilidadLocal,
    ResumenFinanciero,
};
