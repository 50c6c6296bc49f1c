use std::sync::Arc;

use tracing::info;

use super::commands::{CreatePrestamoCommand, UpdatePrestamoCommand};
use crate::domain::prestamo::model::validate_importes;
use crate::domain::{
    sum_importes, DomainError, DomainResult, GastoFilter, NewPrestamo, Prestamo, PrestamoFilter,
    PrestamoResumen, RepositoryProvider,
};
use crate::shared::non_blank;

pub struct PrestamoService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PrestamoService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self, filter: PrestamoFilter) -> DomainResult<Vec<Prestamo>> {
        self.repos.prestamos().list(filter).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Prestamo> {
        self.repos
            .prestamos()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prestamo", id))
    }

    /// Paid amount is the sum of every gasto linked to the prestamo.
    pub async fn resumen(&self, id: i32) -> DomainResult<PrestamoResumen> {
        let prestamo = self.get(id).await?;
        let cuotas = self
            .repos
            .gastos()
            .find_all(GastoFilter {
                prestamo_id: Some(id),
                ..Default::default()
            })
            .await?;
        let total_pagado = sum_importes(cuotas.iter().map(|g| g.importe))?;
        Ok(prestamo.resumen(total_pagado))
    }

    pub async fn create(&self, cmd: CreatePrestamoCommand) -> DomainResult<Prestamo> {
        if self.repos.locales().find_by_id(cmd.local_id).await?.is_none() {
            return Err(DomainError::not_found("Local", cmd.local_id));
        }
        validate_importes(cmd.capital_solicitado, cmd.total_a_devolver)?;
        validate_tipo_interes(cmd.tipo_interes)?;

        let prestamo = self
            .repos
            .prestamos()
            .create(NewPrestamo {
                local_id: cmd.local_id,
                entidad_bancaria: required_entidad(&cmd.entidad_bancaria)?,
                numero_prestamo: non_blank(cmd.numero_prestamo),
                capital_solicitado: cmd.capital_solicitado,
                total_a_devolver: cmd.total_a_devolver,
                tipo_interes: cmd.tipo_interes,
                fecha_concesion: cmd.fecha_concesion,
                estado: cmd.estado.unwrap_or_default(),
                observaciones: non_blank(cmd.observaciones),
            })
            .await?;

        info!(prestamo_id = prestamo.id, local_id = prestamo.local_id, "Prestamo created");
        Ok(prestamo)
    }

    pub async fn update(&self, id: i32, cmd: UpdatePrestamoCommand) -> DomainResult<Prestamo> {
        let mut p = self.get(id).await?;

        if let Some(entidad) = cmd.entidad_bancaria {
            p.entidad_bancaria = required_entidad(&entidad)?;
        }
        if cmd.numero_prestamo.is_some() {
            p.numero_prestamo = non_blank(cmd.numero_prestamo);
        }
        if let Some(capital) = cmd.capital_solicitado {
            p.capital_solicitado = capital;
        }
        if let Some(total) = cmd.total_a_devolver {
            p.total_a_devolver = total;
        }
        if cmd.tipo_interes.is_some() {
            p.tipo_interes = cmd.tipo_interes;
        }
        if let Some(fecha) = cmd.fecha_concesion {
            p.fecha_concesion = fecha;
        }
        if let Some(estado) = cmd.estado {
            p.estado = estado;
        }
        if cmd.observaciones.is_some() {
            p.observaciones = non_blank(cmd.observaciones);
        }
        validate_importes(p.capital_solicitado, p.total_a_devolver)?;
        validate_tipo_interes(p.tipo_interes)?;

        self.repos.prestamos().update(p).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.get(id).await?;
        let cuotas = self.repos.gastos().count_by_prestamo(id).await?;
        if cuotas > 0 {
            return Err(DomainError::Conflict(format!(
                "Prestamo {} has {} linked gastos and cannot be deleted",
                id, cuotas
            )));
        }
        self.repos.prestamos().delete(id).await?;
        info!(prestamo_id = id, "Prestamo deleted");
        Ok(())
    }
}

fn required_entidad(raw: &str) -> DomainResult<String> {
    let entidad = raw.trim();
    if entidad.is_empty() {
        return Err(DomainError::Validation("entidad_bancaria is required".into()));
    }
    Ok(entidad.to_string())
}

fn validate_tipo_interes(tipo: Option<i32>) -> DomainResult<()> {
    match tipo {
        Some(bps) if bps < 0 => Err(DomainError::Validation(
            "tipo_interes must not be negative".into(),
        )),
        _ => Ok(()),
    }
}
