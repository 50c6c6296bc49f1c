//! Contrato lifecycle
//!
//! Every command that can change which contracts block a trastero ends
//! with `sync_trastero`, which derives the unit's estado from the
//! remaining activo/pendiente contracts.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use super::commands::{CreateContratoCommand, FinalizarContratoCommand, UpdateContratoCommand};
use super::queries::ListContratosQuery;
use crate::application::events::{
    ContratoCerradoEvent, ContratoCreadoEvent, DomainEvent, SharedEventBus,
};
use crate::application::today;
use crate::application::trasteros::service::publish_estado_cambiado;
use crate::domain::contrato::model::validate_dia_pago;
use crate::domain::{
    ensure_max_importe, Contrato, ContratoEstado, ContratoFilter, DateRange, DomainError,
    DomainResult, Ingreso, IngresoFilter, NewContrato, RepositoryProvider, TrasteroEstado,
};
use crate::shared::{non_blank, PaginatedResult};

/// Upper bound for `proximos_vencer`.
pub const MAX_DIAS_VENCIMIENTO: i64 = 365;

pub struct ContratoService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl ContratoService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    pub async fn list(&self, query: ListContratosQuery) -> DomainResult<PaginatedResult<Contrato>> {
        self.repos.contratos().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Contrato> {
        self.repos
            .contratos()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contrato", id))
    }

    pub async fn ingresos(&self, id: i32) -> DomainResult<Vec<Ingreso>> {
        self.get(id).await?;
        self.repos
            .ingresos()
            .find_all(IngresoFilter {
                contrato_id: Some(id),
                ..Default::default()
            })
            .await
    }

    /// Activo contracts whose `fecha_fin` falls within the next `dias` days.
    pub async fn proximos_vencer(&self, dias: i64) -> DomainResult<Vec<Contrato>> {
        if !(0..=MAX_DIAS_VENCIMIENTO).contains(&dias) {
            return Err(DomainError::Validation(format!(
                "dias must be between 0 and {}",
                MAX_DIAS_VENCIMIENTO
            )));
        }
        let desde = today();
        let hasta = desde
            .checked_add_signed(Duration::days(dias))
            .ok_or_else(|| DomainError::Validation(format!("dias {} is out of range", dias)))?;
        self.repos.contratos().find_expiring(desde, hasta).await
    }

    pub async fn create(&self, cmd: CreateContratoCommand) -> DomainResult<Contrato> {
        let trastero = self
            .repos
            .trasteros()
            .find_by_id(cmd.trastero_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Trastero", cmd.trastero_id))?;
        let cliente = self
            .repos
            .clientes()
            .find_by_id(cmd.cliente_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cliente", cmd.cliente_id))?;

        if !cliente.activo {
            return Err(DomainError::Validation(format!(
                "Cliente {} is not active",
                cliente.id
            )));
        }
        if !trastero.activo || !trastero.estado.is_rentable() {
            return Err(DomainError::Conflict(format!(
                "Trastero {} is not available for rent ({})",
                trastero.id,
                if trastero.activo { trastero.estado.as_str() } else { "inactivo" }
            )));
        }

        let estado = cmd.estado.unwrap_or_default();
        if !estado.blocks_trastero() {
            return Err(DomainError::Validation(
                "A new contrato must be 'activo' or 'pendiente'".into(),
            ));
        }
        let periodo = DateRange::new(cmd.fecha_inicio, cmd.fecha_fin)?;
        validate_dia_pago(cmd.dia_pago)?;
        let precio_mensual = cmd.precio_mensual.unwrap_or(trastero.precio_mensual);
        validate_importes(precio_mensual, cmd.fianza)?;

        self.ensure_no_overlap(trastero.id, &periodo, None).await?;

        let contrato = self
            .repos
            .contratos()
            .create(NewContrato {
                trastero_id: trastero.id,
                cliente_id: cliente.id,
                fecha_inicio: periodo.inicio,
                fecha_fin: periodo.fin,
                precio_mensual,
                fianza: cmd.fianza,
                fianza_pagada: cmd.fianza_pagada,
                dia_pago: cmd.dia_pago,
                estado,
                observaciones: non_blank(cmd.observaciones),
            })
            .await?;

        info!(
            contrato_id = contrato.id,
            trastero_id = contrato.trastero_id,
            cliente_id = contrato.cliente_id,
            "Contrato created"
        );
        self.sync_trastero(contrato.trastero_id).await?;
        self.events.publish(DomainEvent::ContratoCreado(ContratoCreadoEvent {
            contrato_id: contrato.id,
            trastero_id: contrato.trastero_id,
            cliente_id: contrato.cliente_id,
            fecha_inicio: contrato.fecha_inicio,
            fecha_fin: contrato.fecha_fin,
            precio_mensual: contrato.precio_mensual,
        }));
        Ok(contrato)
    }

    pub async fn update(&self, id: i32, cmd: UpdateContratoCommand) -> DomainResult<Contrato> {
        let mut contrato = self.get(id).await?;
        let periodo_anterior = contrato.periodo();
        let estado_anterior = contrato.estado;

        if let Some(inicio) = cmd.fecha_inicio {
            contrato.fecha_inicio = inicio;
        }
        if cmd.fecha_fin.is_some() {
            contrato.fecha_fin = cmd.fecha_fin;
        }
        if let Some(precio) = cmd.precio_mensual {
            contrato.precio_mensual = precio;
        }
        if let Some(fianza) = cmd.fianza {
            contrato.fianza = fianza;
        }
        if let Some(pagada) = cmd.fianza_pagada {
            contrato.fianza_pagada = pagada;
        }
        if let Some(dia) = cmd.dia_pago {
            validate_dia_pago(dia)?;
            contrato.dia_pago = dia;
        }
        if let Some(estado) = cmd.estado {
            contrato.estado = estado;
        }
        if cmd.observaciones.is_some() {
            contrato.observaciones = non_blank(cmd.observaciones);
        }

        let periodo = DateRange::new(contrato.fecha_inicio, contrato.fecha_fin)?;
        validate_importes(contrato.precio_mensual, contrato.fianza)?;

        let reblocks = contrato.estado.blocks_trastero()
            && (periodo != periodo_anterior || !estado_anterior.blocks_trastero());
        if reblocks {
            self.ensure_no_overlap(contrato.trastero_id, &periodo, Some(id))
                .await?;
        }

        let contrato = self.repos.contratos().update(contrato).await?;
        info!(contrato_id = id, "Contrato updated");
        if contrato.estado != estado_anterior {
            self.sync_trastero(contrato.trastero_id).await?;
        }
        Ok(contrato)
    }

    pub async fn finalizar(&self, id: i32, cmd: FinalizarContratoCommand) -> DomainResult<Contrato> {
        let mut contrato = self.get(id).await?;
        ensure_open(&contrato)?;

        let fecha_fin = cmd.fecha_fin.unwrap_or_else(today);
        DateRange::new(contrato.fecha_inicio, Some(fecha_fin))?;
        contrato.fecha_fin = Some(fecha_fin);
        contrato.estado = ContratoEstado::Finalizado;

        let contrato = self.repos.contratos().update(contrato).await?;
        info!(contrato_id = id, %fecha_fin, "Contrato finalizado");
        self.sync_trastero(contrato.trastero_id).await?;
        self.events.publish(DomainEvent::ContratoFinalizado(ContratoCerradoEvent {
            contrato_id: contrato.id,
            trastero_id: contrato.trastero_id,
            fecha_fin: contrato.fecha_fin,
        }));
        Ok(contrato)
    }

    pub async fn cancelar(&self, id: i32) -> DomainResult<Contrato> {
        let mut contrato = self.get(id).await?;
        ensure_open(&contrato)?;
        contrato.estado = ContratoEstado::Cancelado;

        let contrato = self.repos.contratos().update(contrato).await?;
        info!(contrato_id = id, "Contrato cancelado");
        self.sync_trastero(contrato.trastero_id).await?;
        self.events.publish(DomainEvent::ContratoCancelado(ContratoCerradoEvent {
            contrato_id: contrato.id,
            trastero_id: contrato.trastero_id,
            fecha_fin: contrato.fecha_fin,
        }));
        Ok(contrato)
    }

    /// Only closed contracts can have their deposit returned.
    pub async fn devolver_fianza(&self, id: i32) -> DomainResult<Contrato> {
        let mut contrato = self.get(id).await?;
        if !contrato.estado.is_closed() {
            return Err(DomainError::Conflict(format!(
                "Contrato {} is still {}; close it before returning the fianza",
                id, contrato.estado
            )));
        }
        if contrato.fianza_devuelta {
            return Err(DomainError::Conflict(format!(
                "Fianza of contrato {} was already returned",
                id
            )));
        }
        contrato.fianza_devuelta = true;
        let contrato = self.repos.contratos().update(contrato).await?;
        info!(contrato_id = id, fianza = contrato.fianza, "Fianza devuelta");
        Ok(contrato)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        let contrato = self.get(id).await?;
        let ingresos = self.repos.ingresos().count_by_contrato(id).await?;
        if ingresos > 0 {
            return Err(DomainError::Conflict(format!(
                "Contrato {} has {} ingresos and cannot be deleted",
                id, ingresos
            )));
        }
        self.repos.contratos().delete(id).await?;
        info!(contrato_id = id, "Contrato deleted");
        if contrato.estado.blocks_trastero() {
            self.sync_trastero(contrato.trastero_id).await?;
        }
        Ok(())
    }

    async fn ensure_no_overlap(
        &self,
        trastero_id: i32,
        periodo: &DateRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<()> {
        let solapes = self
            .repos
            .contratos()
            .find_overlapping(trastero_id, periodo, exclude_id)
            .await?;
        if let Some(existing) = solapes.first() {
            warn!(
                trastero_id,
                conflicting_contrato = existing.id,
                "Rejected overlapping contrato"
            );
            return Err(DomainError::Conflict(format!(
                "Trastero {} already has contrato {} from {} to {} in that period",
                trastero_id,
                existing.id,
                existing.fecha_inicio,
                existing
                    .fecha_fin
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "open end".into())
            )));
        }
        Ok(())
    }

    /// Derive the unit's estado from its blocking contracts. Units in
    /// `mantenimiento` are left alone.
    async fn sync_trastero(&self, trastero_id: i32) -> DomainResult<()> {
        let Some(trastero) = self.repos.trasteros().find_by_id(trastero_id).await? else {
            return Ok(());
        };
        if trastero.estado == TrasteroEstado::Mantenimiento {
            return Ok(());
        }

        let contratos = self
            .repos
            .contratos()
            .find_all(ContratoFilter {
                trastero_id: Some(trastero_id),
                ..Default::default()
            })
            .await?;
        let nuevo = estado_for(contratos.iter().map(|c| c.estado));

        if nuevo != trastero.estado {
            self.repos.trasteros().set_estado(trastero_id, nuevo).await?;
            publish_estado_cambiado(&self.events, trastero_id, trastero.estado, nuevo);
        }
        Ok(())
    }
}

/// `activo` wins over `pendiente`; no blocking contract frees the unit.
fn estado_for(estados: impl Iterator<Item = ContratoEstado>) -> TrasteroEstado {
    let mut reservado = false;
    for estado in estados {
        match estado {
            ContratoEstado::Activo => return TrasteroEstado::Ocupado,
            ContratoEstado::Pendiente => reservado = true,
            ContratoEstado::Finalizado | ContratoEstado::Cancelado => {}
        }
    }
    if reservado {
        TrasteroEstado::Reservado
    } else {
        TrasteroEstado::Disponible
    }
}

fn ensure_open(contrato: &Contrato) -> DomainResult<()> {
    if contrato.estado.is_closed() {
        return Err(DomainError::Conflict(format!(
            "Contrato {} is already {}",
            contrato.id, contrato.estado
        )));
    }
    Ok(())
}

fn validate_importes(precio_mensual: i64, fianza: i64) -> DomainResult<()> {
    if precio_mensual < 0 {
        return Err(DomainError::Validation("precio_mensual must not be negative".into()));
    }
    if fianza < 0 {
        return Err(DomainError::Validation("fianza must not be negative".into()));
    }
    ensure_max_importe("precio_mensual", precio_mensual)?;
    ensure_max_importe("fianza", fianza)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_follows_blocking_contracts() {
        use ContratoEstado::*;
        assert_eq!(estado_for(std::iter::empty()), TrasteroEstado::Disponible);
        assert_eq!(
            estado_for([Finalizado, Cancelado].into_iter()),
            TrasteroEstado::Disponible
        );
        assert_eq!(estado_for([Pendiente].into_iter()), TrasteroEstado::Reservado);
        assert_eq!(
            estado_for([Pendiente, Activo, Finalizado].into_iter()),
            TrasteroEstado::Ocupado
        );
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(validate_importes(5000, 0).is_ok());
        assert!(validate_importes(-1, 0).is_err());
        assert!(validate_importes(5000, -10).is_err());
    }
}
