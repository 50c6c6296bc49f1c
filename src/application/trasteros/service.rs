use std::sync::Arc;

use tracing::{debug, info};

use super::commands::{CreateTrasteroCommand, UpdateTrasteroCommand};
use super::queries::{DisponiblesQuery, ListTrasterosQuery};
use crate::application::events::{DomainEvent, SharedEventBus, TrasteroEstadoCambiadoEvent};
use crate::application::{today, DeleteOutcome};
use crate::domain::{
    ensure_max_importe, ContratoEstado, ContratoFilter, DateRange, DomainError, DomainResult,
    NewTrastero, RepositoryProvider, Trastero, TrasteroEstado, TrasteroFilter,
};
use crate::shared::{non_blank, PaginatedResult};

pub struct TrasteroService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl TrasteroService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    pub async fn list(&self, query: ListTrasterosQuery) -> DomainResult<PaginatedResult<Trastero>> {
        self.repos.trasteros().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Trastero> {
        self.repos
            .trasteros()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Trastero", id))
    }

    /// Active units outside `mantenimiento` with no blocking contract in
    /// the requested window.
    pub async fn disponibles(&self, query: DisponiblesQuery) -> DomainResult<Vec<Trastero>> {
        let periodo = DateRange::new(query.fecha_inicio, query.fecha_fin)?;
        let candidatos = self
            .repos
            .trasteros()
            .find_all(TrasteroFilter {
                local_id: query.local_id,
                activo: Some(true),
                ..Default::default()
            })
            .await?;

        let mut libres = Vec::with_capacity(candidatos.len());
        for trastero in candidatos {
            if trastero.estado == TrasteroEstado::Mantenimiento {
                continue;
            }
            let solapes = self
                .repos
                .contratos()
                .find_overlapping(trastero.id, &periodo, None)
                .await?;
            if solapes.is_empty() {
                libres.push(trastero);
            }
        }
        debug!(count = libres.len(), "Trasteros disponibles");
        Ok(libres)
    }

    pub async fn create(&self, cmd: CreateTrasteroCommand) -> DomainResult<Trastero> {
        self.ensure_local(cmd.local_id).await?;
        let numero = required_numero(&cmd.numero)?;
        validate_trastero(cmd.superficie, cmd.precio_mensual)?;
        self.ensure_unique_numero(cmd.local_id, &numero, None).await?;

        let trastero = self
            .repos
            .trasteros()
            .create(NewTrastero {
                local_id: cmd.local_id,
                numero,
                nombre: non_blank(cmd.nombre),
                superficie: cmd.superficie,
                precio_mensual: cmd.precio_mensual,
                estado: cmd.estado.unwrap_or_default(),
                observaciones: non_blank(cmd.observaciones),
            })
            .await?;

        info!(trastero_id = trastero.id, local_id = trastero.local_id, "Trastero created");
        Ok(trastero)
    }

    pub async fn update(&self, id: i32, cmd: UpdateTrasteroCommand) -> DomainResult<Trastero> {
        let mut trastero = self.get(id).await?;

        if let Some(local_id) = cmd.local_id {
            self.ensure_local(local_id).await?;
            trastero.local_id = local_id;
        }
        if let Some(numero) = cmd.numero {
            trastero.numero = required_numero(&numero)?;
        }
        if cmd.nombre.is_some() {
            trastero.nombre = non_blank(cmd.nombre);
        }
        if cmd.superficie.is_some() {
            trastero.superficie = cmd.superficie;
        }
        if let Some(precio) = cmd.precio_mensual {
            trastero.precio_mensual = precio;
        }
        if cmd.observaciones.is_some() {
            trastero.observaciones = non_blank(cmd.observaciones);
        }
        if let Some(activo) = cmd.activo {
            trastero.activo = activo;
        }
        validate_trastero(trastero.superficie, trastero.precio_mensual)?;
        self.ensure_unique_numero(trastero.local_id, &trastero.numero, Some(id))
            .await?;

        self.repos.trasteros().update(trastero).await
    }

    /// Units with contract history are deactivated instead of removed.
    pub async fn delete(&self, id: i32) -> DomainResult<DeleteOutcome> {
        let mut trastero = self.get(id).await?;

        if self.repos.contratos().count_by_trastero(id).await? > 0 {
            trastero.activo = false;
            self.repos.trasteros().update(trastero).await?;
            info!(trastero_id = id, "Trastero deactivated (has contratos)");
            return Ok(DeleteOutcome::Deactivated);
        }

        self.repos.trasteros().delete(id).await?;
        info!(trastero_id = id, "Trastero deleted");
        Ok(DeleteOutcome::Deleted)
    }

    pub async fn set_estado(&self, id: i32, estado: TrasteroEstado) -> DomainResult<Trastero> {
        let trastero = self.get(id).await?;

        if estado == TrasteroEstado::Disponible {
            let activos = self
                .repos
                .contratos()
                .find_all(ContratoFilter {
                    trastero_id: Some(id),
                    estado: Some(ContratoEstado::Activo),
                    ..Default::default()
                })
                .await?;
            let hoy = today();
            if let Some(vigente) = activos.iter().find(|c| c.is_current_on(hoy)) {
                return Err(DomainError::Conflict(format!(
                    "Trastero {} has an active contrato ({}) covering today",
                    id, vigente.id
                )));
            }
        }

        if trastero.estado != estado {
            self.repos.trasteros().set_estado(id, estado).await?;
            publish_estado_cambiado(&self.events, id, trastero.estado, estado);
        }
        self.get(id).await
    }

    async fn ensure_local(&self, local_id: i32) -> DomainResult<()> {
        self.repos
            .locales()
            .find_by_id(local_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Local", local_id))
    }

    async fn ensure_unique_numero(
        &self,
        local_id: i32,
        numero: &str,
        exclude_id: Option<i32>,
    ) -> DomainResult<()> {
        match self
            .repos
            .trasteros()
            .find_by_local_and_numero(local_id, numero)
            .await?
        {
            Some(other) if Some(other.id) != exclude_id => Err(DomainError::Conflict(format!(
                "Trastero '{}' already exists in local {}",
                numero, local_id
            ))),
            _ => Ok(()),
        }
    }
}

pub(crate) fn publish_estado_cambiado(
    events: &SharedEventBus,
    trastero_id: i32,
    anterior: TrasteroEstado,
    nuevo: TrasteroEstado,
) {
    info!(trastero_id, from = %anterior, to = %nuevo, "Trastero estado changed");
    events.publish(DomainEvent::TrasteroEstadoCambiado(TrasteroEstadoCambiadoEvent {
        trastero_id,
        estado_anterior: anterior.to_string(),
        estado_nuevo: nuevo.to_string(),
    }));
}

fn required_numero(raw: &str) -> DomainResult<String> {
    let numero = raw.trim();
    if numero.is_empty() {
        return Err(DomainError::Validation("numero is required".into()));
    }
    Ok(numero.to_string())
}

fn validate_trastero(superficie: Option<f64>, precio_mensual: i64) -> DomainResult<()> {
    if superficie.map_or(false, |s| !(s > 0.0)) {
        return Err(DomainError::Validation("superficie must be greater than 0".into()));
    }
    if precio_mensual < 0 {
        return Err(DomainError::Validation("precio_mensual must not be negative".into()));
    }
    ensure_max_importe("precio_mensual", precio_mensual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trastero_amounts() {
        assert!(validate_trastero(Some(4.5), 6000).is_ok());
        assert!(validate_trastero(None, 0).is_ok());
        assert!(validate_trastero(Some(0.0), 6000).is_err());
        assert!(validate_trastero(Some(f64::NAN), 6000).is_err());
        assert!(validate_trastero(Some(3.0), -1).is_err());
    }
}
