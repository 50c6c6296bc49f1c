use std::sync::Arc;

use tracing::info;

use super::commands::{CreateIngresoCommand, UpdateIngresoCommand};
use super::queries::ListIngresosQuery;
use crate::application::events::{DomainEvent, IngresoRegistradoEvent, SharedEventBus};
use crate::domain::ingreso::model::validate_importe;
use crate::domain::{DomainError, DomainResult, Ingreso, NewIngreso, RepositoryProvider};
use crate::shared::{non_blank, PaginatedResult};

pub struct IngresoService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl IngresoService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    pub async fn list(&self, query: ListIngresosQuery) -> DomainResult<PaginatedResult<Ingreso>> {
        self.repos.ingresos().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Ingreso> {
        self.repos
            .ingresos()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Ingreso", id))
    }

    pub async fn create(&self, cmd: CreateIngresoCommand) -> DomainResult<Ingreso> {
        if self.repos.contratos().find_by_id(cmd.contrato_id).await?.is_none() {
            return Err(DomainError::not_found("Contrato", cmd.contrato_id));
        }
        validate_importe(cmd.importe)?;

        let ingreso = self
            .repos
            .ingresos()
            .create(NewIngreso {
                contrato_id: cmd.contrato_id,
                concepto: required_concepto(&cmd.concepto)?,
                importe: cmd.importe,
                fecha_pago: cmd.fecha_pago,
                metodo_pago: cmd.metodo_pago,
                categoria: cmd.categoria.unwrap_or_default(),
                observaciones: non_blank(cmd.observaciones),
            })
            .await?;

        info!(
            ingreso_id = ingreso.id,
            contrato_id = ingreso.contrato_id,
            importe = ingreso.importe,
            "Ingreso registered"
        );
        self.events.publish(DomainEvent::IngresoRegistrado(IngresoRegistradoEvent {
            ingreso_id: ingreso.id,
            contrato_id: ingreso.contrato_id,
            importe: ingreso.importe,
            fecha_pago: ingreso.fecha_pago,
        }));
        Ok(ingreso)
    }

    pub async fn update(&self, id: i32, cmd: UpdateIngresoCommand) -> DomainResult<Ingreso> {
        let mut ingreso = self.get(id).await?;

        if let Some(concepto) = cmd.concepto {
            ingreso.concepto = required_concepto(&concepto)?;
        }
        if let Some(importe) = cmd.importe {
            validate_importe(importe)?;
            ingreso.importe = importe;
        }
        if let Some(fecha) = cmd.fecha_pago {
            ingreso.fecha_pago = fecha;
        }
        if let Some(metodo) = cmd.metodo_pago {
            ingreso.metodo_pago = metodo;
        }
        if let Some(categoria) = cmd.categoria {
            ingreso.categoria = categoria;
        }
        if cmd.observaciones.is_some() {
            ingreso.observaciones = non_blank(cmd.observaciones);
        }

        self.repos.ingresos().update(ingreso).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.ingresos().delete(id).await?;
        info!(ingreso_id = id, "Ingreso deleted");
        Ok(())
    }
}

pub(crate) fn required_concepto(raw: &str) -> DomainResult<String> {
    let concepto = raw.trim();
    if concepto.is_empty() {
        return Err(DomainError::Validation("concepto is required".into()));
    }
    Ok(concepto.to_string())
}
