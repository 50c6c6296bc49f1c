use std::sync::Arc;

use tracing::info;

use super::commands::{CreateGastoCommand, UpdateGastoCommand};
use super::queries::ListGastosQuery;
use crate::application::ingresos::service::required_concepto;
use crate::domain::ingreso::model::validate_importe;
use crate::domain::{CategoriaGasto, DomainError, DomainResult, Gasto, NewGasto, RepositoryProvider};
use crate::shared::{non_blank, PaginatedResult};

pub struct GastoService {
    repos: Arc<dyn RepositoryProvider>,
}

impl GastoService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self, query: ListGastosQuery) -> DomainResult<PaginatedResult<Gasto>> {
        self.repos.gastos().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Gasto> {
        self.repos
            .gastos()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Gasto", id))
    }

    pub async fn create(&self, cmd: CreateGastoCommand) -> DomainResult<Gasto> {
        self.check_references(cmd.local_id, cmd.prestamo_id).await?;
        validate_importe(cmd.importe)?;

        let gasto = self
            .repos
            .gastos()
            .create(NewGasto {
                local_id: cmd.local_id,
                prestamo_id: cmd.prestamo_id,
                concepto: required_concepto(&cmd.concepto)?,
                importe: cmd.importe,
                fecha: cmd.fecha,
                categoria: cmd.categoria.unwrap_or(if cmd.prestamo_id.is_some() {
                    CategoriaGasto::CuotaPrestamo
                } else {
                    CategoriaGasto::default()
                }),
                metodo_pago: cmd.metodo_pago,
                observaciones: non_blank(cmd.observaciones),
            })
            .await?;

        info!(gasto_id = gasto.id, local_id = gasto.local_id, importe = gasto.importe, "Gasto created");
        Ok(gasto)
    }

    pub async fn update(&self, id: i32, cmd: UpdateGastoCommand) -> DomainResult<Gasto> {
        let mut gasto = self.get(id).await?;

        if let Some(local_id) = cmd.local_id {
            gasto.local_id = local_id;
        }
        if cmd.prestamo_id.is_some() {
            gasto.prestamo_id = cmd.prestamo_id;
        }
        if let Some(concepto) = cmd.concepto {
            gasto.concepto = required_concepto(&concepto)?;
        }
        if let Some(importe) = cmd.importe {
            validate_importe(importe)?;
            gasto.importe = importe;
        }
        if let Some(fecha) = cmd.fecha {
            gasto.fecha = fecha;
        }
        if let Some(categoria) = cmd.categoria {
            gasto.categoria = categoria;
        }
        if cmd.metodo_pago.is_some() {
            gasto.metodo_pago = cmd.metodo_pago;
        }
        if cmd.observaciones.is_some() {
            gasto.observaciones = non_blank(cmd.observaciones);
        }
        if cmd.local_id.is_some() || cmd.prestamo_id.is_some() {
            self.check_references(gasto.local_id, gasto.prestamo_id).await?;
        }

        self.repos.gastos().update(gasto).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.gastos().delete(id).await?;
        info!(gasto_id = id, "Gasto deleted");
        Ok(())
    }

    /// The local must exist and a linked prestamo must finance that same local.
    async fn check_references(&self, local_id: i32, prestamo_id: Option<i32>) -> DomainResult<()> {
        if self.repos.locales().find_by_id(local_id).await?.is_none() {
            return Err(DomainError::not_found("Local", local_id));
        }
        if let Some(prestamo_id) = prestamo_id {
            let prestamo = self
                .repos
                .prestamos()
                .find_by_id(prestamo_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Prestamo", prestamo_id))?;
            if prestamo.local_id != local_id {
                return Err(DomainError::Validation(format!(
                    "Prestamo {} belongs to local {}, not {}",
                    prestamo_id, prestamo.local_id, local_id
                )));
            }
        }
        Ok(())
    }
}
