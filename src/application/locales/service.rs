use std::sync::Arc;

use tracing::info;

use super::commands::{CreateLocalCommand, UpdateLocalCommand};
use crate::domain::{
    ensure_max_importe, DomainError, DomainResult, Local, NewLocal, RepositoryProvider, Trastero,
    TrasteroFilter,
};
use crate::shared::non_blank;

pub struct LocalService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LocalService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Local>> {
        self.repos.locales().find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Local> {
        self.repos
            .locales()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Local", id))
    }

    pub async fn trasteros(&self, id: i32) -> DomainResult<Vec<Trastero>> {
        self.get(id).await?;
        self.repos
            .trasteros()
            .find_all(TrasteroFilter {
                local_id: Some(id),
                ..Default::default()
            })
            .await
    }

    pub async fn create(&self, cmd: CreateLocalCommand) -> DomainResult<Local> {
        let nombre = cmd.nombre.trim().to_string();
        if nombre.is_empty() {
            return Err(DomainError::Validation("nombre is required".into()));
        }
        if let Some(direccion_id) = cmd.direccion_id {
            self.ensure_direccion(direccion_id).await?;
        }
        validate_amounts(cmd.superficie_total, cmd.valor_catastral, cmd.precio_compra)?;
        self.ensure_unique_nombre(&nombre, None).await?;

        let local = self
            .repos
            .locales()
            .create(NewLocal {
                nombre,
                direccion_id: cmd.direccion_id,
                superficie_total: cmd.superficie_total,
                referencia_catastral: non_blank(cmd.referencia_catastral),
                valor_catastral: cmd.valor_catastral,
                fecha_compra: cmd.fecha_compra,
                precio_compra: cmd.precio_compra,
            })
            .await?;

        info!(local_id = local.id, nombre = %local.nombre, "Local created");
        Ok(local)
    }

    pub async fn update(&self, id: i32, cmd: UpdateLocalCommand) -> DomainResult<Local> {
        let mut local = self.get(id).await?;

        if let Some(nombre) = cmd.nombre {
            let nombre = nombre.trim().to_string();
            if nombre.is_empty() {
                return Err(DomainError::Validation("nombre is required".into()));
            }
            self.ensure_unique_nombre(&nombre, Some(id)).await?;
            local.nombre = nombre;
        }
        if let Some(direccion_id) = cmd.direccion_id {
            self.ensure_direccion(direccion_id).await?;
            local.direccion_id = Some(direccion_id);
        }
        if cmd.superficie_total.is_some() {
            local.superficie_total = cmd.superficie_total;
        }
        if cmd.referencia_catastral.is_some() {
            local.referencia_catastral = non_blank(cmd.referencia_catastral);
        }
        if cmd.valor_catastral.is_some() {
            local.valor_catastral = cmd.valor_catastral;
        }
        if cmd.fecha_compra.is_some() {
            local.fecha_compra = cmd.fecha_compra;
        }
        if cmd.precio_compra.is_some() {
            local.precio_compra = cmd.precio_compra;
        }
        if let Some(activo) = cmd.activo {
            local.activo = activo;
        }
        validate_amounts(local.superficie_total, local.valor_catastral, local.precio_compra)?;

        self.repos.locales().update(local).await
    }

    /// Locales that still hold trasteros cannot be removed.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.get(id).await?;
        let trasteros = self.repos.trasteros().count_by_local(id).await?;
        if trasteros > 0 {
            return Err(DomainError::Conflict(format!(
                "Local {} still has {} trasteros",
                id, trasteros
            )));
        }
        self.repos.locales().delete(id).await?;
        info!(local_id = id, "Local deleted");
        Ok(())
    }

    async fn ensure_direccion(&self, direccion_id: i32) -> DomainResult<()> {
        self.repos
            .direcciones()
            .find_by_id(direccion_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Direccion", direccion_id))
    }

    async fn ensure_unique_nombre(&self, nombre: &str, exclude_id: Option<i32>) -> DomainResult<()> {
        match self.repos.locales().find_by_nombre(nombre).await? {
            Some(other) if Some(other.id) != exclude_id => Err(DomainError::Conflict(format!(
                "A local named '{}' already exists",
                nombre
            ))),
            _ => Ok(()),
        }
    }
}

fn validate_amounts(
    superficie: Option<f64>,
    valor_catastral: Option<i64>,
    precio_compra: Option<i64>,
) -> DomainResult<()> {
    if superficie.map_or(false, |s| !(s > 0.0)) {
        return Err(DomainError::Validation("superficie_total must be greater than 0".into()));
    }
    if valor_catastral.map_or(false, |v| v < 0) || precio_compra.map_or(false, |v| v < 0) {
        return Err(DomainError::Validation("amounts must not be negative".into()));
    }
    if let Some(v) = valor_catastral {
        ensure_max_importe("valor_catastral", v)?;
    }
    if let Some(v) = precio_compra {
        ensure_max_importe("precio_compra", v)?;
    }
    Ok(())
}
