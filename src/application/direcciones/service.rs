use std::sync::Arc;

use tracing::info;

use super::commands::{CreateDireccionCommand, UpdateDireccionCommand};
use crate::domain::direccion::model::is_spain;
use crate::domain::{Direccion, DomainError, DomainResult, NewDireccion, RepositoryProvider};
use crate::shared::{is_valid_spanish_postal_code, non_blank};

const DEFAULT_PAIS: &str = "España";

pub struct DireccionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DireccionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self, cliente_id: Option<i32>) -> DomainResult<Vec<Direccion>> {
        self.repos.direcciones().list(cliente_id).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Direccion> {
        self.repos
            .direcciones()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Direccion", id))
    }

    pub async fn create(&self, cmd: CreateDireccionCommand) -> DomainResult<Direccion> {
        if let Some(cliente_id) = cmd.cliente_id {
            self.ensure_cliente(cliente_id).await?;
        }

        let pais = non_blank(cmd.pais).unwrap_or_else(|| DEFAULT_PAIS.to_string());
        let codigo_postal = cmd.codigo_postal.trim().to_string();
        validate_codigo_postal(&codigo_postal, &pais)?;

        let direccion = self
            .repos
            .direcciones()
            .create(NewDireccion {
                cliente_id: cmd.cliente_id,
                tipo_via: non_blank(cmd.tipo_via),
                nombre_via: required("nombre_via", &cmd.nombre_via)?,
                numero: non_blank(cmd.numero),
                piso: non_blank(cmd.piso),
                puerta: non_blank(cmd.puerta),
                codigo_postal,
                ciudad: required("ciudad", &cmd.ciudad)?,
                provincia: non_blank(cmd.provincia),
                pais,
            })
            .await?;

        info!(direccion_id = direccion.id, "Direccion created");
        Ok(direccion)
    }

    pub async fn update(&self, id: i32, cmd: UpdateDireccionCommand) -> DomainResult<Direccion> {
        let mut d = self.get(id).await?;

        if let Some(cliente_id) = cmd.cliente_id {
            self.ensure_cliente(cliente_id).await?;
            d.cliente_id = Some(cliente_id);
        }
        if cmd.tipo_via.is_some() {
            d.tipo_via = non_blank(cmd.tipo_via);
        }
        if let Some(nombre_via) = cmd.nombre_via {
            d.nombre_via = required("nombre_via", &nombre_via)?;
        }
        if cmd.numero.is_some() {
            d.numero = non_blank(cmd.numero);
        }
        if cmd.piso.is_some() {
            d.piso = non_blank(cmd.piso);
        }
        if cmd.puerta.is_some() {
            d.puerta = non_blank(cmd.puerta);
        }
        if let Some(cp) = cmd.codigo_postal {
            d.codigo_postal = cp.trim().to_string();
        }
        if let Some(ciudad) = cmd.ciudad {
            d.ciudad = required("ciudad", &ciudad)?;
        }
        if cmd.provincia.is_some() {
            d.provincia = non_blank(cmd.provincia);
        }
        if let Some(pais) = non_blank(cmd.pais) {
            d.pais = pais;
        }
        validate_codigo_postal(&d.codigo_postal, &d.pais)?;

        self.repos.direcciones().update(d).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.direcciones().delete(id).await?;
        info!(direccion_id = id, "Direccion deleted");
        Ok(())
    }

    async fn ensure_cliente(&self, cliente_id: i32) -> DomainResult<()> {
        self.repos
            .clientes()
            .find_by_id(cliente_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Cliente", cliente_id))
    }
}

fn required(field: &str, raw: &str) -> DomainResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn validate_codigo_postal(codigo_postal: &str, pais: &str) -> DomainResult<()> {
    if codigo_postal.is_empty() {
        return Err(DomainError::Validation("codigo_postal is required".into()));
    }
    if is_spain(pais) && !is_valid_spanish_postal_code(codigo_postal) {
        return Err(DomainError::Validation(format!(
            "invalid codigo_postal '{}'",
            codigo_postal
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postal_code_rules_apply_only_to_spain() {
        assert!(validate_codigo_postal("28013", "España").is_ok());
        assert!(validate_codigo_postal("99999", "España").is_err());
        assert!(validate_codigo_postal("1000-001", "Portugal").is_ok());
        assert!(validate_codigo_postal("", "Portugal").is_err());
    }
}
