use std::sync::Arc;

use tracing::info;

use super::commands::{CreateClienteCommand, UpdateClienteCommand};
use super::queries::ListClientesQuery;
use crate::application::events::{ClienteCreadoEvent, DomainEvent, SharedEventBus};
use crate::application::DeleteOutcome;
use crate::domain::{
    Cliente, ContratoFilter, Contrato, DomainError, DomainResult, NewCliente, RepositoryProvider,
};
use crate::shared::{is_valid_dni_nie, non_blank, normalize_dni_nie, normalize_email, PaginatedResult};

pub struct ClienteService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl ClienteService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    pub async fn list(&self, query: ListClientesQuery) -> DomainResult<PaginatedResult<Cliente>> {
        self.repos.clientes().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Cliente> {
        self.repos
            .clientes()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cliente", id))
    }

    pub async fn contratos(&self, id: i32) -> DomainResult<Vec<Contrato>> {
        self.get(id).await?;
        self.repos
            .contratos()
            .find_all(ContratoFilter {
                cliente_id: Some(id),
                ..Default::default()
            })
            .await
    }

    pub async fn create(&self, cmd: CreateClienteCommand) -> DomainResult<Cliente> {
        let nombre = required_nombre(&cmd.nombre)?;
        let dni_nie = clean_dni_nie(cmd.dni_nie)?;
        let email = clean_email(cmd.email);

        self.ensure_unique(dni_nie.as_deref(), email.as_deref(), None).await?;

        let cliente = self
            .repos
            .clientes()
            .create(NewCliente {
                nombre,
                apellidos: non_blank(cmd.apellidos).unwrap_or_default(),
                dni_nie,
                email,
                telefono: non_blank(cmd.telefono),
                observaciones: non_blank(cmd.observaciones),
                rgpd_aceptado: cmd.rgpd_aceptado,
            })
            .await?;

        info!(cliente_id = cliente.id, "Cliente created");
        self.events.publish(DomainEvent::ClienteCreado(ClienteCreadoEvent {
            cliente_id: cliente.id,
            nombre: cliente.nombre_completo(),
        }));
        Ok(cliente)
    }

    pub async fn update(&self, id: i32, cmd: UpdateClienteCommand) -> DomainResult<Cliente> {
        let mut cliente = self.get(id).await?;

        if let Some(nombre) = cmd.nombre {
            cliente.nombre = required_nombre(&nombre)?;
        }
        if let Some(apellidos) = cmd.apellidos {
            cliente.apellidos = apellidos.trim().to_string();
        }
        if cmd.dni_nie.is_some() {
            cliente.dni_nie = clean_dni_nie(cmd.dni_nie)?;
        }
        if cmd.email.is_some() {
            cliente.email = clean_email(cmd.email);
        }
        if cmd.telefono.is_some() {
            cliente.telefono = non_blank(cmd.telefono);
        }
        if cmd.observaciones.is_some() {
            cliente.observaciones = non_blank(cmd.observaciones);
        }
        if let Some(rgpd) = cmd.rgpd_aceptado {
            cliente.rgpd_aceptado = rgpd;
        }
        if let Some(activo) = cmd.activo {
            cliente.activo = activo;
        }

        self.ensure_unique(cliente.dni_nie.as_deref(), cliente.email.as_deref(), Some(id))
            .await?;

        let cliente = self.repos.clientes().update(cliente).await?;
        info!(cliente_id = id, "Cliente updated");
        Ok(cliente)
    }

    /// Clientes with contract history are deactivated instead of removed.
    pub async fn delete(&self, id: i32) -> DomainResult<DeleteOutcome> {
        let mut cliente = self.get(id).await?;

        if self.repos.contratos().count_by_cliente(id).await? > 0 {
            cliente.activo = false;
            self.repos.clientes().update(cliente).await?;
            info!(cliente_id = id, "Cliente deactivated (has contratos)");
            return Ok(DeleteOutcome::Deactivated);
        }

        self.repos.clientes().delete(id).await?;
        info!(cliente_id = id, "Cliente deleted");
        Ok(DeleteOutcome::Deleted)
    }

    async fn ensure_unique(
        &self,
        dni_nie: Option<&str>,
        email: Option<&str>,
        exclude_id: Option<i32>,
    ) -> DomainResult<()> {
        if let Some(dni_nie) = dni_nie {
            if let Some(other) = self.repos.clientes().find_by_dni_nie(dni_nie).await? {
                if Some(other.id) != exclude_id {
                    return Err(DomainError::Conflict(format!(
                        "A cliente with DNI/NIE '{}' already exists",
                        dni_nie
                    )));
                }
            }
        }
        if let Some(email) = email {
            if let Some(other) = self.repos.clientes().find_by_email(email).await? {
                if Some(other.id) != exclude_id {
                    return Err(DomainError::Conflict(format!(
                        "A cliente with email '{}' already exists",
                        email
                    )));
                }
            }
        }
        Ok(())
    }
}

fn required_nombre(raw: &str) -> DomainResult<String> {
    let nombre = raw.trim();
    if nombre.is_empty() {
        return Err(DomainError::Validation("nombre is required".into()));
    }
    Ok(nombre.to_string())
}

fn clean_dni_nie(raw: Option<String>) -> DomainResult<Option<String>> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let dni_nie = normalize_dni_nie(&raw);
    if !is_valid_dni_nie(&dni_nie) {
        return Err(DomainError::Validation(format!("invalid DNI/NIE '{}'", raw)));
    }
    Ok(Some(dni_nie))
}

fn clean_email(raw: Option<String>) -> Option<String> {
    non_blank(raw).map(|e| normalize_email(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_nie_is_normalised_and_checked() {
        assert_eq!(
            clean_dni_nie(Some("12345678-z".into())).unwrap(),
            Some("12345678Z".into())
        );
        assert_eq!(clean_dni_nie(Some("   ".into())).unwrap(), None);
        assert!(matches!(
            clean_dni_nie(Some("12345678A".into())),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn blank_nombre_is_rejected() {
        assert!(required_nombre("  ").is_err());
        assert_eq!(required_nombre(" Ana ").unwrap(), "Ana");
    }
}
