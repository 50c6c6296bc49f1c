//! SeaORM implementation of ClienteRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{db_err, not_found, unique_err};
use crate::domain::cliente::{Cliente, ClienteFilter, ClienteRepository, NewCliente};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::cliente;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmClienteRepository {
    db: DatabaseConnection,
}

impl SeaOrmClienteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: cliente::Model) -> Cliente {
    Cliente {
        id: m.id,
        nombre: m.nombre,
        apellidos: m.apellidos,
        dni_nie: m.dni_nie,
        email: m.email,
        telefono: m.telefono,
        observaciones: m.observaciones,
        rgpd_aceptado: m.rgpd_aceptado,
        activo: m.activo,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

const DUPLICATE_CLIENTE: &str = "A cliente with this DNI/NIE or email already exists";

#[async_trait]
impl ClienteRepository for SeaOrmClienteRepository {
    async fn create(&self, new: NewCliente) -> DomainResult<Cliente> {
        let now = Utc::now();
        let model = cliente::ActiveModel {
            nombre: Set(new.nombre),
            apellidos: Set(new.apellidos),
            dni_nie: Set(new.dni_nie),
            email: Set(new.email),
            telefono: Set(new.telefono),
            observaciones: Set(new.observaciones),
            rgpd_aceptado: Set(new.rgpd_aceptado),
            activo: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(unique_err(DUPLICATE_CLIENTE))?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Cliente>> {
        let model = cliente::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_dni_nie(&self, dni_nie: &str) -> DomainResult<Option<Cliente>> {
        let model = cliente::Entity::find()
            .filter(cliente::Column::DniNie.eq(dni_nie))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Cliente>> {
        let model = cliente::Entity::find()
            .filter(cliente::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: ClienteFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Cliente>> {
        let mut query = cliente::Entity::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let search = search.trim();
            let upper = search.to_uppercase();
            let lower = search.to_lowercase();
            query = query.filter(
                Condition::any()
                    .add(cliente::Column::Nombre.contains(search))
                    .add(cliente::Column::Apellidos.contains(search))
                    .add(cliente::Column::DniNie.contains(upper.as_str()))
                    .add(cliente::Column::Email.contains(lower.as_str())),
            );
        }
        if let Some(activo) = filter.activo {
            query = query.filter(cliente::Column::Activo.eq(activo));
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .order_by_asc(cliente::Column::Apellidos)
            .order_by_asc(cliente::Column::Nombre)
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn count_activos(&self) -> DomainResult<u64> {
        cliente::Entity::find()
            .filter(cliente::Column::Activo.eq(true))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, c: Cliente) -> DomainResult<Cliente> {
        let existing = cliente::Entity::find_by_id(c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Cliente", c.id))?;

        let mut active: cliente::ActiveModel = existing.into();
        active.nombre = Set(c.nombre);
        active.apellidos = Set(c.apellidos);
        active.dni_nie = Set(c.dni_nie);
        active.email = Set(c.email);
        active.telefono = Set(c.telefono);
        active.observaciones = Set(c.observaciones);
        active.rgpd_aceptado = Set(c.rgpd_aceptado);
        active.activo = Set(c.activo);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(unique_err(DUPLICATE_CLIENTE))?;
        Ok(model_to_domain(saved))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = cliente::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Cliente", id));
        }
        Ok(())
    }
}
