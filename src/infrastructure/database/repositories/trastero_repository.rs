//! SeaORM implementation of TrasteroRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use tracing::debug;

use super::{db_err, not_found, parse_stored, unique_err};
use crate::domain::trastero::{
    NewTrastero, Trastero, TrasteroEstado, TrasteroFilter, TrasteroRepository,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::trastero;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmTrasteroRepository {
    db: DatabaseConnection,
}

impl SeaOrmTrasteroRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: trastero::Model) -> DomainResult<Trastero> {
    Ok(Trastero {
        id: m.id,
        local_id: m.local_id,
        numero: m.numero,
        nombre: m.nombre,
        superficie: m.superficie,
        precio_mensual: m.precio_mensual,
        estado: parse_stored("trastero.estado", &m.estado)?,
        observaciones: m.observaciones,
        activo: m.activo,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn apply_filter(mut query: Select<trastero::Entity>, filter: &TrasteroFilter) -> Select<trastero::Entity> {
    if let Some(local_id) = filter.local_id {
        query = query.filter(trastero::Column::LocalId.eq(local_id));
    }
    if let Some(estado) = filter.estado {
        query = query.filter(trastero::Column::Estado.eq(estado.as_str()));
    }
    if let Some(activo) = filter.activo {
        query = query.filter(trastero::Column::Activo.eq(activo));
    }
    query
}

const DUPLICATE_NUMERO: &str = "A trastero with this numero already exists in the local";

#[async_trait]
impl TrasteroRepository for SeaOrmTrasteroRepository {
    async fn create(&self, new: NewTrastero) -> DomainResult<Trastero> {
        let now = Utc::now();
        let model = trastero::ActiveModel {
            local_id: Set(new.local_id),
            numero: Set(new.numero),
            nombre: Set(new.nombre),
            superficie: Set(new.superficie),
            precio_mensual: Set(new.precio_mensual),
            estado: Set(new.estado.as_str().to_string()),
            observaciones: Set(new.observaciones),
            activo: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(unique_err(DUPLICATE_NUMERO))?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Trastero>> {
        trastero::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_by_local_and_numero(
        &self,
        local_id: i32,
        numero: &str,
    ) -> DomainResult<Option<Trastero>> {
        trastero::Entity::find()
            .filter(trastero::Column::LocalId.eq(local_id))
            .filter(trastero::Column::Numero.eq(numero))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list(
        &self,
        filter: TrasteroFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Trastero>> {
        let query = apply_filter(trastero::Entity::find(), &filter);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .order_by_asc(trastero::Column::LocalId)
            .order_by_asc(trastero::Column::Numero)
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find_all(&self, filter: TrasteroFilter) -> DomainResult<Vec<Trastero>> {
        apply_filter(trastero::Entity::find(), &filter)
            .order_by_asc(trastero::Column::LocalId)
            .order_by_asc(trastero::Column::Numero)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn count_by_local(&self, local_id: i32) -> DomainResult<u64> {
        trastero::Entity::find()
            .filter(trastero::Column::LocalId.eq(local_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, t: Trastero) -> DomainResult<Trastero> {
        let existing = trastero::Entity::find_by_id(t.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Trastero", t.id))?;

        let mut active: trastero::ActiveModel = existing.into();
        active.local_id = Set(t.local_id);
        active.numero = Set(t.numero);
        active.nombre = Set(t.nombre);
        active.superficie = Set(t.superficie);
        active.precio_mensual = Set(t.precio_mensual);
        active.estado = Set(t.estado.as_str().to_string());
        active.observaciones = Set(t.observaciones);
        active.activo = Set(t.activo);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(unique_err(DUPLICATE_NUMERO))?;
        model_to_domain(saved)
    }

    async fn set_estado(&self, id: i32, estado: TrasteroEstado) -> DomainResult<()> {
        debug!(trastero_id = id, estado = estado.as_str(), "Setting trastero estado");

        let existing = trastero::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Trastero", id))?;

        let mut active: trastero::ActiveModel = existing.into();
        active.estado = Set(estado.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = trastero::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Trastero", id));
        }
        Ok(())
    }
}
