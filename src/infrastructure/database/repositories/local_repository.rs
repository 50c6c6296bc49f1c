//! SeaORM implementation of LocalRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, not_found, unique_err};
use crate::domain::local::{Local, LocalRepository, NewLocal};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::local;

pub struct SeaOrmLocalRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: local::Model) -> Local {
    Local {
        id: m.id,
        nombre: m.nombre,
        direccion_id: m.direccion_id,
        superficie_total: m.superficie_total,
        referencia_catastral: m.referencia_catastral,
        valor_catastral: m.valor_catastral,
        fecha_compra: m.fecha_compra,
        precio_compra: m.precio_compra,
        activo: m.activo,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

const DUPLICATE_LOCAL: &str = "A local with this nombre already exists";

#[async_trait]
impl LocalRepository for SeaOrmLocalRepository {
    async fn create(&self, new: NewLocal) -> DomainResult<Local> {
        let now = Utc::now();
        let model = local::ActiveModel {
            nombre: Set(new.nombre),
            direccion_id: Set(new.direccion_id),
            superficie_total: Set(new.superficie_total),
            referencia_catastral: Set(new.referencia_catastral),
            valor_catastral: Set(new.valor_catastral),
            fecha_compra: Set(new.fecha_compra),
            precio_compra: Set(new.precio_compra),
            activo: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(unique_err(DUPLICATE_LOCAL))?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Local>> {
        let model = local::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_nombre(&self, nombre: &str) -> DomainResult<Option<Local>> {
        let model = local::Entity::find()
            .filter(local::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Local>> {
        let models = local::Entity::find()
            .order_by_asc(local::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, l: Local) -> DomainResult<Local> {
        let existing = local::Entity::find_by_id(l.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Local", l.id))?;

        let mut active: local::ActiveModel = existing.into();
        active.nombre = Set(l.nombre);
        active.direccion_id = Set(l.direccion_id);
        active.superficie_total = Set(l.superficie_total);
        active.referencia_catastral = Set(l.referencia_catastral);
        active.valor_catastral = Set(l.valor_catastral);
        active.fecha_compra = Set(l.fecha_compra);
        active.precio_compra = Set(l.precio_compra);
        active.activo = Set(l.activo);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(unique_err(DUPLICATE_LOCAL))?;
        Ok(model_to_domain(saved))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = local::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Local", id));
        }
        Ok(())
    }
}
