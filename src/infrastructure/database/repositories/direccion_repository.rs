//! SeaORM implementation of DireccionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, not_found};
use crate::domain::direccion::{Direccion, DireccionRepository, NewDireccion};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::direccion;

pub struct SeaOrmDireccionRepository {
    db: DatabaseConnection,
}

impl SeaOrmDireccionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: direccion::Model) -> Direccion {
    Direccion {
        id: m.id,
        cliente_id: m.cliente_id,
        tipo_via: m.tipo_via,
        nombre_via: m.nombre_via,
        numero: m.numero,
        piso: m.piso,
        puerta: m.puerta,
        codigo_postal: m.codigo_postal,
        ciudad: m.ciudad,
        provincia: m.provincia,
        pais: m.pais,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl DireccionRepository for SeaOrmDireccionRepository {
    async fn create(&self, new: NewDireccion) -> DomainResult<Direccion> {
        let now = Utc::now();
        let model = direccion::ActiveModel {
            cliente_id: Set(new.cliente_id),
            tipo_via: Set(new.tipo_via),
            nombre_via: Set(new.nombre_via),
            numero: Set(new.numero),
            piso: Set(new.piso),
            puerta: Set(new.puerta),
            codigo_postal: Set(new.codigo_postal),
            ciudad: Set(new.ciudad),
            provincia: Set(new.provincia),
            pais: Set(new.pais),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Direccion>> {
        let model = direccion::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(&self, cliente_id: Option<i32>) -> DomainResult<Vec<Direccion>> {
        let mut query = direccion::Entity::find();
        if let Some(cliente_id) = cliente_id {
            query = query.filter(direccion::Column::ClienteId.eq(cliente_id));
        }
        let models = query
            .order_by_asc(direccion::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, d: Direccion) -> DomainResult<Direccion> {
        let existing = direccion::Entity::find_by_id(d.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Direccion", d.id))?;

        let mut active: direccion::ActiveModel = existing.into();
        active.cliente_id = Set(d.cliente_id);
        active.tipo_via = Set(d.tipo_via);
        active.nombre_via = Set(d.nombre_via);
        active.numero = Set(d.numero);
        active.piso = Set(d.piso);
        active.puerta = Set(d.puerta);
        active.codigo_postal = Set(d.codigo_postal);
        active.ciudad = Set(d.ciudad);
        active.provincia = Set(d.provincia);
        active.pais = Set(d.pais);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = direccion::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Direccion", id));
        }
        Ok(())
    }
}
