//! SeaORM implementation of PrestamoRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, not_found, parse_stored};
use crate::domain::prestamo::{NewPrestamo, Prestamo, PrestamoFilter, PrestamoRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::prestamo;

pub struct SeaOrmPrestamoRepository {
    db: DatabaseConnection,
}

impl SeaOrmPrestamoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: prestamo::Model) -> DomainResult<Prestamo> {
    Ok(Prestamo {
        id: m.id,
        local_id: m.local_id,
        entidad_bancaria: m.entidad_bancaria,
        numero_prestamo: m.numero_prestamo,
        capital_solicitado: m.capital_solicitado,
        total_a_devolver: m.total_a_devolver,
        tipo_interes: m.tipo_interes,
        fecha_concesion: m.fecha_concesion,
        estado: parse_stored("prestamo.estado", &m.estado)?,
        observaciones: m.observaciones,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

#[async_trait]
impl PrestamoRepository for SeaOrmPrestamoRepository {
    async fn create(&self, new: NewPrestamo) -> DomainResult<Prestamo> {
        let now = Utc::now();
        let model = prestamo::ActiveModel {
            local_id: Set(new.local_id),
            entidad_bancaria: Set(new.entidad_bancaria),
            numero_prestamo: Set(new.numero_prestamo),
            capital_solicitado: Set(new.capital_solicitado),
            total_a_devolver: Set(new.total_a_devolver),
            tipo_interes: Set(new.tipo_interes),
            fecha_concesion: Set(new.fecha_concesion),
            estado: Set(new.estado.as_str().to_string()),
            observaciones: Set(new.observaciones),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Prestamo>> {
        prestamo::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list(&self, filter: PrestamoFilter) -> DomainResult<Vec<Prestamo>> {
        let mut query = prestamo::Entity::find();
        if let Some(local_id) = filter.local_id {
            query = query.filter(prestamo::Column::LocalId.eq(local_id));
        }
        if let Some(estado) = filter.estado {
            query = query.filter(prestamo::Column::Estado.eq(estado.as_str()));
        }
        query
            .order_by_desc(prestamo::Column::FechaConcesion)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn update(&self, p: Prestamo) -> DomainResult<Prestamo> {
        let existing = prestamo::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Prestamo", p.id))?;

        let mut active: prestamo::ActiveModel = existing.into();
        active.local_id = Set(p.local_id);
        active.entidad_bancaria = Set(p.entidad_bancaria);
        active.numero_prestamo = Set(p.numero_prestamo);
        active.capital_solicitado = Set(p.capital_solicitado);
        active.total_a_devolver = Set(p.total_a_devolver);
        active.tipo_interes = Set(p.tipo_interes);
        active.fecha_concesion = Set(p.fecha_concesion);
        active.estado = Set(p.estado.as_str().to_string());
        active.observaciones = Set(p.observaciones);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = prestamo::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Prestamo", id));
        }
        Ok(())
    }
}
