//! SeaORM implementation of IngresoRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};

use super::{db_err, not_found, parse_stored};
use crate::domain::ingreso::{Ingreso, IngresoFilter, IngresoRepository, NewIngreso};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::ingreso;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmIngresoRepository {
    db: DatabaseConnection,
}

impl SeaOrmIngresoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: ingreso::Model) -> DomainResult<Ingreso> {
    Ok(Ingreso {
        id: m.id,
        contrato_id: m.contrato_id,
        concepto: m.concepto,
        importe: m.importe,
        fecha_pago: m.fecha_pago,
        metodo_pago: parse_stored("ingreso.metodo_pago", &m.metodo_pago)?,
        categoria: parse_stored("ingreso.categoria", &m.categoria)?,
        observaciones: m.observaciones,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn apply_filter(mut query: Select<ingreso::Entity>, filter: &IngresoFilter) -> Select<ingreso::Entity> {
    if let Some(contrato_id) = filter.contrato_id {
        query = query.filter(ingreso::Column::ContratoId.eq(contrato_id));
    }
    if let Some(categoria) = filter.categoria {
        query = query.filter(ingreso::Column::Categoria.eq(categoria.as_str()));
    }
    if let Some(desde) = filter.fechas.desde {
        query = query.filter(ingreso::Column::FechaPago.gte(desde));
    }
    if let Some(hasta) = filter.fechas.hasta {
        query = query.filter(ingreso::Column::FechaPago.lte(hasta));
    }
    query
}

#[async_trait]
impl IngresoRepository for SeaOrmIngresoRepository {
    async fn create(&self, new: NewIngreso) -> DomainResult<Ingreso> {
        let now = Utc::now();
        let model = ingreso::ActiveModel {
            contrato_id: Set(new.contrato_id),
            concepto: Set(new.concepto),
            importe: Set(new.importe),
            fecha_pago: Set(new.fecha_pago),
            metodo_pago: Set(new.metodo_pago.as_str().to_string()),
            categoria: Set(new.categoria.as_str().to_string()),
            observaciones: Set(new.observaciones),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ingreso>> {
        ingreso::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list(
        &self,
        filter: IngresoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Ingreso>> {
        let query = apply_filter(ingreso::Entity::find(), &filter);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let items = query
            .order_by_desc(ingreso::Column::FechaPago)
            .order_by_desc(ingreso::Column::Id)
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find_all(&self, filter: IngresoFilter) -> DomainResult<Vec<Ingreso>> {
        apply_filter(ingreso::Entity::find(), &filter)
            .order_by_asc(ingreso::Column::FechaPago)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn count_by_contrato(&self, contrato_id: i32) -> DomainResult<u64> {
        ingreso::Entity::find()
            .filter(ingreso::Column::ContratoId.eq(contrato_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, i: Ingreso) -> DomainResult<Ingreso> {
        let existing = ingreso::Entity::find_by_id(i.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Ingreso", i.id))?;

        let mut active: ingreso::ActiveModel = existing.into();
        active.contrato_id = Set(i.contrato_id);
        active.concepto = Set(i.concepto);
        active.importe = Set(i.importe);
        active.fecha_pago = Set(i.fecha_pago);
        active.metodo_pago = Set(i.metodo_pago.as_str().to_string());
        active.categoria = Set(i.categoria.as_str().to_string());
        active.observaciones = Set(i.observaciones);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = ingreso::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Ingreso", id));
        }
        Ok(())
    }
}
