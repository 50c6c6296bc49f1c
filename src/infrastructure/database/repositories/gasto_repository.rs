//! SeaORM implementation of GastoRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};

use super::{db_err, not_found, parse_stored};
use crate::domain::gasto::{Gasto, GastoFilter, GastoRepository, NewGasto};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::gasto;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmGastoRepository {
    db: DatabaseConnection,
}

impl SeaOrmGastoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: gasto::Model) -> DomainResult<Gasto> {
    let metodo_pago = match m.metodo_pago.as_deref() {
        Some(raw) => Some(parse_stored("gasto.metodo_pago", raw)?),
        None => None,
    };
    Ok(Gasto {
        id: m.id,
        local_id: m.local_id,
        prestamo_id: m.prestamo_id,
        concepto: m.concepto,
        importe: m.importe,
        fecha: m.fecha,
        categoria: parse_stored("gasto.categoria", &m.categoria)?,
        metodo_pago,
        observaciones: m.observaciones,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn apply_filter(mut query: Select<gasto::Entity>, filter: &GastoFilter) -> Select<gasto::Entity> {
    if let Some(local_id) = filter.local_id {
        query = query.filter(gasto::Column::LocalId.eq(local_id));
    }
    if let Some(prestamo_id) = filter.prestamo_id {
        query = query.filter(gasto::Column::PrestamoId.eq(prestamo_id));
    }
    if let Some(categoria) = filter.categoria {
        query = query.filter(gasto::Column::Categoria.eq(categoria.as_str()));
    }
    if let Some(desde) = filter.fechas.desde {
        query = query.filter(gasto::Column::Fecha.gte(desde));
    }
    if let Some(hasta) = filter.fechas.hasta {
        query = query.filter(gasto::Column::Fecha.lte(hasta));
    }
    query
}

#[async_trait]
impl GastoRepository for SeaOrmGastoRepository {
    async fn create(&self, new: NewGasto) -> DomainResult<Gasto> {
        let now = Utc::now();
        let model = gasto::ActiveModel {
            local_id: Set(new.local_id),
            prestamo_id: Set(new.prestamo_id),
            concepto: Set(new.concepto),
            importe: Set(new.importe),
            fecha: Set(new.fecha),
            categoria: Set(new.categoria.as_str().to_string()),
            metodo_pago: Set(new.metodo_pago.map(|m| m.as_str().to_string())),
            observaciones: Set(new.observaciones),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Gasto>> {
        gasto::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list(
        &self,
        filter: GastoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Gasto>> {
        let query = apply_filter(gasto::Entity::find(), &filter);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let items = query
            .order_by_desc(gasto::Column::Fecha)
            .order_by_desc(gasto::Column::Id)
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

    async fn find_all(&self, filter: GastoFilter) -> DomainResult<Vec<Gasto>> {
        apply_filter(gasto::Entity::find(), &filter)
            .order_by_asc(gasto::Column::Fecha)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn count_by_prestamo(&self, prestamo_id: i32) -> DomainResult<u64> {
        gasto::Entity::find()
            .filter(gasto::Column::PrestamoId.eq(prestamo_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, g: Gasto) -> DomainResult<Gasto> {
        let existing = gasto::Entity::find_by_id(g.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Gasto", g.id))?;

        let mut active: gasto::ActiveModel = existing.into();
        active.local_id = Set(g.local_id);
        active.prestamo_id = Set(g.prestamo_id);
        active.concepto = Set(g.concepto);
        active.importe = Set(g.importe);
        active.fecha = Set(g.fecha);
        active.categoria = Set(g.categoria.as_str().to_string());
        active.metodo_pago = Set(g.metodo_pago.map(|m| m.as_str().to_string()));
        active.observaciones = Set(g.observaciones);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = gasto::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Gasto", id));
        }
        Ok(())
    }
}
