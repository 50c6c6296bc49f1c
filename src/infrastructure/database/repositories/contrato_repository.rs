//! SeaORM implementation of ContratoRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use super::{db_err, not_found, parse_stored};
use crate::domain::contrato::{
    Contrato, ContratoEstado, ContratoFilter, ContratoRepository, DateRange, NewContrato,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::contrato;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmContratoRepository {
    db: DatabaseConnection,
}

impl SeaOrmContratoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: contrato::Model) -> DomainResult<Contrato> {
    Ok(Contrato {
        id: m.id,
        trastero_id: m.trastero_id,
        cliente_id: m.cliente_id,
        fecha_inicio: m.fecha_inicio,
        fecha_fin: m.fecha_fin,
        precio_mensual: m.precio_mensual,
        fianza: m.fianza,
        fianza_pagada: m.fianza_pagada,
        fianza_devuelta: m.fianza_devuelta,
        dia_pago: m.dia_pago,
        estado: parse_stored("contrato.estado", &m.estado)?,
        observaciones: m.observaciones,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn collect(models: Vec<contrato::Model>) -> DomainResult<Vec<Contrato>> {
    models.into_iter().map(model_to_domain).collect()
}

fn apply_filter(mut query: Select<contrato::Entity>, filter: &ContratoFilter) -> Select<contrato::Entity> {
    if let Some(cliente_id) = filter.cliente_id {
        query = query.filter(contrato::Column::ClienteId.eq(cliente_id));
    }
    if let Some(trastero_id) = filter.trastero_id {
        query = query.filter(contrato::Column::TrasteroId.eq(trastero_id));
    }
    if let Some(estado) = filter.estado {
        query = query.filter(contrato::Column::Estado.eq(estado.as_str()));
    }
    query
}

const BLOCKING_ESTADOS: [ContratoEstado; 2] = [ContratoEstado::Activo, ContratoEstado::Pendiente];

#[async_trait]
impl ContratoRepository for SeaOrmContratoRepository {
    async fn create(&self, new: NewContrato) -> DomainResult<Contrato> {
        let now = Utc::now();
        let model = contrato::ActiveModel {
            trastero_id: Set(new.trastero_id),
            cliente_id: Set(new.cliente_id),
            fecha_inicio: Set(new.fecha_inicio),
            fecha_fin: Set(new.fecha_fin),
            precio_mensual: Set(new.precio_mensual),
            fianza: Set(new.fianza),
            fianza_pagada: Set(new.fianza_pagada),
            fianza_devuelta: Set(false),
            dia_pago: Set(new.dia_pago),
            estado: Set(new.estado.as_str().to_string()),
            observaciones: Set(new.observaciones),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contrato>> {
        contrato::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn list(
        &self,
        filter: ContratoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Contrato>> {
        let query = apply_filter(contrato::Entity::find(), &filter);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .order_by_desc(contrato::Column::FechaInicio)
            .order_by_desc(contrato::Column::Id)
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(PaginatedResult::new(collect(models)?, total, page.page, page.limit))
    }

    async fn find_all(&self, filter: ContratoFilter) -> DomainResult<Vec<Contrato>> {
        let models = apply_filter(contrato::Entity::find(), &filter)
            .order_by_desc(contrato::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        collect(models)
    }

    async fn find_overlapping(
        &self,
        trastero_id: i32,
        periodo: &DateRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<Vec<Contrato>> {
        let mut query = contrato::Entity::find()
            .filter(contrato::Column::TrasteroId.eq(trastero_id))
            .filter(contrato::Column::Estado.is_in(BLOCKING_ESTADOS.iter().map(|e| e.as_str())))
            // existing.fin >= new.inicio (open end never finishes)
            .filter(
                Condition::any()
                    .add(contrato::Column::FechaFin.is_null())
                    .add(contrato::Column::FechaFin.gte(periodo.inicio)),
            );

        // existing.inicio <= new.fin
        if let Some(fin) = periodo.fin {
            query = query.filter(contrato::Column::FechaInicio.lte(fin));
        }
        if let Some(exclude_id) = exclude_id {
            query = query.filter(contrato::Column::Id.ne(exclude_id));
        }

        let models = query
            .order_by_asc(contrato::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        collect(models)
    }

    async fn find_expiring(&self, desde: NaiveDate, hasta: NaiveDate) -> DomainResult<Vec<Contrato>> {
        let models = contrato::Entity::find()
            .filter(contrato::Column::Estado.eq(ContratoEstado::Activo.as_str()))
            .filter(contrato::Column::FechaFin.is_not_null())
            .filter(contrato::Column::FechaFin.gte(desde))
            .filter(contrato::Column::FechaFin.lte(hasta))
            .order_by_asc(contrato::Column::FechaFin)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        collect(models)
    }

    async fn count_by_cliente(&self, cliente_id: i32) -> DomainResult<u64> {
        contrato::Entity::find()
            .filter(contrato::Column::ClienteId.eq(cliente_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_trastero(&self, trastero_id: i32) -> DomainResult<u64> {
        contrato::Entity::find()
            .filter(contrato::Column::TrasteroId.eq(trastero_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, c: Contrato) -> DomainResult<Contrato> {
        let existing = contrato::Entity::find_by_id(c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("Contrato", c.id))?;

        let mut active: contrato::ActiveModel = existing.into();
        active.trastero_id = Set(c.trastero_id);
        active.cliente_id = Set(c.cliente_id);
        active.fecha_inicio = Set(c.fecha_inicio);
        active.fecha_fin = Set(c.fecha_fin);
        active.precio_mensual = Set(c.precio_mensual);
        active.fianza = Set(c.fianza);
        active.fianza_pagada = Set(c.fianza_pagada);
        active.fianza_devuelta = Set(c.fianza_devuelta);
        active.dia_pago = Set(c.dia_pago);
        active.estado = Set(c.estado.as_str().to_string());
        active.observaciones = Set(c.observaciones);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = contrato::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("Contrato", id));
        }
        Ok(())
    }
}
