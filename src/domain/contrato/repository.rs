use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Contrato, ContratoFilter, DateRange, NewContrato};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait ContratoRepository: Send + Sync {
    async fn create(&self, contrato: NewContrato) -> DomainResult<Contrato>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contrato>>;
    async fn list(
        &self,
        filter: ContratoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Contrato>>;
    async fn find_all(&self, filter: ContratoFilter) -> DomainResult<Vec<Contrato>>;

    /// Activo/pendiente contracts of `trastero_id` whose period intersects
    /// `periodo`, optionally ignoring the contract `exclude_id`.
    async fn find_overlapping(
        &self,
        trastero_id: i32,
        periodo: &DateRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<Vec<Contrato>>;

    /// Activo contracts ending within `[desde, hasta]`.
    async fn find_expiring(&self, desde: NaiveDate, hasta: NaiveDate) -> DomainResult<Vec<Contrato>>;

    async fn count_by_cliente(&self, cliente_id: i32) -> DomainResult<u64>;
    async fn count_by_trastero(&self, trastero_id: i32) -> DomainResult<u64>;

    async fn update(&self, contrato: Contrato) -> DomainResult<Contrato>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
