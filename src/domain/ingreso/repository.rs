use async_trait::async_trait;

use super::{Ingreso, IngresoFilter, NewIngreso};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait IngresoRepository: Send + Sync {
    async fn create(&self, ingreso: NewIngreso) -> DomainResult<Ingreso>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ingreso>>;
    async fn list(
        &self,
        filter: IngresoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Ingreso>>;
    async fn find_all(&self, filter: IngresoFilter) -> DomainResult<Vec<Ingreso>>;
    async fn count_by_contrato(&self, contrato_id: i32) -> DomainResult<u64>;
    async fn update(&self, ingreso: Ingreso) -> DomainResult<Ingreso>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
