use async_trait::async_trait;

use super::{Gasto, GastoFilter, NewGasto};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait GastoRepository: Send + Sync {
    async fn create(&self, gasto: NewGasto) -> DomainResult<Gasto>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Gasto>>;
    async fn list(
        &self,
        filter: GastoFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Gasto>>;
    async fn find_all(&self, filter: GastoFilter) -> DomainResult<Vec<Gasto>>;
    async fn count_by_prestamo(&self, prestamo_id: i32) -> DomainResult<u64>;
    async fn update(&self, gasto: Gasto) -> DomainResult<Gasto>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
