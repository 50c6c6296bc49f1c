use async_trait::async_trait;

use super::{NewTrastero, Trastero, TrasteroEstado, TrasteroFilter};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait TrasteroRepository: Send + Sync {
    async fn create(&self, trastero: NewTrastero) -> DomainResult<Trastero>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Trastero>>;
    async fn find_by_local_and_numero(
        &self,
        local_id: i32,
        numero: &str,
    ) -> DomainResult<Option<Trastero>>;
    async fn list(
        &self,
        filter: TrasteroFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Trastero>>;
    /// Unpaginated listing used by reports and availability searches.
    async fn find_all(&self, filter: TrasteroFilter) -> DomainResult<Vec<Trastero>>;
    async fn count_by_local(&self, local_id: i32) -> DomainResult<u64>;
    async fn update(&self, trastero: Trastero) -> DomainResult<Trastero>;
    async fn set_estado(&self, id: i32, estado: TrasteroEstado) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
