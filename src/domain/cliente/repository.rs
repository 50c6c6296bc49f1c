use async_trait::async_trait;

use super::{Cliente, ClienteFilter, NewCliente};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn create(&self, cliente: NewCliente) -> DomainResult<Cliente>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Cliente>>;
    async fn find_by_dni_nie(&self, dni_nie: &str) -> DomainResult<Option<Cliente>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Cliente>>;
    async fn list(
        &self,
        filter: ClienteFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Cliente>>;
    async fn count_activos(&self) -> DomainResult<u64>;
    async fn update(&self, cliente: Cliente) -> DomainResult<Cliente>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
