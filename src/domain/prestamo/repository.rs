use async_trait::async_trait;

use super::{NewPrestamo, Prestamo, PrestamoFilter};
use crate::domain::DomainResult;

#[async_trait]
pub trait PrestamoRepository: Send + Sync {
    async fn create(&self, prestamo: NewPrestamo) -> DomainResult<Prestamo>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Prestamo>>;
    async fn list(&self, filter: PrestamoFilter) -> DomainResult<Vec<Prestamo>>;
    async fn update(&self, prestamo: Prestamo) -> DomainResult<Prestamo>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
