use async_trait::async_trait;

use super::{Local, NewLocal};
use crate::domain::DomainResult;

#[async_trait]
pub trait LocalRepository: Send + Sync {
    async fn create(&self, local: NewLocal) -> DomainResult<Local>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Local>>;
    async fn find_by_nombre(&self, nombre: &str) -> DomainResult<Option<Local>>;
    async fn find_all(&self) -> DomainResult<Vec<Local>>;
    async fn update(&self, local: Local) -> DomainResult<Local>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
