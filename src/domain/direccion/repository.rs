use async_trait::async_trait;

use super::{Direccion, NewDireccion};
use crate::domain::DomainResult;

#[async_trait]
pub trait DireccionRepository: Send + Sync {
    async fn create(&self, direccion: NewDireccion) -> DomainResult<Direccion>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Direccion>>;
    async fn list(&self, cliente_id: Option<i32>) -> DomainResult<Vec<Direccion>>;
    async fn update(&self, direccion: Direccion) -> DomainResult<Direccion>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
