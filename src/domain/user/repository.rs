use async_trait::async_trait;

use super::{NewUser, User, UserFilter};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    async fn list(&self, filter: UserFilter, page: PaginationParams) -> DomainResult<PaginatedResult<User>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn count(&self) -> DomainResult<u64>;

    async fn update(&self, user: User) -> DomainResult<User>;
    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()>;
    async fn touch_last_login(&self, id: &str) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
