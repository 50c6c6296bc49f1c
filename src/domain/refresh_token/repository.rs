use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{NewRefreshToken, RefreshToken};
use crate::domain::DomainResult;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn create(&self, token: NewRefreshToken) -> DomainResult<RefreshToken>;
    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    /// Returns the number of removed rows.
    async fn delete_for_user(&self, user_id: &str) -> DomainResult<u64>;
    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
