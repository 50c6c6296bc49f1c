//! SeaORM implementation of RefreshTokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::db_err;
use crate::domain::refresh_token::{NewRefreshToken, RefreshToken, RefreshTokenRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::refresh_token;

pub struct SeaOrmRefreshTokenRepository {
    db: DatabaseConnection,
}

impl SeaOrmRefreshTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: refresh_token::Model) -> RefreshToken {
    RefreshToken {
        id: m.id,
        token_hash: m.token_hash,
        user_id: m.user_id,
        expires_at: m.expires_at,
        created_at: m.created_at,
    }
}

#[async_trait]
impl RefreshTokenRepository for SeaOrmRefreshTokenRepository {
    async fn create(&self, new: NewRefreshToken) -> DomainResult<RefreshToken> {
        let model = refresh_token::ActiveModel {
            token_hash: Set(new.token_hash),
            user_id: Set(new.user_id),
            expires_at: Set(new.expires_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>> {
        let model = refresh_token::Entity::find()
            .filter(refresh_token::Column::TokenHash.eq(token_hash))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        refresh_token::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete_for_user(&self, user_id: &str) -> DomainResult<u64> {
        let result = refresh_token::Entity::delete_many()
            .filter(refresh_token::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = refresh_token::Entity::delete_many()
            .filter(refresh_token::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
