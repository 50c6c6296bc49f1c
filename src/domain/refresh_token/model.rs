use chrono::{DateTime, Utc};

/// Stored refresh token. Only the sha256 hash of the opaque token is kept.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: i32,
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let now = Utc::now();
        let token = RefreshToken {
            id: 1,
            token_hash: "h".into(),
            user_id: "u".into(),
            expires_at: now,
            created_at: now - Duration::days(1),
        };
        assert!(token.is_expired_at(now));
        assert!(!token.is_expired_at(now - Duration::seconds(1)));
    }
}
