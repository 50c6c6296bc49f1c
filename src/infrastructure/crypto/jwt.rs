//! JWT Token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;

const ISSUER: &str = "trastero-admin";

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Access token lifetime in minutes
    pub expiration_minutes: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::from_security(&SecurityConfig::default())
    }
}

impl JwtConfig {
    pub fn from_security(security: &SecurityConfig) -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| security.jwt_secret.clone()),
            expiration_minutes: security.access_token_minutes,
            issuer: ISSUER.to_string(),
        }
    }

    /// Lifetime in seconds, as reported to clients.
    pub fn expires_in(&self) -> i64 {
        self.expiration_minutes * 60
    }
}

/// JWT TokenClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// admin, gestor or readonly
    pub rol: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn new(user_id: &str, email: &str, rol: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(config.expiration_minutes);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            rol: rol.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Create a JWT access token for a user
pub fn create_token(
    user_id: &str,
    email: &str,
    rol: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(user_id, email, rol, config);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a JWT token
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration_minutes: 15,
            issuer: ISSUER.to_string(),
        }
    }

    #[test]
    fn token_carries_claims() {
        let cfg = config("test-secret");
        let token = create_token("u-1", "ana@example.com", "gestor", &cfg).unwrap();
        let claims = verify_token(&token, &cfg).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.rol, "gestor");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("u-1", "a@b.es", "admin", &config("one")).unwrap();
        assert!(verify_token(&token, &config("two")).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let cfg = JwtConfig {
            expiration_minutes: -10,
            ..config("s")
        };
        let token = create_token("u-1", "a@b.es", "admin", &cfg).unwrap();
        assert!(verify_token(&token, &cfg).is_err());
    }
}
