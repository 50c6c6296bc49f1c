//! User domain entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::common::invalid_value;
use crate::domain::DomainError;

/// Back-office role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Full access, including user management
    Admin,
    /// Reads and writes business data
    Gestor,
    /// Read-only access
    Readonly,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Readonly
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Gestor => "gestor",
            Self::Readonly => "readonly",
        }
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Self::Admin | Self::Gestor)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "gestor" => Ok(Self::Gestor),
            "readonly" => Ok(Self::Readonly),
            other => Err(invalid_value("rol", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub rol: UserRole,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub rol: UserRole,
    pub activo: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Matches nombre or email
    pub search: Option<String>,
    pub rol: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip_and_permissions() {
        for role in [UserRole::Admin, UserRole::Gestor, UserRole::Readonly] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!(UserRole::Gestor.can_write());
        assert!(!UserRole::Readonly.can_write());
        assert!(!UserRole::Gestor.is_admin());
        assert!("operator".parse::<UserRole>().is_err());
    }
}
