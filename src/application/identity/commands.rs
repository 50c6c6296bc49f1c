use crate::domain::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: UserRole,
    pub activo: bool,
}

/// Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub rol: Option<UserRole>,
    pub activo: Option<bool>,
}
