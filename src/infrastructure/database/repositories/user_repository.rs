//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{db_err, not_found, unique_err};
use crate::domain::user::{NewUser, User, UserFilter, UserRepository, UserRole};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::user;
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Gestor => UserRole::Gestor,
        user::UserRole::Readonly => UserRole::Readonly,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Gestor => user::UserRole::Gestor,
        UserRole::Readonly => user::UserRole::Readonly,
    }
}

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        nombre: m.nombre,
        email: m.email,
        password_hash: m.password_hash,
        rol: entity_role_to_domain(m.rol),
        activo: m.activo,
        created_at: m.created_at,
        updated_at: m.updated_at,
        last_login_at: m.last_login_at,
    }
}

const DUPLICATE_EMAIL: &str = "A user with this email already exists";

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new: NewUser) -> DomainResult<User> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            nombre: Set(new.nombre),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            rol: Set(domain_role_to_entity(new.rol)),
            activo: Set(new.activo),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };
        let saved = model.insert(&self.db).await.map_err(unique_err(DUPLICATE_EMAIL))?;
        Ok(model_to_domain(saved))
    }

    async fn list(&self, filter: UserFilter, page: PaginationParams) -> DomainResult<PaginatedResult<User>> {
        let mut query = user::Entity::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(user::Column::Nombre.contains(search))
                    .add(user::Column::Email.contains(search)),
            );
        }
        if let Some(rol) = filter.rol {
            query = query.filter(user::Column::Rol.eq(domain_role_to_entity(rol)));
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .order_by_asc(user::Column::Nombre)
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn update(&self, u: User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(u.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("User", &u.id))?;

        let mut active: user::ActiveModel = existing.into();
        active.nombre = Set(u.nombre);
        active.email = Set(u.email);
        active.rol = Set(domain_role_to_entity(u.rol));
        active.activo = Set(u.activo);
        active.updated_at = Set(Utc::now());

        let saved = active.update(&self.db).await.map_err(unique_err(DUPLICATE_EMAIL))?;
        Ok(model_to_domain(saved))
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("User", id))?;

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(password_hash.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| not_found("User", id))?;

        let mut active: user::ActiveModel = existing.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("User", id));
        }
        Ok(())
    }
}
