//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr,
};

use crate::domain::{CreateUserDto, DomainError, DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

const DUPLICATE_USERNAME: &str = "A user with that username already exists.";

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
        user::UserRole::Superuser => UserRole::Superuser,
        user::UserRole::Regular => UserRole::Regular,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Superuser => user::UserRole::Superuser,
        UserRole::Regular => user::UserRole::Regular,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
        last_login_at: model.last_login_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        if self.find_by_username(&dto.username).await?.is_some() {
            return Err(DomainError::invalid_field("username", DUPLICATE_USERNAME));
        }

        let now = Utc::now();
        let new_user = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(dto.username),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            role: Set(domain_role_to_entity(dto.role)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };

        // A concurrent registration can still win the race past the check above.
        let model = new_user.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::invalid_field("username", DUPLICATE_USERNAME)
            }
            _ => DomainError::from(e),
        })?;
        Ok(user_model_to_domain(model))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn record_login(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("User", id));
        };

        let now = Utc::now();
        let mut model: user::ActiveModel = existing.into();
        model.last_login_at = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}
