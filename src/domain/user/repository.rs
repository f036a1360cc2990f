use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. A taken username is reported as an
    /// `InvalidField` error on `username`.
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn record_login(&self, id: &str) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<u64>;
}
