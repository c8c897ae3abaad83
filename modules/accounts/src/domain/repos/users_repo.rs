use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{User, UserPatch};

/// Persistence operations for users.
///
/// `update` fails with [`DomainError::NoFieldsToUpdate`] when the patch is empty, before
/// touching storage.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn create(&self, user: User) -> Result<User, DomainError>;

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
