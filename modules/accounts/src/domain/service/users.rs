use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewUser, User, UserPatch, UserUpdate};
use crate::domain::password::hash_password;
use crate::domain::repos::UsersRepository;

pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        debug!("listing users");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("getting user");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: new_user.id.unwrap_or_else(Uuid::now_v7),
            email: new_user.email,
            name: new_user.name,
            password_hash: hash_password(&new_user.password),
            gender: new_user.gender,
            age: new_user.age,
            height_cm: new_user.height_cm,
            weight_kg: new_user.weight_kg,
            goal: new_user.goal,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(user).await?;
        info!(user_id = %created.id, "user created");
        Ok(created)
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: Uuid, update: UserUpdate) -> Result<User, DomainError> {
        let patch = UserPatch {
            email: update.email,
            name: update.name,
            password_hash: update.password.map(|p| hash_password(&p)),
            gender: update.gender,
            age: update.age,
            height_cm: update.height_cm,
            weight_kg: update.weight_kg,
            goal: update.goal,
        };

        let updated = self.repo.update(id, patch).await?;
        info!("user updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("User", id));
        }
        info!("user deleted");
        Ok(())
    }
}
