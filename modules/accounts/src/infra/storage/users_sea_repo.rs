use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{User, UserPatch};
use crate::domain::repos::UsersRepository;

use super::entity::user::{ActiveModel as UserAM, Column, Entity as UserEntity};
use super::{db_err, row_err};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone)]
pub struct OrmUsersRepository {
    db: DatabaseConnection,
}

impl OrmUsersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let m = UserAM {
            id: Set(user.id),
            email: Set(user.email),
            name: Set(user.name),
            password_hash: Set(user.password_hash),
            gender: Set(user.gender),
            age: Set(user.age),
            height_cm: Set(user.height_cm),
            weight_kg: Set(user.weight_kg),
            goal: Set(user.goal),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = UserAM {
            id: Unchanged(id),
            email: patch.email.into_active(),
            name: patch.name.into_active(),
            password_hash: patch.password_hash.into_active(),
            gender: patch.gender.into_active(),
            age: patch.age.into_active(),
            height_cm: patch.height_cm.into_active(),
            weight_kg: patch.weight_kg.into_active(),
            goal: patch.goal.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&self.db).await.map_err(row_err("User", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
