//! In-memory repositories for service and handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use grocer_kit::PatchSet;
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::DomainError;
use super::models::{Address, AddressPatch, User, UserPatch};
use super::repos::{AddressesRepository, UsersRepository};

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<BTreeMap<Uuid, User>>,
    pub writes: Mutex<usize>,
}

#[async_trait]
impl UsersRepository for InMemoryUsers {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("users.email"));
        }
        *self.writes.lock().unwrap() += 1;
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("User", id))?;
        patch.email.apply_to(&mut user.email);
        patch.name.apply_to(&mut user.name);
        patch.password_hash.apply_to(&mut user.password_hash);
        patch.gender.apply_to(&mut user.gender);
        patch.age.apply_to(&mut user.age);
        patch.height_cm.apply_to(&mut user.height_cm);
        patch.weight_kg.apply_to(&mut user.weight_kg);
        patch.goal.apply_to(&mut user.goal);
        user.updated_at = OffsetDateTime::now_utc();
        *self.writes.lock().unwrap() += 1;
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryAddresses {
    rows: Mutex<BTreeMap<Uuid, Address>>,
}

#[async_trait]
impl AddressesRepository for InMemoryAddresses {
    async fn list(&self) -> Result<Vec<Address>, DomainError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, address: Address) -> Result<Address, DomainError> {
        self.rows
            .lock()
            .unwrap()
            .insert(address.id, address.clone());
        Ok(address)
    }

    async fn update(&self, id: Uuid, patch: AddressPatch) -> Result<Address, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        let mut rows = self.rows.lock().unwrap();
        let address = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Address", id))?;
        patch.line1.apply_to(&mut address.line1);
        patch.line2.apply_to(&mut address.line2);
        patch.city.apply_to(&mut address.city);
        patch.region.apply_to(&mut address.region);
        patch.postal_code.apply_to(&mut address.postal_code);
        patch.country.apply_to(&mut address.country);
        address.updated_at = OffsetDateTime::now_utc();
        Ok(address.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}
