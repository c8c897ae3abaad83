use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Address, AddressPatch, NewAddress};
use crate::domain::repos::AddressesRepository;

pub struct AddressesService {
    repo: Arc<dyn AddressesRepository>,
}

impl AddressesService {
    pub fn new(repo: Arc<dyn AddressesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Address>, DomainError> {
        debug!("listing addresses");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Address, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Address", id))
    }

    #[instrument(skip(self, new_address), fields(user_id = %new_address.user_id))]
    pub async fn create(&self, new_address: NewAddress) -> Result<Address, DomainError> {
        let now = OffsetDateTime::now_utc();
        let address = Address {
            id: new_address.id.unwrap_or_else(Uuid::now_v7),
            user_id: new_address.user_id,
            line1: new_address.line1,
            line2: new_address.line2,
            city: new_address.city,
            region: new_address.region,
            postal_code: new_address.postal_code,
            country: new_address.country,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(address).await?;
        info!(address_id = %created.id, "address created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: AddressPatch) -> Result<Address, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("address updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Address", id));
        }
        info!("address deleted");
        Ok(())
    }
}
