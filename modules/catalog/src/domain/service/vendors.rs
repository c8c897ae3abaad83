use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewVendor, Vendor, VendorPatch};
use crate::domain::repos::VendorsRepository;

pub struct VendorsService {
    repo: Arc<dyn VendorsRepository>,
}

impl VendorsService {
    pub fn new(repo: Arc<dyn VendorsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Vendor>, DomainError> {
        debug!("listing vendors");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Vendor, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vendor", id))
    }

    #[instrument(skip(self, new_vendor), fields(name = %new_vendor.name))]
    pub async fn create(&self, new_vendor: NewVendor) -> Result<Vendor, DomainError> {
        let now = OffsetDateTime::now_utc();
        let vendor = Vendor {
            id: new_vendor.id.unwrap_or_else(Uuid::now_v7),
            name: new_vendor.name,
            email: new_vendor.email,
            phone: new_vendor.phone,
            is_active: new_vendor.is_active,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(vendor).await?;
        info!(vendor_id = %created.id, "vendor created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: VendorPatch) -> Result<Vendor, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("vendor updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Vendor", id));
        }
        info!("vendor deleted");
        Ok(())
    }
}
