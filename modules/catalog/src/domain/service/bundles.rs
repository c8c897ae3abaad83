use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Bundle, BundlePatch, NewBundle};
use crate::domain::repos::BundlesRepository;

pub struct BundlesService {
    repo: Arc<dyn BundlesRepository>,
}

impl BundlesService {
    pub fn new(repo: Arc<dyn BundlesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Bundle>, DomainError> {
        debug!("listing bundles");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Bundle, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Bundle", id))
    }

    #[instrument(skip(self, new_bundle), fields(name = %new_bundle.name, items = new_bundle.items.len()))]
    pub async fn create(&self, new_bundle: NewBundle) -> Result<Bundle, DomainError> {
        let now = OffsetDateTime::now_utc();
        let bundle = Bundle {
            id: new_bundle.id.unwrap_or_else(Uuid::now_v7),
            name: new_bundle.name,
            description: new_bundle.description,
            price: new_bundle.price,
            is_active: new_bundle.is_active,
            items: new_bundle.items,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(bundle).await?;
        info!(bundle_id = %created.id, "bundle created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: BundlePatch) -> Result<Bundle, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("bundle updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Bundle", id));
        }
        info!("bundle deleted");
        Ok(())
    }
}
