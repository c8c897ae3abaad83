use std::sync::Arc;

use grocer_kit::Patch;
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{ImageUpload, NewProduct, Product, ProductPatch, ProductView};
use crate::domain::ports::ImageStore;
use crate::domain::repos::ProductsRepository;

/// Storage folder for product images.
pub const PRODUCT_IMAGE_FOLDER: &str = "products";

pub struct ProductsService {
    repo: Arc<dyn ProductsRepository>,
    images: Arc<dyn ImageStore>,
}

impl ProductsService {
    pub fn new(repo: Arc<dyn ProductsRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { repo, images }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductView>, DomainError> {
        debug!("listing products");
        let products = self.repo.list().await?;
        let mut views = Vec::with_capacity(products.len());
        for product in products {
            views.push(self.view(product).await);
        }
        Ok(views)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<ProductView, DomainError> {
        let product = self.find(id).await?;
        Ok(self.view(product).await)
    }

    /// Uploads `image` first, then inserts the product with the stored object path.
    #[instrument(skip(self, new_product, image), fields(sku = %new_product.sku, has_image = image.is_some()))]
    pub async fn create(
        &self,
        new_product: NewProduct,
        image: Option<ImageUpload>,
    ) -> Result<ProductView, DomainError> {
        let image_path = match image {
            Some(upload) => Some(self.upload(upload).await?),
            None => None,
        };

        let now = OffsetDateTime::now_utc();
        let product = Product {
            id: new_product.id.unwrap_or_else(Uuid::now_v7),
            vendor_id: new_product.vendor_id,
            name: new_product.name,
            sku: new_product.sku,
            price: new_product.price,
            description: new_product.description,
            unit: new_product.unit,
            image_path: image_path.clone(),
            is_active: new_product.is_active,
            category_ids: new_product.category_ids,
            created_at: now,
            updated_at: now,
        };

        let created = match self.repo.create(product).await {
            Ok(created) => created,
            Err(e) => {
                if let Some(path) = image_path {
                    warn!(%path, error = %e, "product insert failed, orphaned image left in storage");
                }
                return Err(e);
            }
        };
        info!(product_id = %created.id, "product created");
        Ok(self.view(created).await)
    }

    /// A new image replaces the stored one; the previous object is removed best effort.
    #[instrument(skip(self, patch, image), fields(has_image = image.is_some()))]
    pub async fn update(
        &self,
        id: Uuid,
        mut patch: ProductPatch,
        image: Option<ImageUpload>,
    ) -> Result<ProductView, DomainError> {
        let mut previous_image = None;
        let mut uploaded = None;
        if let Some(upload) = image {
            previous_image = self.find(id).await?.image_path;
            let path = self.upload(upload).await?;
            patch.image_path = Patch::Set(Some(path.clone()));
            uploaded = Some(path);
        } else if patch.image_path.is_set() {
            previous_image = self.find(id).await?.image_path;
        }

        let updated = match self.repo.update(id, patch).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(path) = uploaded {
                    warn!(%path, error = %e, "product update failed, orphaned image left in storage");
                }
                return Err(e);
            }
        };
        if let Some(old) = previous_image
            && updated.image_path.as_deref() != Some(old.as_str())
        {
            self.discard_image(&old).await;
        }
        info!("product updated");
        Ok(self.view(updated).await)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let existing = self.find(id).await?;
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Product", id));
        }
        if let Some(path) = existing.image_path {
            self.discard_image(&path).await;
        }
        info!("product deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Product, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    async fn upload(&self, upload: ImageUpload) -> Result<String, DomainError> {
        let path = self
            .images
            .upload(&upload.filename, upload.data, PRODUCT_IMAGE_FOLDER)
            .await?;
        debug!(%path, "product image stored");
        Ok(path)
    }

    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.images.delete(path).await {
            warn!(%path, error = %e, "failed to delete product image");
        }
    }

    async fn view(&self, product: Product) -> ProductView {
        let image_url = match product.image_path.as_deref() {
            Some(path) => match self.images.presigned_url(path).await {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(product_id = %product.id, %path, error = %e, "failed to resolve image url");
                    None
                }
            },
            None => None,
        };
        ProductView { product, image_url }
    }
}
