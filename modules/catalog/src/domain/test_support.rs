//! In-memory repositories and image store for service and handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use grocer_kit::{Patch, PatchSet};
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::DomainError;
use super::models::{
    Bundle, BundlePatch, Category, CategoryPatch, Inventory, InventoryPatch, Product,
    ProductCategory, ProductCategoryPatch, ProductPatch, Vendor, VendorPatch,
};
use super::ports::ImageStore;
use super::repos::{
    BundlesRepository, CategoriesRepository, InventoriesRepository, ProductCategoriesRepository,
    ProductsRepository, VendorsRepository,
};

/// Shared plumbing for the simple fakes: a map keyed by id.
pub struct Table<T> {
    rows: Mutex<BTreeMap<Uuid, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<T: Clone> Table<T> {
    fn list(&self) -> Vec<T> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn get(&self, id: Uuid) -> Option<T> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn insert(&self, id: Uuid, row: T) -> T {
        self.rows.lock().unwrap().insert(id, row.clone());
        row
    }

    fn modify(
        &self,
        entity: &'static str,
        id: Uuid,
        apply: impl FnOnce(&mut T),
    ) -> Result<T, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(entity, id))?;
        apply(row);
        Ok(row.clone())
    }

    fn remove(&self, id: Uuid) -> bool {
        self.rows.lock().unwrap().remove(&id).is_some()
    }
}

#[derive(Default)]
pub struct InMemoryVendors(Table<Vendor>);

#[async_trait]
impl VendorsRepository for InMemoryVendors {
    async fn list(&self) -> Result<Vec<Vendor>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, vendor: Vendor) -> Result<Vendor, DomainError> {
        Ok(self.0.insert(vendor.id, vendor))
    }

    async fn update(&self, id: Uuid, patch: VendorPatch) -> Result<Vendor, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Vendor", id, |v| {
            patch.name.apply_to(&mut v.name);
            patch.email.apply_to(&mut v.email);
            patch.phone.apply_to(&mut v.phone);
            patch.is_active.apply_to(&mut v.is_active);
            patch.deleted_at.apply_to(&mut v.deleted_at);
            v.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryCategories(Table<Category>);

#[async_trait]
impl CategoriesRepository for InMemoryCategories {
    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        Ok(self.0.insert(category.id, category))
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Category", id, |c| {
            patch.name.apply_to(&mut c.name);
            patch.description.apply_to(&mut c.description);
            c.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    table: Table<Product>,
    pub writes: Mutex<usize>,
}

#[async_trait]
impl ProductsRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.table.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        Ok(self.table.get(id))
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        if self.table.list().iter().any(|p| p.sku == product.sku) {
            return Err(DomainError::conflict("products.sku"));
        }
        *self.writes.lock().unwrap() += 1;
        Ok(self.table.insert(product.id, product))
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        if let Patch::Set(sku) = &patch.sku
            && self.table.list().iter().any(|p| p.id != id && &p.sku == sku)
        {
            return Err(DomainError::conflict("products.sku"));
        }
        *self.writes.lock().unwrap() += 1;
        self.table.modify("Product", id, |p| {
            patch.vendor_id.apply_to(&mut p.vendor_id);
            patch.name.apply_to(&mut p.name);
            patch.sku.apply_to(&mut p.sku);
            patch.price.apply_to(&mut p.price);
            patch.description.apply_to(&mut p.description);
            patch.unit.apply_to(&mut p.unit);
            patch.image_path.apply_to(&mut p.image_path);
            patch.is_active.apply_to(&mut p.is_active);
            patch.category_ids.apply_to(&mut p.category_ids);
            p.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.table.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryProductCategories(Table<ProductCategory>);

#[async_trait]
impl ProductCategoriesRepository for InMemoryProductCategories {
    async fn list(&self) -> Result<Vec<ProductCategory>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, link: ProductCategory) -> Result<ProductCategory, DomainError> {
        Ok(self.0.insert(link.id, link))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProductCategoryPatch,
    ) -> Result<ProductCategory, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("ProductCategory", id, |l| {
            patch.product_id.apply_to(&mut l.product_id);
            patch.category_id.apply_to(&mut l.category_id);
            l.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryInventories(Table<Inventory>);

#[async_trait]
impl InventoriesRepository for InMemoryInventories {
    async fn list(&self) -> Result<Vec<Inventory>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, inventory: Inventory) -> Result<Inventory, DomainError> {
        Ok(self.0.insert(inventory.id, inventory))
    }

    async fn update(&self, id: Uuid, patch: InventoryPatch) -> Result<Inventory, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Inventory", id, |i| {
            patch.product_id.apply_to(&mut i.product_id);
            patch.vendor_id.apply_to(&mut i.vendor_id);
            patch.quantity.apply_to(&mut i.quantity);
            patch.restock_threshold.apply_to(&mut i.restock_threshold);
            i.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryBundles(Table<Bundle>);

#[async_trait]
impl BundlesRepository for InMemoryBundles {
    async fn list(&self) -> Result<Vec<Bundle>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bundle>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, bundle: Bundle) -> Result<Bundle, DomainError> {
        Ok(self.0.insert(bundle.id, bundle))
    }

    async fn update(&self, id: Uuid, patch: BundlePatch) -> Result<Bundle, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Bundle", id, |b| {
            patch.name.apply_to(&mut b.name);
            patch.description.apply_to(&mut b.description);
            patch.price.apply_to(&mut b.price);
            patch.is_active.apply_to(&mut b.is_active);
            patch.items.apply_to(&mut b.items);
            b.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

/// Image store that keeps objects in memory and can be told to fail.
#[derive(Default)]
pub struct FakeImageStore {
    pub objects: Mutex<BTreeMap<String, Bytes>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_presign: bool,
    pub fail_upload: bool,
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn upload(
        &self,
        filename: &str,
        data: Bytes,
        folder: &str,
    ) -> Result<String, DomainError> {
        if !filename.ends_with(".png") && !filename.ends_with(".jpg") {
            return Err(DomainError::invalid_image("invalid file type"));
        }
        if self.fail_upload {
            return Err(DomainError::image_storage("bucket unavailable"));
        }
        let mut objects = self.objects.lock().unwrap();
        let path = format!("{folder}/{}-{filename}", objects.len());
        objects.insert(path.clone(), data);
        Ok(path)
    }

    async fn presigned_url(&self, path: &str) -> Result<String, DomainError> {
        if self.fail_presign {
            return Err(DomainError::image_storage("signing failed"));
        }
        Ok(format!("https://cdn.test/{path}?sig=1"))
    }

    async fn delete(&self, path: &str) -> Result<(), DomainError> {
        self.objects.lock().unwrap().remove(path);
        self.deleted.lock().unwrap().push(path.to_owned());
        Ok(())
    }
}
