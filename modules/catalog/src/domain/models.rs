use bytes::Bytes;
use grocer_kit::{Patch, PatchSet};
use time::OffsetDateTime;
use uuid::Uuid;

// ==================== Vendor ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    /// Soft-delete marker; informational only, reads do not filter on it.
    pub deleted_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVendor {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorPatch {
    pub name: Patch<String>,
    pub email: Patch<Option<String>>,
    pub phone: Patch<Option<String>>,
    pub is_active: Patch<bool>,
    pub deleted_at: Patch<Option<OffsetDateTime>>,
}

impl PatchSet for VendorPatch {
    fn is_empty(&self) -> bool {
        !(self.name.is_set()
            || self.email.is_set()
            || self.phone.is_set()
            || self.is_active.is_set()
            || self.deleted_at.is_set())
    }
}

// ==================== Category ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Patch<String>,
    pub description: Patch<Option<String>>,
}

impl PatchSet for CategoryPatch {
    fn is_empty(&self) -> bool {
        !(self.name.is_set() || self.description.is_set())
    }
}

// ==================== Product ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub description: Option<String>,
    pub unit: String,
    /// Object path in image storage, resolved to a URL on read.
    pub image_path: Option<String>,
    pub is_active: bool,
    pub category_ids: Vec<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: Option<Uuid>,
    pub vendor_id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub description: Option<String>,
    pub unit: String,
    pub is_active: bool,
    pub category_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub vendor_id: Patch<Uuid>,
    pub name: Patch<String>,
    pub sku: Patch<String>,
    pub price: Patch<f64>,
    pub description: Patch<Option<String>>,
    pub unit: Patch<String>,
    pub image_path: Patch<Option<String>>,
    pub is_active: Patch<bool>,
    /// Replaces the full set of category links.
    pub category_ids: Patch<Vec<Uuid>>,
}

impl PatchSet for ProductPatch {
    fn is_empty(&self) -> bool {
        !(self.vendor_id.is_set()
            || self.name.is_set()
            || self.sku.is_set()
            || self.price.is_set()
            || self.description.is_set()
            || self.unit.is_set()
            || self.image_path.is_set()
            || self.is_active.is_set()
            || self.category_ids.is_set())
    }
}

/// Image file received alongside a product create/update.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub data: Bytes,
}

/// Product plus its lazily resolved image URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub product: Product,
    pub image_url: Option<String>,
}

// ==================== ProductCategory ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: Uuid,
    pub product_id: Uuid,
    pub category_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductCategory {
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCategoryPatch {
    pub product_id: Patch<Uuid>,
    pub category_id: Patch<Uuid>,
}

impl PatchSet for ProductCategoryPatch {
    fn is_empty(&self) -> bool {
        !(self.product_id.is_set() || self.category_id.is_set())
    }
}

// ==================== Inventory ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub id: Uuid,
    pub product_id: Uuid,
    pub vendor_id: Uuid,
    pub quantity: i32,
    pub restock_threshold: i32,
    pub created_at: OffsetDateTime,
    /// Last time the stock level changed.
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventory {
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub vendor_id: Uuid,
    pub quantity: i32,
    pub restock_threshold: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryPatch {
    pub product_id: Patch<Uuid>,
    pub vendor_id: Patch<Uuid>,
    pub quantity: Patch<i32>,
    pub restock_threshold: Patch<i32>,
}

impl PatchSet for InventoryPatch {
    fn is_empty(&self) -> bool {
        !(self.product_id.is_set()
            || self.vendor_id.is_set()
            || self.quantity.is_set()
            || self.restock_threshold.is_set())
    }
}

impl Inventory {
    #[must_use]
    pub fn needs_restock(&self) -> bool {
        self.quantity <= self.restock_threshold
    }
}

// ==================== Bundle ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub items: Vec<BundleItem>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBundle {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub items: Vec<BundleItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundlePatch {
    pub name: Patch<String>,
    pub description: Patch<Option<String>>,
    pub price: Patch<f64>,
    pub is_active: Patch<bool>,
    /// Replaces the full item list.
    pub items: Patch<Vec<BundleItem>>,
}

impl PatchSet for BundlePatch {
    fn is_empty(&self) -> bool {
        !(self.name.is_set()
            || self.description.is_set()
            || self.price.is_set()
            || self.is_active.is_set()
            || self.items.is_set())
    }
}
