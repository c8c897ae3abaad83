use grocer_kit::patch::nullable;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::{
    Bundle, BundleItem, BundlePatch, Category, CategoryPatch, Inventory, InventoryPatch, NewBundle,
    NewCategory, NewInventory, NewProduct, NewProductCategory, NewVendor, ProductCategory,
    ProductCategoryPatch, ProductPatch, ProductView, Vendor, VendorPatch,
};

fn default_true() -> bool {
    true
}

/// Tri-state RFC 3339 timestamp: absent, `null` or a value.
fn nullable_rfc3339<'de, D>(deserializer: D) -> Result<Option<Option<OffsetDateTime>>, D::Error>
where
    D: Deserializer<'de>,
{
    time::serde::rfc3339::option::deserialize(deserializer).map(Some)
}

// ==================== Vendor ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorDto {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVendorReq {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVendorReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(email)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "nullable_rfc3339")]
    pub deleted_at: Option<Option<OffsetDateTime>>,
}

impl From<Vendor> for VendorDto {
    fn from(v: Vendor) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
            phone: v.phone,
            is_active: v.is_active,
            deleted_at: v.deleted_at,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

impl From<CreateVendorReq> for NewVendor {
    fn from(req: CreateVendorReq) -> Self {
        Self {
            id: req.id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            is_active: req.is_active,
        }
    }
}

impl From<UpdateVendorReq> for VendorPatch {
    fn from(req: UpdateVendorReq) -> Self {
        Self {
            name: req.name.into(),
            email: req.email.into(),
            phone: req.phone.into(),
            is_active: req.is_active.into(),
            deleted_at: req.deleted_at.into(),
        }
    }
}

// ==================== Category ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryReq {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CreateCategoryReq> for NewCategory {
    fn from(req: CreateCategoryReq) -> Self {
        Self {
            id: req.id,
            name: req.name,
            description: req.description,
        }
    }
}

impl From<UpdateCategoryReq> for CategoryPatch {
    fn from(req: UpdateCategoryReq) -> Self {
        Self {
            name: req.name.into(),
            description: req.description.into(),
        }
    }
}

// ==================== Product ====================

/// Product as served to clients; `image_url` is a short-lived presigned link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDto {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub description: Option<String>,
    pub unit: String,
    pub image_path: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub category_ids: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductReq {
    pub id: Option<Uuid>,
    pub vendor_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub unit: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductReq {
    #[serde(default)]
    pub vendor_id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub sku: Option<String>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub unit: Option<String>,
    /// `null` detaches the current image.
    #[serde(default, deserialize_with = "nullable")]
    pub image_path: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub category_ids: Option<Vec<Uuid>>,
}

impl From<ProductView> for ProductDto {
    fn from(view: ProductView) -> Self {
        let p = view.product;
        Self {
            id: p.id,
            vendor_id: p.vendor_id,
            name: p.name,
            sku: p.sku,
            price: p.price,
            description: p.description,
            unit: p.unit,
            image_path: p.image_path,
            image_url: view.image_url,
            is_active: p.is_active,
            category_ids: p.category_ids,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreateProductReq> for NewProduct {
    fn from(req: CreateProductReq) -> Self {
        Self {
            id: req.id,
            vendor_id: req.vendor_id,
            name: req.name,
            sku: req.sku,
            price: req.price,
            description: req.description,
            unit: req.unit,
            is_active: req.is_active,
            category_ids: req.category_ids,
        }
    }
}

impl From<UpdateProductReq> for ProductPatch {
    fn from(req: UpdateProductReq) -> Self {
        Self {
            vendor_id: req.vendor_id.into(),
            name: req.name.into(),
            sku: req.sku.into(),
            price: req.price.into(),
            description: req.description.into(),
            unit: req.unit.into(),
            image_path: req.image_path.into(),
            is_active: req.is_active.into(),
            category_ids: req.category_ids.into(),
        }
    }
}

// ==================== ProductCategory ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategoryDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub category_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductCategoryReq {
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductCategoryReq {
    #[serde(default)]
    pub product_id: Option<Uuid>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(l: ProductCategory) -> Self {
        Self {
            id: l.id,
            product_id: l.product_id,
            category_id: l.category_id,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

impl From<CreateProductCategoryReq> for NewProductCategory {
    fn from(req: CreateProductCategoryReq) -> Self {
        Self {
            id: req.id,
            product_id: req.product_id,
            category_id: req.category_id,
        }
    }
}

impl From<UpdateProductCategoryReq> for ProductCategoryPatch {
    fn from(req: UpdateProductCategoryReq) -> Self {
        Self {
            product_id: req.product_id.into(),
            category_id: req.category_id.into(),
        }
    }
}

// ==================== Inventory ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub vendor_id: Uuid,
    pub quantity: i32,
    pub restock_threshold: i32,
    pub needs_restock: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventoryReq {
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub vendor_id: Uuid,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub restock_threshold: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInventoryReq {
    #[serde(default)]
    pub product_id: Option<Uuid>,
    #[serde(default)]
    pub vendor_id: Option<Uuid>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub restock_threshold: Option<i32>,
}

impl From<Inventory> for InventoryDto {
    fn from(i: Inventory) -> Self {
        Self {
            needs_restock: i.needs_restock(),
            id: i.id,
            product_id: i.product_id,
            vendor_id: i.vendor_id,
            quantity: i.quantity,
            restock_threshold: i.restock_threshold,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

impl From<CreateInventoryReq> for NewInventory {
    fn from(req: CreateInventoryReq) -> Self {
        Self {
            id: req.id,
            product_id: req.product_id,
            vendor_id: req.vendor_id,
            quantity: req.quantity,
            restock_threshold: req.restock_threshold,
        }
    }
}

impl From<UpdateInventoryReq> for InventoryPatch {
    fn from(req: UpdateInventoryReq) -> Self {
        Self {
            product_id: req.product_id.into(),
            vendor_id: req.vendor_id.into(),
            quantity: req.quantity.into(),
            restock_threshold: req.restock_threshold.into(),
        }
    }
}

// ==================== Bundle ====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct BundleItemDto {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub items: Vec<BundleItemDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBundleReq {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<BundleItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBundleReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<BundleItemDto>>,
}

impl From<BundleItem> for BundleItemDto {
    fn from(i: BundleItem) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
        }
    }
}

impl From<BundleItemDto> for BundleItem {
    fn from(i: BundleItemDto) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
        }
    }
}

impl From<Bundle> for BundleDto {
    fn from(b: Bundle) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            price: b.price,
            is_active: b.is_active,
            items: b.items.into_iter().map(Into::into).collect(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

impl From<CreateBundleReq> for NewBundle {
    fn from(req: CreateBundleReq) -> Self {
        Self {
            id: req.id,
            name: req.name,
            description: req.description,
            price: req.price,
            is_active: req.is_active,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateBundleReq> for BundlePatch {
    fn from(req: UpdateBundleReq) -> Self {
        Self {
            name: req.name.into(),
            description: req.description.into(),
            price: req.price.into(),
            is_active: req.is_active.into(),
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect::<Vec<_>>())
                .into(),
        }
    }
}
