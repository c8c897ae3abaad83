use uuid::Uuid;

use crate::domain::models::{
    Bundle, BundleItem, Category, Inventory, Product, ProductCategory, Vendor,
};

use super::entity::{bundle, bundle_item, category, inventory, product, product_category, vendor};

impl From<vendor::Model> for Vendor {
    fn from(m: vendor::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            is_active: m.is_active,
            deleted_at: m.deleted_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<category::Model> for Category {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<product_category::Model> for ProductCategory {
    fn from(m: product_category::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            category_id: m.category_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<inventory::Model> for Inventory {
    fn from(m: inventory::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            vendor_id: m.vendor_id,
            quantity: m.quantity,
            restock_threshold: m.restock_threshold,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Category ids are returned sorted so reads are stable regardless of link order.
pub(crate) fn product_from(m: product::Model, links: Vec<product_category::Model>) -> Product {
    let mut category_ids: Vec<Uuid> = links.into_iter().map(|l| l.category_id).collect();
    category_ids.sort_unstable();
    Product {
        id: m.id,
        vendor_id: m.vendor_id,
        name: m.name,
        sku: m.sku,
        price: m.price,
        description: m.description,
        unit: m.unit,
        image_path: m.image_path,
        is_active: m.is_active,
        category_ids,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub(crate) fn bundle_from(m: bundle::Model, mut items: Vec<bundle_item::Model>) -> Bundle {
    items.sort_by_key(|i| i.position);
    Bundle {
        id: m.id,
        name: m.name,
        description: m.description,
        price: m.price,
        is_active: m.is_active,
        items: items
            .into_iter()
            .map(|i| BundleItem {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect(),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
