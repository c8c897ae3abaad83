use grocer_kit::Patch;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::migrations::Migrator;
use super::{
    OrmBundlesRepository, OrmCategoriesRepository, OrmInventoriesRepository,
    OrmProductCategoriesRepository, OrmProductsRepository, OrmVendorsRepository,
};
use crate::domain::error::DomainError;
use crate::domain::models::{
    Bundle, BundleItem, BundlePatch, Category, Inventory, Product, ProductCategory, ProductPatch,
    Vendor, VendorPatch,
};
use crate::domain::repos::{
    BundlesRepository, CategoriesRepository, InventoriesRepository, ProductCategoriesRepository,
    ProductsRepository, VendorsRepository,
};

async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn vendor() -> Vendor {
    let now = OffsetDateTime::now_utc();
    Vendor {
        id: Uuid::now_v7(),
        name: "Green Acres".to_owned(),
        email: Some("hello@greenacres.test".to_owned()),
        phone: None,
        is_active: true,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn category(name: &str) -> Category {
    let now = OffsetDateTime::now_utc();
    Category {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

fn product(vendor_id: Uuid, sku: &str, category_ids: Vec<Uuid>) -> Product {
    let now = OffsetDateTime::now_utc();
    Product {
        id: Uuid::now_v7(),
        vendor_id,
        name: "Spinach".to_owned(),
        sku: sku.to_owned(),
        price: 2.5,
        description: Some("Baby leaves".to_owned()),
        unit: "bag".to_owned(),
        image_path: None,
        is_active: true,
        category_ids,
        created_at: now,
        updated_at: now,
    }
}

/// Vendor plus one product with no categories.
async fn seeded_product(db: &DatabaseConnection) -> Product {
    let vendor = OrmVendorsRepository::new(db.clone())
        .create(vendor())
        .await
        .unwrap();
    OrmProductsRepository::new(db.clone())
        .create(product(vendor.id, "SPN-1", vec![]))
        .await
        .unwrap()
}

#[tokio::test]
async fn vendors_crud_round_trip() {
    let repo = OrmVendorsRepository::new(setup().await);

    let created = repo.create(vendor()).await.unwrap();
    assert_eq!(repo.list().await.unwrap(), vec![created.clone()]);

    let retired_at = OffsetDateTime::now_utc();
    let updated = repo
        .update(
            created.id,
            VendorPatch {
                is_active: Patch::Set(false),
                email: Patch::Set(None),
                deleted_at: Patch::Set(Some(retired_at)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.is_active);
    assert_eq!(updated.email, None);
    assert!(updated.deleted_at.is_some());
    assert_eq!(updated.name, created.name);

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn empty_patch_fails_before_lookup() {
    let repo = OrmBundlesRepository::new(setup().await);
    let err = repo
        .update(Uuid::new_v4(), BundlePatch::default())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::NoFieldsToUpdate);
}

#[tokio::test]
async fn product_round_trips_category_links() {
    let db = setup().await;
    let vendor = OrmVendorsRepository::new(db.clone())
        .create(vendor())
        .await
        .unwrap();
    let categories = OrmCategoriesRepository::new(db.clone());
    let greens = categories.create(category("Greens")).await.unwrap();
    let organic = categories.create(category("Organic")).await.unwrap();

    let repo = OrmProductsRepository::new(db.clone());
    let created = repo
        .create(product(vendor.id, "SPN-1", vec![organic.id, greens.id, organic.id]))
        .await
        .unwrap();

    let mut expected = vec![greens.id, organic.id];
    expected.sort();
    assert_eq!(created.category_ids, expected);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(repo.list().await.unwrap(), vec![created.clone()]);

    let updated = repo
        .update(
            created.id,
            ProductPatch {
                category_ids: Patch::Set(vec![greens.id]),
                image_path: Patch::Set(Some("products/spinach.png".to_owned())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.category_ids, vec![greens.id]);
    assert_eq!(updated.image_path.as_deref(), Some("products/spinach.png"));
    assert_eq!(updated.sku, "SPN-1");

    let links = OrmProductCategoriesRepository::new(db).list().await.unwrap();
    assert_eq!(links.len(), 1);
}

#[tokio::test]
async fn duplicate_sku_is_a_conflict() {
    let db = setup().await;
    let existing = seeded_product(&db).await;

    let err = OrmProductsRepository::new(db)
        .create(product(existing.vendor_id, "SPN-1", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }), "{err:?}");
}

#[tokio::test]
async fn product_requires_existing_vendor() {
    let repo = OrmProductsRepository::new(setup().await);
    let err = repo
        .create(product(Uuid::new_v4(), "SPN-1", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Constraint { .. }), "{err:?}");
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_link_insert_rolls_back_product() {
    let db = setup().await;
    let vendor = OrmVendorsRepository::new(db.clone())
        .create(vendor())
        .await
        .unwrap();
    let repo = OrmProductsRepository::new(db);

    let err = repo
        .create(product(vendor.id, "SPN-1", vec![Uuid::new_v4()]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Constraint { .. }), "{err:?}");
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_product_category_link_is_a_conflict() {
    let db = setup().await;
    let product = seeded_product(&db).await;
    let category = OrmCategoriesRepository::new(db.clone())
        .create(category("Greens"))
        .await
        .unwrap();
    let links = OrmProductCategoriesRepository::new(db);
    let link = |id| {
        let now = OffsetDateTime::now_utc();
        ProductCategory {
            id,
            product_id: product.id,
            category_id: category.id,
            created_at: now,
            updated_at: now,
        }
    };

    links.create(link(Uuid::now_v7())).await.unwrap();
    let err = links.create(link(Uuid::now_v7())).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }), "{err:?}");
}

#[tokio::test]
async fn inventories_follow_their_product() {
    let db = setup().await;
    let product = seeded_product(&db).await;
    let inventories = OrmInventoriesRepository::new(db.clone());
    let now = OffsetDateTime::now_utc();

    let created = inventories
        .create(Inventory {
            id: Uuid::now_v7(),
            product_id: product.id,
            vendor_id: product.vendor_id,
            quantity: 40,
            restock_threshold: 10,
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap();
    assert_eq!(inventories.list().await.unwrap(), vec![created.clone()]);

    assert!(
        OrmProductsRepository::new(db)
            .delete(product.id)
            .await
            .unwrap()
    );
    assert_eq!(inventories.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn bundle_items_keep_order_and_are_replaced() {
    let db = setup().await;
    let product = seeded_product(&db).await;
    let other = OrmProductsRepository::new(db.clone())
        .create(self::product(product.vendor_id, "KAL-1", vec![]))
        .await
        .unwrap();
    let repo = OrmBundlesRepository::new(db);
    let now = OffsetDateTime::now_utc();
    let items = vec![
        BundleItem {
            product_id: other.id,
            quantity: 3,
        },
        BundleItem {
            product_id: product.id,
            quantity: 1,
        },
    ];

    let created = repo
        .create(Bundle {
            id: Uuid::now_v7(),
            name: "Salad kit".to_owned(),
            description: None,
            price: 9.0,
            is_active: true,
            items: items.clone(),
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap();
    assert_eq!(created.items, items);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));

    let updated = repo
        .update(
            created.id,
            BundlePatch {
                items: Patch::Set(vec![items[1]]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.items, vec![items[1]]);
    assert_eq!(repo.list().await.unwrap(), vec![updated]);
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let repo = OrmProductsRepository::new(setup().await);
    let id = Uuid::new_v4();
    let err = repo
        .update(
            id,
            ProductPatch {
                name: Patch::Set("Kale".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::not_found("Product", id));
}
