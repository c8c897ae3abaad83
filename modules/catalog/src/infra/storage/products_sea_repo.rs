use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Product, ProductPatch};
use crate::domain::repos::ProductsRepository;

use super::entity::product::{ActiveModel as ProductAM, Column, Entity as ProductEntity};
use super::entity::product_category::{
    self as link, ActiveModel as LinkAM, Entity as LinkEntity,
};
use super::mapper::product_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmProductsRepository {
    db: DatabaseConnection,
}

impl OrmProductsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn links_of<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
) -> Result<Vec<link::Model>, DomainError> {
    LinkEntity::find()
        .filter(link::Column::ProductId.eq(product_id))
        .all(conn)
        .await
        .map_err(db_err)
}

/// Inserts one link per distinct category id.
async fn insert_links<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
    mut category_ids: Vec<Uuid>,
    now: OffsetDateTime,
) -> Result<Vec<link::Model>, DomainError> {
    category_ids.sort_unstable();
    category_ids.dedup();

    let links: Vec<link::Model> = category_ids
        .into_iter()
        .map(|category_id| link::Model {
            id: Uuid::now_v7(),
            product_id,
            category_id,
            created_at: now,
            updated_at: now,
        })
        .collect();
    if !links.is_empty() {
        LinkEntity::insert_many(links.iter().cloned().map(LinkAM::from))
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
    }
    Ok(links)
}

#[async_trait]
impl ProductsRepository for OrmProductsRepository {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows = ProductEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let links = rows
            .load_many(LinkEntity, &self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .zip(links)
            .map(|(product, links)| product_from(product, links))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let Some(found) = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let links = links_of(&self.db, id).await?;
        Ok(Some(product_from(found, links)))
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = ProductAM {
            id: Set(product.id),
            vendor_id: Set(product.vendor_id),
            name: Set(product.name),
            sku: Set(product.sku),
            price: Set(product.price),
            description: Set(product.description),
            unit: Set(product.unit),
            image_path: Set(product.image_path),
            is_active: Set(product.is_active),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let links = insert_links(&txn, product.id, product.category_ids, product.created_at).await?;

        txn.commit().await.map_err(db_err)?;
        Ok(product_from(inserted, links))
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let now = OffsetDateTime::now_utc();
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = ProductAM {
            id: Unchanged(id),
            vendor_id: patch.vendor_id.into_active(),
            name: patch.name.into_active(),
            sku: patch.sku.into_active(),
            price: patch.price.into_active(),
            description: patch.description.into_active(),
            unit: patch.unit.into_active(),
            image_path: patch.image_path.into_active(),
            is_active: patch.is_active.into_active(),
            updated_at: Set(now),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("Product", id))?;

        let links = match patch.category_ids.into_option() {
            Some(category_ids) => {
                LinkEntity::delete_many()
                    .filter(link::Column::ProductId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_links(&txn, id, category_ids, now).await?
            }
            None => links_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        Ok(product_from(updated, links))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
