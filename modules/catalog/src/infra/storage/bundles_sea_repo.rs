use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Bundle, BundleItem, BundlePatch};
use crate::domain::repos::BundlesRepository;

use super::entity::bundle::{ActiveModel as BundleAM, Column, Entity as BundleEntity};
use super::entity::bundle_item::{self as item, ActiveModel as ItemAM, Entity as ItemEntity};
use super::mapper::bundle_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmBundlesRepository {
    db: DatabaseConnection,
}

impl OrmBundlesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn items_of<C: ConnectionTrait>(
    conn: &C,
    bundle_id: Uuid,
) -> Result<Vec<item::Model>, DomainError> {
    ItemEntity::find()
        .filter(item::Column::BundleId.eq(bundle_id))
        .all(conn)
        .await
        .map_err(db_err)
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    bundle_id: Uuid,
    items: Vec<BundleItem>,
) -> Result<Vec<item::Model>, DomainError> {
    let rows: Vec<item::Model> = (0_i32..)
        .zip(items)
        .map(|(position, it)| item::Model {
            id: Uuid::now_v7(),
            bundle_id,
            product_id: it.product_id,
            quantity: it.quantity,
            position,
        })
        .collect();
    if !rows.is_empty() {
        ItemEntity::insert_many(rows.iter().cloned().map(ItemAM::from))
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
    }
    Ok(rows)
}

#[async_trait]
impl BundlesRepository for OrmBundlesRepository {
    async fn list(&self) -> Result<Vec<Bundle>, DomainError> {
        let rows = BundleEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = rows
            .load_many(ItemEntity, &self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .zip(items)
            .map(|(bundle, items)| bundle_from(bundle, items))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bundle>, DomainError> {
        let Some(found) = BundleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let items = items_of(&self.db, id).await?;
        Ok(Some(bundle_from(found, items)))
    }

    async fn create(&self, bundle: Bundle) -> Result<Bundle, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = BundleAM {
            id: Set(bundle.id),
            name: Set(bundle.name),
            description: Set(bundle.description),
            price: Set(bundle.price),
            is_active: Set(bundle.is_active),
            created_at: Set(bundle.created_at),
            updated_at: Set(bundle.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let items = insert_items(&txn, bundle.id, bundle.items).await?;

        txn.commit().await.map_err(db_err)?;
        Ok(bundle_from(inserted, items))
    }

    async fn update(&self, id: Uuid, patch: BundlePatch) -> Result<Bundle, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let m = BundleAM {
            id: Unchanged(id),
            name: patch.name.into_active(),
            description: patch.description.into_active(),
            price: patch.price.into_active(),
            is_active: patch.is_active.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("Bundle", id))?;

        let items = match patch.items.into_option() {
            Some(items) => {
                ItemEntity::delete_many()
                    .filter(item::Column::BundleId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_items(&txn, id, items).await?
            }
            None => items_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        Ok(bundle_from(updated, items))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = BundleEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
