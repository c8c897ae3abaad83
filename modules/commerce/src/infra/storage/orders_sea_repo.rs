use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Order, OrderItem, OrderPatch};
use crate::domain::repos::OrdersRepository;

use super::entity::order::{ActiveModel as OrderAM, Column, Entity as OrderEntity};
use super::entity::order_item::{self as item, ActiveModel as ItemAM, Entity as ItemEntity};
use super::mapper::order_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmOrdersRepository {
    db: DatabaseConnection,
}

impl OrmOrdersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn items_of<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
) -> Result<Vec<item::Model>, DomainError> {
    ItemEntity::find()
        .filter(item::Column::OrderId.eq(order_id))
        .all(conn)
        .await
        .map_err(db_err)
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    order_id: Uuid,
    items: Vec<OrderItem>,
) -> Result<Vec<item::Model>, DomainError> {
    let rows: Vec<item::Model> = (0_i32..)
        .zip(items)
        .map(|(position, it)| item::Model {
            id: Uuid::now_v7(),
            order_id,
            product_id: it.product_id,
            quantity: it.quantity,
            unit_price: it.unit_price,
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
impl OrdersRepository for OrmOrdersRepository {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        let rows = OrderEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = rows
            .load_many(ItemEntity, &self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter()
            .zip(items)
            .map(|(order, items)| order_from(order, items))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let Some(found) = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let items = items_of(&self.db, id).await?;
        order_from(found, items).map(Some)
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = OrderAM {
            id: Set(order.id),
            user_id: Set(order.user_id),
            shipping_address_id: Set(order.shipping_address_id),
            billing_address_id: Set(order.billing_address_id),
            status: Set(order.status.as_str().to_owned()),
            total: Set(order.total),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let items = insert_items(&txn, order.id, order.items).await?;

        txn.commit().await.map_err(db_err)?;
        order_from(inserted, items)
    }

    async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<Order, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let m = OrderAM {
            id: Unchanged(id),
            user_id: patch.user_id.into_active(),
            shipping_address_id: patch.shipping_address_id.into_active(),
            billing_address_id: patch.billing_address_id.into_active(),
            status: patch.status.map(|s| s.as_str().to_owned()).into_active(),
            total: patch.total.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("Order", id))?;

        let items = match patch.items.into_option() {
            Some(items) => {
                ItemEntity::delete_many()
                    .filter(item::Column::OrderId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_items(&txn, id, items).await?
            }
            None => items_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        order_from(updated, items)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = OrderEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
