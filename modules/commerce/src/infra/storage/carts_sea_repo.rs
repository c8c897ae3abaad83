use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Cart, CartItem, CartPatch};
use crate::domain::repos::CartsRepository;

use super::entity::cart::{ActiveModel as CartAM, Column, Entity as CartEntity};
use super::entity::cart_item::{self as item, ActiveModel as ItemAM, Entity as ItemEntity};
use super::mapper::cart_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmCartsRepository {
    db: DatabaseConnection,
}

impl OrmCartsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn items_of<C: ConnectionTrait>(
    conn: &C,
    cart_id: Uuid,
) -> Result<Vec<item::Model>, DomainError> {
    ItemEntity::find()
        .filter(item::Column::CartId.eq(cart_id))
        .all(conn)
        .await
        .map_err(db_err)
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    cart_id: Uuid,
    items: Vec<CartItem>,
) -> Result<Vec<item::Model>, DomainError> {
    let rows: Vec<item::Model> = (0_i32..)
        .zip(items)
        .map(|(position, it)| item::Model {
            id: Uuid::now_v7(),
            cart_id,
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
impl CartsRepository for OrmCartsRepository {
    async fn list(&self) -> Result<Vec<Cart>, DomainError> {
        let rows = CartEntity::find()
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
            .map(|(cart, items)| cart_from(cart, items))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>, DomainError> {
        let Some(found) = CartEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let items = items_of(&self.db, id).await?;
        Ok(Some(cart_from(found, items)))
    }

    async fn create(&self, cart: Cart) -> Result<Cart, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = CartAM {
            id: Set(cart.id),
            user_id: Set(cart.user_id),
            created_at: Set(cart.created_at),
            updated_at: Set(cart.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let items = insert_items(&txn, cart.id, cart.items).await?;

        txn.commit().await.map_err(db_err)?;
        Ok(cart_from(inserted, items))
    }

    async fn update(&self, id: Uuid, patch: CartPatch) -> Result<Cart, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let m = CartAM {
            id: Unchanged(id),
            user_id: patch.user_id.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("Cart", id))?;

        let items = match patch.items.into_option() {
            Some(items) => {
                ItemEntity::delete_many()
                    .filter(item::Column::CartId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_items(&txn, id, items).await?
            }
            None => items_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        Ok(cart_from(updated, items))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = CartEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
