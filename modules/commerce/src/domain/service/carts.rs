use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Cart, CartPatch, NewCart};
use crate::domain::repos::CartsRepository;

pub struct CartsService {
    repo: Arc<dyn CartsRepository>,
}

impl CartsService {
    pub fn new(repo: Arc<dyn CartsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Cart>, DomainError> {
        debug!("listing carts");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Cart, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cart", id))
    }

    #[instrument(skip(self, new_cart), fields(user_id = %new_cart.user_id, items = new_cart.items.len()))]
    pub async fn create(&self, new_cart: NewCart) -> Result<Cart, DomainError> {
        let now = OffsetDateTime::now_utc();
        let cart = Cart {
            id: new_cart.id.unwrap_or_else(Uuid::now_v7),
            user_id: new_cart.user_id,
            items: new_cart.items,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(cart).await?;
        info!(cart_id = %created.id, "cart created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: CartPatch) -> Result<Cart, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("cart updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Cart", id));
        }
        info!("cart deleted");
        Ok(())
    }
}
