//! In-memory repositories for service and handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use grocer_kit::PatchSet;
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::DomainError;
use super::models::{
    Cart, CartPatch, Delivery, DeliveryPatch, Order, OrderPatch, Payment, PaymentPatch,
};
use super::repos::{CartsRepository, DeliveriesRepository, OrdersRepository, PaymentsRepository};

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

    /// Inserts unless `clash` matches an existing row.
    fn insert_unique(
        &self,
        id: Uuid,
        row: T,
        clash: impl Fn(&T) -> bool,
    ) -> Result<T, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(clash) {
            return Err(DomainError::conflict("UNIQUE constraint failed"));
        }
        rows.insert(id, row.clone());
        Ok(row)
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
pub struct InMemoryCarts(Table<Cart>);

#[async_trait]
impl CartsRepository for InMemoryCarts {
    async fn list(&self) -> Result<Vec<Cart>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, cart: Cart) -> Result<Cart, DomainError> {
        self.0.insert_unique(cart.id, cart, |_| false)
    }

    async fn update(&self, id: Uuid, patch: CartPatch) -> Result<Cart, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Cart", id, |c| {
            patch.user_id.apply_to(&mut c.user_id);
            patch.items.apply_to(&mut c.items);
            c.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

/// Records every patch it receives so tests can inspect what the service sent.
#[derive(Default)]
pub struct InMemoryOrders {
    table: Table<Order>,
    pub patches: Mutex<Vec<OrderPatch>>,
}

#[async_trait]
impl OrdersRepository for InMemoryOrders {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.table.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self.table.get(id))
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        self.table.insert_unique(order.id, order, |_| false)
    }

    async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<Order, DomainError> {
        self.patches.lock().unwrap().push(patch.clone());
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.table.modify("Order", id, |o| {
            patch.user_id.apply_to(&mut o.user_id);
            patch.shipping_address_id.apply_to(&mut o.shipping_address_id);
            patch.billing_address_id.apply_to(&mut o.billing_address_id);
            patch.status.apply_to(&mut o.status);
            patch.total.apply_to(&mut o.total);
            patch.items.apply_to(&mut o.items);
            o.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.table.remove(id))
    }
}

/// One payment per order, like the unique column in storage.
#[derive(Default)]
pub struct InMemoryPayments(Table<Payment>);

#[async_trait]
impl PaymentsRepository for InMemoryPayments {
    async fn list(&self) -> Result<Vec<Payment>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, payment: Payment) -> Result<Payment, DomainError> {
        let order_id = payment.order_id;
        self.0
            .insert_unique(payment.id, payment, |p| p.order_id == order_id)
    }

    async fn update(&self, id: Uuid, patch: PaymentPatch) -> Result<Payment, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Payment", id, |p| {
            patch.order_id.apply_to(&mut p.order_id);
            patch.amount.apply_to(&mut p.amount);
            patch.method.apply_to(&mut p.method);
            patch.status.apply_to(&mut p.status);
            patch.paid_at.apply_to(&mut p.paid_at);
            p.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}

#[derive(Default)]
pub struct InMemoryDeliveries(Table<Delivery>);

#[async_trait]
impl DeliveriesRepository for InMemoryDeliveries {
    async fn list(&self) -> Result<Vec<Delivery>, DomainError> {
        Ok(self.0.list())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Delivery>, DomainError> {
        Ok(self.0.get(id))
    }

    async fn create(&self, delivery: Delivery) -> Result<Delivery, DomainError> {
        let order_id = delivery.order_id;
        self.0
            .insert_unique(delivery.id, delivery, |d| d.order_id == order_id)
    }

    async fn update(&self, id: Uuid, patch: DeliveryPatch) -> Result<Delivery, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }
        self.0.modify("Delivery", id, |d| {
            patch.order_id.apply_to(&mut d.order_id);
            patch.status.apply_to(&mut d.status);
            patch.carrier.apply_to(&mut d.carrier);
            patch.tracking_number.apply_to(&mut d.tracking_number);
            patch.scheduled_for.apply_to(&mut d.scheduled_for);
            patch.delivered_at.apply_to(&mut d.delivered_at);
            d.updated_at = OffsetDateTime::now_utc();
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.0.remove(id))
    }
}
