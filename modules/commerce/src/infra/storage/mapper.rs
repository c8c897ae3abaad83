use crate::domain::error::DomainError;
use crate::domain::models::{
    Cart, CartItem, Delivery, DeliveryStatus, Order, OrderItem, OrderStatus, Payment,
    PaymentStatus,
};

use super::entity::{cart, cart_item, delivery, order, order_item, payment};

pub(crate) fn cart_from(m: cart::Model, mut items: Vec<cart_item::Model>) -> Cart {
    items.sort_by_key(|i| i.position);
    Cart {
        id: m.id,
        user_id: m.user_id,
        items: items
            .into_iter()
            .map(|i| CartItem {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect(),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub(crate) fn order_from(
    m: order::Model,
    mut items: Vec<order_item::Model>,
) -> Result<Order, DomainError> {
    items.sort_by_key(|i| i.position);
    Ok(Order {
        id: m.id,
        user_id: m.user_id,
        shipping_address_id: m.shipping_address_id,
        billing_address_id: m.billing_address_id,
        status: m.status.parse::<OrderStatus>().map_err(DomainError::database)?,
        total: m.total,
        items: items
            .into_iter()
            .map(|i| OrderItem {
                product_id: i.product_id,
                quantity: i.quantity,
                unit_price: i.unit_price,
            })
            .collect(),
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

impl TryFrom<payment::Model> for Payment {
    type Error = DomainError;

    fn try_from(m: payment::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            order_id: m.order_id,
            amount: m.amount,
            method: m.method,
            status: m
                .status
                .parse::<PaymentStatus>()
                .map_err(DomainError::database)?,
            paid_at: m.paid_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

impl TryFrom<delivery::Model> for Delivery {
    type Error = DomainError;

    fn try_from(m: delivery::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            order_id: m.order_id,
            status: m
                .status
                .parse::<DeliveryStatus>()
                .map_err(DomainError::database)?,
            carrier: m.carrier,
            tracking_number: m.tracking_number,
            scheduled_for: m.scheduled_for,
            delivered_at: m.delivered_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}
