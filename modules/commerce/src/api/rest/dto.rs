use grocer_kit::patch::nullable;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::{
    Cart, CartItem, CartPatch, Delivery, DeliveryPatch, DeliveryStatus, NewCart, NewDelivery,
    NewOrder, NewPayment, Order, OrderItem, OrderPatch, OrderStatus, Payment, PaymentPatch,
    PaymentStatus,
};

/// Like [`nullable`], for RFC 3339 timestamps.
fn nullable_timestamp<'de, D>(deserializer: D) -> Result<Option<Option<OffsetDateTime>>, D::Error>
where
    D: Deserializer<'de>,
{
    time::serde::rfc3339::option::deserialize(deserializer).map(Some)
}

// ==================== Cart ====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CartItemDto {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItemDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCartReq {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<CartItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCartReq {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<CartItemDto>>,
}

impl From<CartItem> for CartItemDto {
    fn from(i: CartItem) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
        }
    }
}

impl From<CartItemDto> for CartItem {
    fn from(i: CartItemDto) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
        }
    }
}

impl From<Cart> for CartDto {
    fn from(c: Cart) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            items: c.items.into_iter().map(Into::into).collect(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CreateCartReq> for NewCart {
    fn from(req: CreateCartReq) -> Self {
        Self {
            id: req.id,
            user_id: req.user_id,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateCartReq> for CartPatch {
    fn from(req: UpdateCartReq) -> Self {
        Self {
            user_id: req.user_id.into(),
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect::<Vec<_>>())
                .into(),
        }
    }
}

// ==================== Order ====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct OrderItemDto {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shipping_address_id: Uuid,
    pub billing_address_id: Option<Uuid>,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItemDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The order total is derived from the items and never read from the request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderReq {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub shipping_address_id: Uuid,
    #[serde(default)]
    pub billing_address_id: Option<Uuid>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOrderReq {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub shipping_address_id: Option<Uuid>,
    #[serde(default, deserialize_with = "nullable")]
    pub billing_address_id: Option<Option<Uuid>>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<OrderItemDto>>,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
            unit_price: i.unit_price,
        }
    }
}

impl From<OrderItemDto> for OrderItem {
    fn from(i: OrderItemDto) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
            unit_price: i.unit_price,
        }
    }
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            shipping_address_id: o.shipping_address_id,
            billing_address_id: o.billing_address_id,
            status: o.status,
            total: o.total,
            items: o.items.into_iter().map(Into::into).collect(),
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

impl From<CreateOrderReq> for NewOrder {
    fn from(req: CreateOrderReq) -> Self {
        Self {
            id: req.id,
            user_id: req.user_id,
            shipping_address_id: req.shipping_address_id,
            billing_address_id: req.billing_address_id,
            status: req.status,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateOrderReq> for OrderPatch {
    fn from(req: UpdateOrderReq) -> Self {
        Self {
            user_id: req.user_id.into(),
            shipping_address_id: req.shipping_address_id.into(),
            billing_address_id: req.billing_address_id.into(),
            status: req.status.into(),
            total: Default::default(),
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect::<Vec<_>>())
                .into(),
        }
    }
}

// ==================== Payment ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDto {
    pub id: Uuid,
    pub order_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub status: PaymentStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub paid_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentReq {
    pub id: Option<Uuid>,
    pub order_id: Uuid,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1, max = 32))]
    pub method: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub paid_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePaymentReq {
    #[serde(default)]
    pub order_id: Option<Uuid>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub amount: Option<f64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 32))]
    pub method: Option<String>,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "nullable_timestamp")]
    pub paid_at: Option<Option<OffsetDateTime>>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            order_id: p.order_id,
            amount: p.amount,
            method: p.method,
            status: p.status,
            paid_at: p.paid_at,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreatePaymentReq> for NewPayment {
    fn from(req: CreatePaymentReq) -> Self {
        Self {
            id: req.id,
            order_id: req.order_id,
            amount: req.amount,
            method: req.method,
            status: req.status,
            paid_at: req.paid_at,
        }
    }
}

impl From<UpdatePaymentReq> for PaymentPatch {
    fn from(req: UpdatePaymentReq) -> Self {
        Self {
            order_id: req.order_id.into(),
            amount: req.amount.into(),
            method: req.method.into(),
            status: req.status.into(),
            paid_at: req.paid_at.into(),
        }
    }
}

// ==================== Delivery ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryDto {
    pub id: Uuid,
    pub order_id: Uuid,
    pub status: DeliveryStatus,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub delivered_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDeliveryReq {
    pub id: Option<Uuid>,
    pub order_id: Uuid,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub carrier: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub tracking_number: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub delivered_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDeliveryReq {
    #[serde(default)]
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub carrier: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub tracking_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_timestamp")]
    pub scheduled_for: Option<Option<OffsetDateTime>>,
    #[serde(default, deserialize_with = "nullable_timestamp")]
    pub delivered_at: Option<Option<OffsetDateTime>>,
}

impl From<Delivery> for DeliveryDto {
    fn from(d: Delivery) -> Self {
        Self {
            id: d.id,
            order_id: d.order_id,
            status: d.status,
            carrier: d.carrier,
            tracking_number: d.tracking_number,
            scheduled_for: d.scheduled_for,
            delivered_at: d.delivered_at,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

impl From<CreateDeliveryReq> for NewDelivery {
    fn from(req: CreateDeliveryReq) -> Self {
        Self {
            id: req.id,
            order_id: req.order_id,
            status: req.status,
            carrier: req.carrier,
            tracking_number: req.tracking_number,
            scheduled_for: req.scheduled_for,
            delivered_at: req.delivered_at,
        }
    }
}

impl From<UpdateDeliveryReq> for DeliveryPatch {
    fn from(req: UpdateDeliveryReq) -> Self {
        Self {
            order_id: req.order_id.into(),
            status: req.status.into(),
            carrier: req.carrier.into(),
            tracking_number: req.tracking_number.into(),
            scheduled_for: req.scheduled_for.into(),
            delivered_at: req.delivered_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_ignores_total_and_defaults_status() {
        let req: CreateOrderReq = serde_json::from_value(serde_json::json!({
            "user_id": Uuid::nil(),
            "shipping_address_id": Uuid::nil(),
            "total": 999.0,
        }))
        .unwrap();
        assert_eq!(req.status, OrderStatus::Pending);
        assert!(req.items.is_empty());
    }

    #[test]
    fn delivery_patch_distinguishes_null_from_absent() {
        let req: UpdateDeliveryReq = serde_json::from_str(
            r#"{"delivered_at": null, "scheduled_for": "2026-03-01T08:00:00Z"}"#,
        )
        .unwrap();
        let patch = DeliveryPatch::from(req);
        assert_eq!(patch.delivered_at, grocer_kit::Patch::Set(None));
        assert!(matches!(patch.scheduled_for, grocer_kit::Patch::Set(Some(_))));
        assert_eq!(patch.carrier, grocer_kit::Patch::Unchanged);
    }

    #[test]
    fn status_uses_snake_case() {
        let req: UpdateDeliveryReq = serde_json::from_str(r#"{"status": "in_transit"}"#).unwrap();
        assert_eq!(req.status, Some(DeliveryStatus::InTransit));
    }
}
