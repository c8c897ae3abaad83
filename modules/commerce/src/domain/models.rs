use std::fmt;
use std::str::FromStr;

use grocer_kit::{Patch, PatchSet};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Status enums stored as snake_case text.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(concat!("unknown ", stringify!($name), ": {}"), other)),
                }
            }
        }
    };
}

text_enum!(OrderStatus {
    Pending => "pending",
    Paid => "paid",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

text_enum!(PaymentStatus {
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
    Refunded => "refunded",
});

text_enum!(DeliveryStatus {
    Pending => "pending",
    InTransit => "in_transit",
    Delivered => "delivered",
    Failed => "failed",
});

// ==================== Cart ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartPatch {
    pub user_id: Patch<Uuid>,
    /// Replaces the full item list.
    pub items: Patch<Vec<CartItem>>,
}

impl PatchSet for CartPatch {
    fn is_empty(&self) -> bool {
        !(self.user_id.is_set() || self.items.is_set())
    }
}

// ==================== Order ====================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    /// Price per unit at the time the order was placed.
    pub unit_price: f64,
}

/// Sum of `quantity * unit_price`, rounded to cents.
#[must_use]
pub fn order_total(items: &[OrderItem]) -> f64 {
    let total: f64 = items
        .iter()
        .map(|i| f64::from(i.quantity) * i.unit_price)
        .sum();
    (total * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shipping_address_id: Uuid,
    pub billing_address_id: Option<Uuid>,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub shipping_address_id: Uuid,
    pub billing_address_id: Option<Uuid>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub user_id: Patch<Uuid>,
    pub shipping_address_id: Patch<Uuid>,
    pub billing_address_id: Patch<Option<Uuid>>,
    pub status: Patch<OrderStatus>,
    /// Set by the service whenever `items` is set.
    pub total: Patch<f64>,
    pub items: Patch<Vec<OrderItem>>,
}

impl PatchSet for OrderPatch {
    fn is_empty(&self) -> bool {
        !(self.user_id.is_set()
            || self.shipping_address_id.is_set()
            || self.billing_address_id.is_set()
            || self.status.is_set()
            || self.total.is_set()
            || self.items.is_set())
    }
}

// ==================== Payment ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub order_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub status: PaymentStatus,
    pub paid_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub id: Option<Uuid>,
    pub order_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub status: PaymentStatus,
    pub paid_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentPatch {
    pub order_id: Patch<Uuid>,
    pub amount: Patch<f64>,
    pub method: Patch<String>,
    pub status: Patch<PaymentStatus>,
    pub paid_at: Patch<Option<OffsetDateTime>>,
}

impl PatchSet for PaymentPatch {
    fn is_empty(&self) -> bool {
        !(self.order_id.is_set()
            || self.amount.is_set()
            || self.method.is_set()
            || self.status.is_set()
            || self.paid_at.is_set())
    }
}

// ==================== Delivery ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id: Uuid,
    pub order_id: Uuid,
    pub status: DeliveryStatus,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub scheduled_for: Option<OffsetDateTime>,
    pub delivered_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDelivery {
    pub id: Option<Uuid>,
    pub order_id: Uuid,
    pub status: DeliveryStatus,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub scheduled_for: Option<OffsetDateTime>,
    pub delivered_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryPatch {
    pub order_id: Patch<Uuid>,
    pub status: Patch<DeliveryStatus>,
    pub carrier: Patch<Option<String>>,
    pub tracking_number: Patch<Option<String>>,
    pub scheduled_for: Patch<Option<OffsetDateTime>>,
    pub delivered_at: Patch<Option<OffsetDateTime>>,
}

impl PatchSet for DeliveryPatch {
    fn is_empty(&self) -> bool {
        !(self.order_id.is_set()
            || self.status.is_set()
            || self.carrier.is_set()
            || self.tracking_number.is_set()
            || self.scheduled_for.is_set()
            || self.delivered_at.is_set())
    }
}
