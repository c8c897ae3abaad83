use grocer_kit::Patch;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::migrations::Migrator;
use super::{
    OrmCartsRepository, OrmDeliveriesRepository, OrmOrdersRepository, OrmPaymentsRepository,
};
use crate::domain::error::DomainError;
use crate::domain::models::{
    Cart, CartItem, CartPatch, Delivery, DeliveryStatus, Order, OrderItem, OrderPatch,
    OrderStatus, Payment, PaymentPatch, PaymentStatus,
};
use crate::domain::repos::{
    CartsRepository, DeliveriesRepository, OrdersRepository, PaymentsRepository,
};

/// Stand-ins for the tables owned by the accounts and catalog modules.
const PARENT_TABLES: &str = "CREATE TABLE users (id uuid_text PRIMARY KEY);
CREATE TABLE addresses (id uuid_text PRIMARY KEY);
CREATE TABLE products (id uuid_text PRIMARY KEY);";

struct Fixture {
    db: DatabaseConnection,
    user_id: Uuid,
    address_id: Uuid,
    product_id: Uuid,
}

async fn setup() -> Fixture {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.execute_unprepared(PARENT_TABLES).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let fx = Fixture {
        db,
        user_id: Uuid::now_v7(),
        address_id: Uuid::now_v7(),
        product_id: Uuid::now_v7(),
    };
    for (table, id) in [
        ("users", fx.user_id),
        ("addresses", fx.address_id),
        ("products", fx.product_id),
    ] {
        fx.db
            .execute(Statement::from_sql_and_values(
                fx.db.get_database_backend(),
                format!("INSERT INTO {table} (id) VALUES (?)"),
                [id.into()],
            ))
            .await
            .unwrap();
    }
    fx
}

fn order(fx: &Fixture, items: Vec<OrderItem>) -> Order {
    let now = OffsetDateTime::now_utc();
    Order {
        id: Uuid::now_v7(),
        user_id: fx.user_id,
        shipping_address_id: fx.address_id,
        billing_address_id: Some(fx.address_id),
        status: OrderStatus::Pending,
        total: 7.5,
        items,
        created_at: now,
        updated_at: now,
    }
}

fn payment(order_id: Uuid) -> Payment {
    let now = OffsetDateTime::now_utc();
    Payment {
        id: Uuid::now_v7(),
        order_id,
        amount: 7.5,
        method: "card".to_owned(),
        status: PaymentStatus::Pending,
        paid_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn cart_items_round_trip_in_order() {
    let fx = setup().await;
    let repo = OrmCartsRepository::new(fx.db.clone());
    let now = OffsetDateTime::now_utc();

    let created = repo
        .create(Cart {
            id: Uuid::now_v7(),
            user_id: fx.user_id,
            items: vec![
                CartItem {
                    product_id: fx.product_id,
                    quantity: 3,
                },
                CartItem {
                    product_id: fx.product_id,
                    quantity: 1,
                },
            ],
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].items, created.items);

    let updated = repo
        .update(
            created.id,
            CartPatch {
                items: Patch::Set(vec![CartItem {
                    product_id: fx.product_id,
                    quantity: 5,
                }]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].quantity, 5);

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn cart_for_unknown_user_is_rejected() {
    let fx = setup().await;
    let repo = OrmCartsRepository::new(fx.db.clone());
    let now = OffsetDateTime::now_utc();

    let err = repo
        .create(Cart {
            id: Uuid::now_v7(),
            user_id: Uuid::new_v4(),
            items: vec![],
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Constraint { .. }), "{err:?}");
}

#[tokio::test]
async fn order_status_and_items_persist() {
    let fx = setup().await;
    let repo = OrmOrdersRepository::new(fx.db.clone());
    let items = vec![OrderItem {
        product_id: fx.product_id,
        quantity: 3,
        unit_price: 2.5,
    }];

    let created = repo.create(order(&fx, items)).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));

    let updated = repo
        .update(
            created.id,
            OrderPatch {
                status: Patch::Set(OrderStatus::Shipped),
                billing_address_id: Patch::Set(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.billing_address_id, None);
    assert_eq!(updated.items, created.items);
}

#[tokio::test]
async fn order_item_with_unknown_product_rolls_back() {
    let fx = setup().await;
    let repo = OrmOrdersRepository::new(fx.db.clone());
    let bad = order(
        &fx,
        vec![OrderItem {
            product_id: Uuid::new_v4(),
            quantity: 1,
            unit_price: 1.0,
        }],
    );

    let err = repo.create(bad).await.unwrap_err();
    assert!(matches!(err, DomainError::Constraint { .. }), "{err:?}");
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn one_payment_per_order() {
    let fx = setup().await;
    let orders = OrmOrdersRepository::new(fx.db.clone());
    let payments = OrmPaymentsRepository::new(fx.db.clone());
    let placed = orders.create(order(&fx, vec![])).await.unwrap();

    let first = payments.create(payment(placed.id)).await.unwrap();
    let err = payments.create(payment(placed.id)).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }), "{err:?}");

    let paid_at = OffsetDateTime::now_utc();
    let updated = payments
        .update(
            first.id,
            PaymentPatch {
                status: Patch::Set(PaymentStatus::Completed),
                paid_at: Patch::Set(Some(paid_at)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, PaymentStatus::Completed);
    assert!(updated.paid_at.is_some());
}

#[tokio::test]
async fn deleting_order_cascades_to_satellites() {
    let fx = setup().await;
    let orders = OrmOrdersRepository::new(fx.db.clone());
    let payments = OrmPaymentsRepository::new(fx.db.clone());
    let deliveries = OrmDeliveriesRepository::new(fx.db.clone());
    let placed = orders.create(order(&fx, vec![])).await.unwrap();
    let now = OffsetDateTime::now_utc();

    let paid = payments.create(payment(placed.id)).await.unwrap();
    let shipped = deliveries
        .create(Delivery {
            id: Uuid::now_v7(),
            order_id: placed.id,
            status: DeliveryStatus::InTransit,
            carrier: Some("UPS".to_owned()),
            tracking_number: None,
            scheduled_for: None,
            delivered_at: None,
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap();
    assert_eq!(
        deliveries.find_by_id(shipped.id).await.unwrap(),
        Some(shipped.clone())
    );

    assert!(orders.delete(placed.id).await.unwrap());
    assert_eq!(payments.find_by_id(paid.id).await.unwrap(), None);
    assert_eq!(deliveries.find_by_id(shipped.id).await.unwrap(), None);
}

#[tokio::test]
async fn empty_patch_fails_before_lookup() {
    let fx = setup().await;
    let deliveries = OrmDeliveriesRepository::new(fx.db);

    let err = deliveries
        .update(Uuid::new_v4(), Default::default())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::NoFieldsToUpdate);
}
