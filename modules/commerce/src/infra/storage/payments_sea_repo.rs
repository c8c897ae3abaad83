use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Payment, PaymentPatch};
use crate::domain::repos::PaymentsRepository;

use super::entity::payment::{ActiveModel as PaymentAM, Column, Entity as PaymentEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmPaymentsRepository {
    db: DatabaseConnection,
}

impl OrmPaymentsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentsRepository for OrmPaymentsRepository {
    async fn list(&self) -> Result<Vec<Payment>, DomainError> {
        PaymentEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(Payment::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DomainError> {
        PaymentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Payment::try_from)
            .transpose()
    }

    async fn create(&self, payment: Payment) -> Result<Payment, DomainError> {
        let m = PaymentAM {
            id: Set(payment.id),
            order_id: Set(payment.order_id),
            amount: Set(payment.amount),
            method: Set(payment.method),
            status: Set(payment.status.as_str().to_owned()),
            paid_at: Set(payment.paid_at),
            created_at: Set(payment.created_at),
            updated_at: Set(payment.updated_at),
        };
        m.insert(&self.db).await.map_err(db_err)?.try_into()
    }

    async fn update(&self, id: Uuid, patch: PaymentPatch) -> Result<Payment, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = PaymentAM {
            id: Unchanged(id),
            order_id: patch.order_id.into_active(),
            amount: patch.amount.into_active(),
            method: patch.method.into_active(),
            status: patch.status.map(|s| s.as_str().to_owned()).into_active(),
            paid_at: patch.paid_at.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        m.update(&self.db)
            .await
            .map_err(row_err("Payment", id))?
            .try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = PaymentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
