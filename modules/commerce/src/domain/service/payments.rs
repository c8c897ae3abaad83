use std::sync::Arc;

use grocer_kit::Patch;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewPayment, Payment, PaymentPatch, PaymentStatus};
use crate::domain::repos::PaymentsRepository;

pub struct PaymentsService {
    repo: Arc<dyn PaymentsRepository>,
}

impl PaymentsService {
    pub fn new(repo: Arc<dyn PaymentsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Payment>, DomainError> {
        debug!("listing payments");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Payment, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", id))
    }

    #[instrument(skip(self, new_payment), fields(order_id = %new_payment.order_id))]
    pub async fn create(&self, new_payment: NewPayment) -> Result<Payment, DomainError> {
        let now = OffsetDateTime::now_utc();
        let paid_at = match new_payment.status {
            PaymentStatus::Completed => new_payment.paid_at.or(Some(now)),
            _ => new_payment.paid_at,
        };
        let payment = Payment {
            id: new_payment.id.unwrap_or_else(Uuid::now_v7),
            order_id: new_payment.order_id,
            amount: new_payment.amount,
            method: new_payment.method,
            status: new_payment.status,
            paid_at,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(payment).await?;
        info!(payment_id = %created.id, status = %created.status, "payment created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, mut patch: PaymentPatch) -> Result<Payment, DomainError> {
        if patch.status == Patch::Set(PaymentStatus::Completed) && !patch.paid_at.is_set() {
            patch.paid_at = Patch::Set(Some(OffsetDateTime::now_utc()));
        }
        let updated = self.repo.update(id, patch).await?;
        info!(status = %updated.status, "payment updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Payment", id));
        }
        info!("payment deleted");
        Ok(())
    }
}
