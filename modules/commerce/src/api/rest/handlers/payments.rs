use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreatePaymentReq, PaymentDto, UpdatePaymentReq};
use crate::domain::service::PaymentsService;

pub async fn list_payments(
    Extension(svc): Extension<Arc<PaymentsService>>,
) -> ApiResult<EnvelopeResponse<Vec<PaymentDto>>> {
    let rows = svc.list().await?;
    Ok(ok_json(
        rows.into_iter().map(PaymentDto::from).collect(),
        "Payments Retrieved Successfully",
    ))
}

pub async fn get_payment(
    Extension(svc): Extension<Arc<PaymentsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<PaymentDto>> {
    let payment = svc.get(id).await?;
    Ok(ok_json(payment.into(), "Payment Retrieved Successfully"))
}

pub async fn create_payment(
    Extension(svc): Extension<Arc<PaymentsService>>,
    ValidJson(req): ValidJson<CreatePaymentReq>,
) -> ApiResult<EnvelopeResponse<PaymentDto>> {
    let payment = svc.create(req.into()).await?;
    Ok(created_json(payment.into(), "Payment Created Successfully"))
}

pub async fn update_payment(
    Extension(svc): Extension<Arc<PaymentsService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdatePaymentReq>,
) -> ApiResult<EnvelopeResponse<PaymentDto>> {
    let payment = svc.update(id, req.into()).await?;
    Ok(ok_json(payment.into(), "Payment Updated Successfully"))
}

pub async fn delete_payment(
    Extension(svc): Extension<Arc<PaymentsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Payment Deleted Successfully"))
}
