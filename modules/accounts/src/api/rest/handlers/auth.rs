use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{LoginReq, TokenDto, UserDto};
use crate::api::rest::extract::BearerToken;
use crate::domain::service::AuthService;

pub async fn login(
    Extension(svc): Extension<Arc<AuthService>>,
    ValidJson(req): ValidJson<LoginReq>,
) -> ApiResult<EnvelopeResponse<TokenDto>> {
    let issued = svc.login(&req.email, &req.password).await?;
    let dto = TokenDto {
        token: issued.token,
        token_type: "Bearer".to_owned(),
        expires_at: issued.expires_at,
        user: issued.user.into(),
    };
    Ok(ok_json(dto, "Login Successful"))
}

pub async fn me(
    Extension(svc): Extension<Arc<AuthService>>,
    BearerToken(token): BearerToken,
) -> ApiResult<EnvelopeResponse<UserDto>> {
    let user = svc.authenticate(&token).await?;
    Ok(ok_json(user.into(), "User Retrieved Successfully"))
}
