use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};
use crate::domain::service::UsersService;

pub async fn list_users(
    Extension(svc): Extension<Arc<UsersService>>,
) -> ApiResult<EnvelopeResponse<Vec<UserDto>>> {
    let users = svc.list().await?;
    Ok(ok_json(
        users.into_iter().map(UserDto::from).collect(),
        "Users Retrieved Successfully",
    ))
}

pub async fn get_user(
    Extension(svc): Extension<Arc<UsersService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<UserDto>> {
    let user = svc.get(id).await?;
    Ok(ok_json(user.into(), "User Retrieved Successfully"))
}

pub async fn create_user(
    Extension(svc): Extension<Arc<UsersService>>,
    ValidJson(req): ValidJson<CreateUserReq>,
) -> ApiResult<EnvelopeResponse<UserDto>> {
    let user = svc.create(req.into()).await?;
    Ok(created_json(user.into(), "User Created Successfully"))
}

pub async fn update_user(
    Extension(svc): Extension<Arc<UsersService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateUserReq>,
) -> ApiResult<EnvelopeResponse<UserDto>> {
    let user = svc.update(id, req.into()).await?;
    Ok(ok_json(user.into(), "User Updated Successfully"))
}

pub async fn delete_user(
    Extension(svc): Extension<Arc<UsersService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("User Deleted Successfully"))
}
