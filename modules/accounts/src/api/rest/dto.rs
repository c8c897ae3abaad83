use grocer_kit::patch::nullable;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::{Address, AddressPatch, NewAddress, NewUser, User, UserUpdate};

/// REST DTO for user representation. The password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserReq {
    /// Optional ID for the user. If not provided, a UUID v7 will be generated
    pub id: Option<Uuid>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub gender: Option<String>,
    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,
    #[validate(range(exclusive_min = 0.0))]
    pub height_cm: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
}

/// Partial update. Absent fields are left alone; `null` clears nullable profile fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserReq {
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 8))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 1, max = 150))]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(exclusive_min = 0.0))]
    pub height_cm: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(exclusive_min = 0.0))]
    pub weight_kg: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub goal: Option<Option<String>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            gender: user.gender,
            age: user.age,
            height_cm: user.height_cm,
            weight_kg: user.weight_kg,
            goal: user.goal,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            id: req.id,
            email: req.email,
            name: req.name,
            password: req.password,
            gender: req.gender,
            age: req.age,
            height_cm: req.height_cm,
            weight_kg: req.weight_kg,
            goal: req.goal,
        }
    }
}

impl From<UpdateUserReq> for UserUpdate {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            email: req.email.into(),
            name: req.name.into(),
            password: req.password.into(),
            gender: req.gender.into(),
            age: req.age.into(),
            height_cm: req.height_cm.into(),
            weight_kg: req.weight_kg.into(),
            goal: req.goal.into(),
        }
    }
}

// ==================== Address DTOs ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAddressReq {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    #[validate(length(min = 1))]
    pub line1: String,
    pub line2: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    pub region: Option<String>,
    #[validate(length(min = 1))]
    pub postal_code: String,
    #[validate(length(min = 2))]
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAddressReq {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub line1: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub line2: Option<Option<String>>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub region: Option<Option<String>>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub postal_code: Option<String>,
    #[serde(default)]
    #[validate(length(min = 2))]
    pub country: Option<String>,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            region: address.region,
            postal_code: address.postal_code,
            country: address.country,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

impl From<CreateAddressReq> for NewAddress {
    fn from(req: CreateAddressReq) -> Self {
        Self {
            id: req.id,
            user_id: req.user_id,
            line1: req.line1,
            line2: req.line2,
            city: req.city,
            region: req.region,
            postal_code: req.postal_code,
            country: req.country,
        }
    }
}

impl From<UpdateAddressReq> for AddressPatch {
    fn from(req: UpdateAddressReq) -> Self {
        Self {
            line1: req.line1.into(),
            line2: req.line2.into(),
            city: req.city.into(),
            region: req.region.into(),
            postal_code: req.postal_code.into(),
            country: req.country.into(),
        }
    }
}

// ==================== Auth DTOs ====================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginReq {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
    pub token_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub user: UserDto,
}
