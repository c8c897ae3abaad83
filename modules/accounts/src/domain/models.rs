use grocer_kit::{Patch, PatchSet};
use time::OffsetDateTime;
use uuid::Uuid;

/// A registered user and the profile used to personalize meal generation.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Free-form goal such as "weight loss" or "muscle gain".
    pub goal: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: Option<Uuid>,
    pub email: String,
    pub name: String,
    /// Plain text; hashed by the service before it reaches the repository.
    pub password: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
}

/// Requested changes to a user, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub email: Patch<String>,
    pub name: Patch<String>,
    pub password: Patch<String>,
    pub gender: Patch<Option<String>>,
    pub age: Patch<Option<i32>>,
    pub height_cm: Patch<Option<f64>>,
    pub weight_kg: Patch<Option<f64>>,
    pub goal: Patch<Option<String>>,
}

/// Column-level patch applied by the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub email: Patch<String>,
    pub name: Patch<String>,
    pub password_hash: Patch<String>,
    pub gender: Patch<Option<String>>,
    pub age: Patch<Option<i32>>,
    pub height_cm: Patch<Option<f64>>,
    pub weight_kg: Patch<Option<f64>>,
    pub goal: Patch<Option<String>>,
}

impl PatchSet for UserPatch {
    fn is_empty(&self) -> bool {
        !(self.email.is_set()
            || self.name.is_set()
            || self.password_hash.is_set()
            || self.gender.is_set()
            || self.age.is_set()
            || self.height_cm.is_set()
            || self.weight_kg.is_set()
            || self.goal.is_set())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub line1: Patch<String>,
    pub line2: Patch<Option<String>>,
    pub city: Patch<String>,
    pub region: Patch<Option<String>>,
    pub postal_code: Patch<String>,
    pub country: Patch<String>,
}

impl PatchSet for AddressPatch {
    fn is_empty(&self) -> bool {
        !(self.line1.is_set()
            || self.line2.is_set()
            || self.city.is_set()
            || self.region.is_set()
            || self.postal_code.is_set()
            || self.country.is_set())
    }
}
