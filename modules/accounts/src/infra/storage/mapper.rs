use crate::domain::models::{Address, User};

use super::entity::{address, user};

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            password_hash: m.password_hash,
            gender: m.gender,
            age: m.age,
            height_cm: m.height_cm,
            weight_kg: m.weight_kg,
            goal: m.goal,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<address::Model> for Address {
    fn from(m: address::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            line1: m.line1,
            line2: m.line2,
            city: m.city,
            region: m.region,
            postal_code: m.postal_code,
            country: m.country,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
