//! Explicit partial-update fields.
//!
//! A [`Patch<T>`] is either `Unchanged` (the field was not sent) or `Set(value)`.
//! Nullable columns use `Patch<Option<T>>` so that an explicit JSON `null` clears the
//! value while an absent field leaves it alone.

use sea_orm::ActiveValue;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> Patch<T> {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Set(value) => Patch::Set(value),
            Self::Unchanged => Patch::Unchanged,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Self::Set(value) => Patch::Set(f(value)),
            Self::Unchanged => Patch::Unchanged,
        }
    }

    /// Overwrite `target` when the field is set.
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }

    /// `Set` becomes `ActiveValue::Set`, `Unchanged` becomes `ActiveValue::NotSet`.
    pub fn into_active(self) -> ActiveValue<T>
    where
        T: Into<sea_orm::Value>,
    {
        match self {
            Self::Set(value) => ActiveValue::Set(value),
            Self::Unchanged => ActiveValue::NotSet,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }
}

/// Domain patch structs report whether at least one field is set.
pub trait PatchSet {
    fn is_empty(&self) -> bool;
}

/// `deserialize_with` helper for nullable request fields.
///
/// Combined with `#[serde(default)]`, an absent field becomes `None`, an explicit
/// `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
