//! Explicit field state for partial updates

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field of a partial-update request
///
/// Use with `#[serde(default, skip_serializing_if = "Patch::is_unset")]` so an
/// [`Patch::Unset`] field is absent from the request body rather than `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the field untouched (omitted from the body)
    #[default]
    Unset,
    /// Clear the field (sent as `null`)
    Clear,
    /// Replace the field with this value
    Set(T),
}

impl<T> Patch<T> {
    /// True when the field will be omitted
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the new value, if one is being set
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unset | Self::Clear => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(v) => v.serialize(serializer),
            Self::Unset | Self::Clear => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Clear, Self::Set))
    }
}
