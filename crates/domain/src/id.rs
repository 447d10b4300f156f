//! Typed identifier newtypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_uuid_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_uuid_id!(
    /// Unique identifier for an [`Employee`](crate::employee::Employee).
    EmployeeId
);

impl EmployeeId {
    /// Parse a client-supplied identifier, accepting only version 4 UUIDs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `s` is not a UUID or is a
    /// UUID of another version.
    pub fn parse_v4(s: &str) -> Result<Self, ValidationError> {
        let uuid = uuid::Uuid::parse_str(s).map_err(|_| ValidationError::InvalidId)?;
        if uuid.get_version_num() != 4 {
            return Err(ValidationError::InvalidId);
        }
        Ok(Self(uuid))
    }
}

/// Identifier for a [`Location`](crate::location::Location), assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for LocationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LocationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = EmployeeId::new();
        let b = EmployeeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = EmployeeId::new();
        let parsed: EmployeeId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_employee_id_as_plain_string() {
        let id = EmployeeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn should_accept_v4_uuid() {
        let id = EmployeeId::new();
        assert_eq!(EmployeeId::parse_v4(&id.to_string()), Ok(id));
    }

    #[test]
    fn should_reject_non_v4_uuid() {
        // version 1 uuid
        let result = EmployeeId::parse_v4("c232ab00-9414-11ec-b3c8-9f6bdeced846");
        assert_eq!(result, Err(ValidationError::InvalidId));
    }

    #[test]
    fn should_reject_garbage_employee_id() {
        assert_eq!(
            EmployeeId::parse_v4("not-a-uuid"),
            Err(ValidationError::InvalidId)
        );
    }

    #[test]
    fn should_parse_location_id() {
        assert_eq!("13".parse::<LocationId>(), Ok(LocationId::new(13)));
        assert_eq!(
            "thirteen".parse::<LocationId>(),
            Err(ValidationError::InvalidId)
        );
    }

    #[test]
    fn should_serialize_location_id_as_number() {
        let json = serde_json::to_string(&LocationId::new(13)).unwrap();
        assert_eq!(json, "13");
    }
}
