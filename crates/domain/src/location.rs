//! Location — a named site with coordinates and a postal address.

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::LocationId;

/// Geographic coordinate pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

/// A persisted site that employees are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "locationId")]
    pub id: LocationId,
    #[serde(rename = "locationName")]
    pub name: String,
    #[serde(rename = "locationLatLng")]
    pub lat_lng: LatLng,
    #[serde(rename = "locationAddress")]
    pub address: String,
}

impl Location {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when `name` or `address` is blank
    /// or the coordinates are out of range.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        check_fields(&self.name, self.lat_lng, &self.address)
    }
}

fn check_fields(name: &str, lat_lng: LatLng, address: &str) -> Result<(), StaffHubError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if address.trim().is_empty() {
        return Err(ValidationError::EmptyAddress.into());
    }
    if !lat_lng.is_valid() {
        return Err(ValidationError::InvalidCoordinates.into());
    }
    Ok(())
}

/// Payload for creating a [`Location`].
///
/// `id` is normally left out so the store assigns one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewLocation {
    #[serde(rename = "locationId", default)]
    pub id: Option<LocationId>,
    #[serde(rename = "locationName")]
    pub name: String,
    #[serde(rename = "locationLatLng")]
    pub lat_lng: LatLng,
    #[serde(rename = "locationAddress")]
    pub address: String,
}

impl NewLocation {
    #[must_use]
    pub fn new(name: impl Into<String>, lat_lng: LatLng, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            lat_lng,
            address: address.into(),
        }
    }

    /// Request a specific identifier instead of a store-assigned one.
    #[must_use]
    pub fn with_id(mut self, id: LocationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check the same invariants as [`Location::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] on any invariant violation.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        check_fields(&self.name, self.lat_lng, &self.address)
    }

    /// Attach the identifier the store settled on.
    #[must_use]
    pub fn into_location(self, id: LocationId) -> Location {
        Location {
            id,
            name: self.name,
            lat_lng: self.lat_lng,
            address: self.address,
        }
    }
}

/// Partial update for a [`Location`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationPatch {
    #[serde(rename = "locationName")]
    pub name: Option<String>,
    #[serde(rename = "locationLatLng")]
    pub lat_lng: Option<LatLng>,
    #[serde(rename = "locationAddress")]
    pub address: Option<String>,
}

impl LocationPatch {
    /// Copy the supplied fields onto `location`.
    pub fn apply(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name;
        }
        if let Some(lat_lng) = self.lat_lng {
            location.lat_lng = lat_lng;
        }
        if let Some(address) = self.address {
            location.address = address;
        }
    }
}
