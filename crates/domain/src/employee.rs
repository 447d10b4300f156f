//! Employee — a person on staff, assigned to exactly one location.

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::{EmployeeId, LocationId};

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "employeeId")]
    pub id: EmployeeId,
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeEmail")]
    pub email: String,
    #[serde(rename = "location")]
    pub location_id: LocationId,
}

impl Employee {
    /// Create a builder for constructing an [`Employee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when `name` is blank or `email`
    /// is not of the form `local@domain`.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Step-by-step builder for [`Employee`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<EmployeeId>,
    name: Option<String>,
    email: Option<String>,
    location_id: Option<LocationId>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn location_id(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Consume the builder, validate, and return an [`Employee`].
    ///
    /// A fresh [`EmployeeId`] is generated unless one was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if `name` or `email` is missing
    /// or invalid, or if no location was given.
    pub fn build(self) -> Result<Employee, StaffHubError> {
        let location_id = self.location_id.ok_or(ValidationError::MissingLocation)?;
        let employee = Employee {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            location_id,
        };
        employee.validate()?;
        Ok(employee)
    }
}

/// Partial update for an [`Employee`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeePatch {
    #[serde(rename = "employeeName")]
    pub name: Option<String>,
    #[serde(rename = "employeeEmail")]
    pub email: Option<String>,
    #[serde(rename = "location")]
    pub location_id: Option<LocationId>,
}

impl EmployeePatch {
    /// Return `true` when the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.location_id.is_none()
    }

    /// Copy the supplied fields onto `employee`.
    ///
    /// Invariants are not re-checked here; call [`Employee::validate`] afterwards.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(location_id) = self.location_id {
            employee.location_id = location_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn karlo() -> Employee {
        Employee::builder()
            .name("Karlo")
            .email("karlo@email.com")
            .location_id(LocationId::new(13))
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_employee_when_all_fields_provided() {
        let employee = karlo();
        assert_eq!(employee.name, "Karlo");
        assert_eq!(employee.email, "karlo@email.com");
        assert_eq!(employee.location_id, LocationId::new(13));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Employee::builder()
            .name("   ")
            .email("karlo@email.com")
            .location_id(LocationId::new(1))
            .build();
        assert!(matches!(
            result,
            Err(StaffHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_malformed_emails() {
        for email in ["", "karlo", "@email.com", "karlo@", "a@b@c", "kar lo@email.com"] {
            let result = Employee::builder()
                .name("Karlo")
                .email(email)
                .location_id(LocationId::new(1))
                .build();
            assert!(
                matches!(
                    result,
                    Err(StaffHubError::Validation(ValidationError::InvalidEmail))
                ),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn should_require_a_location() {
        let result = Employee::builder()
            .name("Karlo")
            .email("karlo@email.com")
            .build();
        assert!(matches!(
            result,
            Err(StaffHubError::Validation(ValidationError::MissingLocation))
        ));
    }

    #[test]
    fn should_generate_distinct_ids_for_identical_payloads() {
        assert_ne!(karlo().id, karlo().id);
    }

    #[test]
    fn should_use_wire_field_names() {
        let employee = karlo();
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["employeeId"], employee.id.to_string());
        assert_eq!(json["employeeName"], "Karlo");
        assert_eq!(json["employeeEmail"], "karlo@email.com");
        assert_eq!(json["location"], 13);
    }

    #[test]
    fn should_apply_only_supplied_fields() {
        let mut employee = karlo();
        let patch: EmployeePatch =
            serde_json::from_str(r#"{"employeeEmail":"karlo@work.mx"}"#).unwrap();
        patch.apply(&mut employee);

        assert_eq!(employee.name, "Karlo");
        assert_eq!(employee.email, "karlo@work.mx");
        assert_eq!(employee.location_id, LocationId::new(13));
    }

    #[test]
    fn should_detect_empty_patch() {
        assert!(EmployeePatch::default().is_empty());
        let patch = EmployeePatch {
            location_id: Some(LocationId::new(2)),
            ..EmployeePatch::default()
        };
        assert!(!patch.is_empty());
    }
}
