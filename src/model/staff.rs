//! Staff records: doctors and console user accounts

use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// Console audience role
///
/// Scopes which section of the console a user lands in. Roles are labels,
/// not permissions; the console has no authorization enforcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    /// All roles for iteration
    pub fn all() -> &'static [Role] {
        &[Role::Admin, Role::Doctor, Role::Patient]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Doctor => write!(f, "doctor"),
            Role::Patient => write!(f, "patient"),
        }
    }
}

/// Doctor availability for the consultation roster
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    OnLeave,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Busy => write!(f, "busy"),
            Availability::OnLeave => write!(f, "on_leave"),
        }
    }
}

/// A doctor on the hospital roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Assigned by the registry on insert
    #[serde(default)]
    pub id: u32,
    /// Full display name
    pub name: String,
    /// Medical specialty ("Cardiology", "Pediatrics", ...)
    pub specialty: String,
    /// Consultation window as shown on the roster ("09:00 - 13:00")
    pub consultation_time: String,
    /// Current availability
    pub availability: Availability,
    /// Contact number (optional display field)
    #[serde(default)]
    pub phone: String,
}

impl_record!(Doctor, "doctor",
    required: [name, specialty, consultation_time],
    search: [name, specialty]);

/// A console user account managed from the admin section
///
/// Accounts are display records only; nothing authenticates against them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffUser {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Inactive accounts stay listed but greyed out in the console
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl_record!(StaffUser, "user",
    required: [name, email],
    search: [name, email]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    fn doctor() -> Doctor {
        Doctor {
            id: 0,
            name: "Asha Verma".to_string(),
            specialty: "Cardiology".to_string(),
            consultation_time: "09:00 - 13:00".to_string(),
            availability: Availability::Available,
            phone: "555-0102".to_string(),
        }
    }

    #[test]
    fn test_doctor_requires_name() {
        let mut d = doctor();
        assert!(d.validate().is_ok());
        d.name = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_doctor_search_text_covers_specialty() {
        let d = doctor();
        assert!(d.search_text().contains("Cardiology"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
