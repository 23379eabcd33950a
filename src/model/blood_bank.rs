//! Blood bank records: donors and blood issues

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    /// All groups for dropdowns and iteration
    pub fn all() -> &'static [BloodGroup] {
        &[
            BloodGroup::APos,
            BloodGroup::ANeg,
            BloodGroup::BPos,
            BloodGroup::BNeg,
            BloodGroup::AbPos,
            BloodGroup::AbNeg,
            BloodGroup::OPos,
            BloodGroup::ONeg,
        ]
    }

    /// Display label ("A+", "O-", ...)
    pub fn label(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A registered blood donor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donor {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub blood_group: BloodGroup,
    pub phone: String,
    /// Date of the most recent donation, if any
    #[serde(default)]
    pub last_donation: Option<NaiveDate>,
}

impl_record!(Donor, "donor",
    required: [name, phone],
    search: [name, phone]);

/// A blood issue from the bank to a patient
///
/// Patient, doctor, and donor are free-text fields exactly as entered on
/// the issue form; no foreign keys exist between collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodIssue {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub donor: String,
    pub blood_group: BloodGroup,
    /// Issued amount in milliliters
    pub amount_ml: u32,
    pub issue_date: NaiveDate,
}

impl_record!(BloodIssue, "blood issue",
    required: [patient, doctor, donor],
    search: [patient, doctor, donor]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    #[test]
    fn test_blood_group_serializes_as_label() {
        assert_eq!(serde_json::to_string(&BloodGroup::AbNeg).unwrap(), "\"AB-\"");
        let back: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(back, BloodGroup::OPos);
    }

    #[test]
    fn test_blood_issue_requires_donor() {
        let issue = BloodIssue {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            doctor: "Asha Verma".to_string(),
            donor: String::new(),
            blood_group: BloodGroup::BPos,
            amount_ml: 450,
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        assert!(issue.validate().is_err());
    }

    #[test]
    fn test_all_groups_have_unique_labels() {
        let labels: std::collections::HashSet<_> =
            BloodGroup::all().iter().map(|g| g.label()).collect();
        assert_eq!(labels.len(), 8);
    }
}
