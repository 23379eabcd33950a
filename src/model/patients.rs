//! Patient-side records: patients, smart cards, and document metadata

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{impl_record, BloodGroup};

/// A registered patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub age: u32,
    /// Free-text gender field, as entered on the form
    pub gender: String,
    pub blood_group: BloodGroup,
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl_record!(Patient, "patient",
    required: [name, phone],
    search: [name, phone, address]);

/// Smart card status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Blocked,
    Expired,
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardStatus::Active => write!(f, "active"),
            CardStatus::Blocked => write!(f, "blocked"),
            CardStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A hospital smart card issued to a patient
///
/// The patient field is free text; cards are not linked to patient records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmartCard {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub card_number: String,
    pub issued_on: NaiveDate,
    pub status: CardStatus,
}

impl_record!(SmartCard, "smart card",
    required: [patient, card_number],
    search: [patient, card_number]);

/// Document metadata attached to a patient
///
/// Only the metadata row exists; there is no file body anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub title: String,
    /// "X-Ray", "Discharge Summary", "Insurance", ...
    pub category: String,
    pub uploaded_on: NaiveDate,
}

impl_record!(Document, "document",
    required: [patient, title],
    search: [patient, title, category]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    #[test]
    fn test_patient_requires_phone() {
        let p = Patient {
            id: 0,
            name: "Rohan Mehta".to_string(),
            age: 34,
            gender: "male".to_string(),
            blood_group: BloodGroup::OPos,
            phone: String::new(),
            address: "12 Lake Road".to_string(),
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_card_status_roundtrip() {
        let json = serde_json::to_string(&CardStatus::Blocked).unwrap();
        assert_eq!(json, "\"blocked\"");
        let back: CardStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardStatus::Blocked);
    }
}
