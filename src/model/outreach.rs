//! Outreach records: RFID asset tags and marketing field visits

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// An RFID tag assigned to a person or asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RfidTag {
    #[serde(default)]
    pub id: u32,
    /// Printed tag code ("RF-00421")
    pub tag_code: String,
    /// Who or what carries the tag, free text
    pub assignee: String,
    /// Last known zone label ("Ward B", "OPD")
    #[serde(default)]
    pub zone: String,
    #[serde(default = "default_tag_active")]
    pub active: bool,
}

fn default_tag_active() -> bool {
    true
}

impl_record!(RfidTag, "rfid tag",
    required: [tag_code, assignee],
    search: [tag_code, assignee, zone]);

/// A marketing representative's field visit
///
/// Coordinates are static sample values captured once with the record;
/// nothing tracks position in real time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketingVisit {
    #[serde(default)]
    pub id: u32,
    pub representative: String,
    /// Clinic or hospital visited
    pub clinic: String,
    #[serde(default)]
    pub notes: String,
    pub lat: f64,
    pub lng: f64,
    pub date: NaiveDate,
}

impl_record!(MarketingVisit, "marketing visit",
    required: [representative, clinic],
    search: [representative, clinic, notes]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    #[test]
    fn test_rfid_requires_tag_code() {
        let tag = RfidTag {
            id: 0,
            tag_code: String::new(),
            assignee: "Wheelchair 4".to_string(),
            zone: "Ward B".to_string(),
            active: true,
        };
        assert!(tag.validate().is_err());
    }

    #[test]
    fn test_visit_search_matches_clinic() {
        let visit = MarketingVisit {
            id: 0,
            representative: "Kiran Rao".to_string(),
            clinic: "Sunrise Clinic".to_string(),
            notes: "left brochures".to_string(),
            lat: 12.9716,
            lng: 77.5946,
            date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
        };
        assert!(visit.search_text().to_lowercase().contains("sunrise"));
    }
}
