//! Pharmacy records: medicines and counter bills

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// Stock level below which the console flags a medicine
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A medicine in the pharmacy inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// "Antibiotic", "Analgesic", ...
    pub category: String,
    /// Manufacturer name
    pub company: String,
    /// Units on the shelf
    pub stock: u32,
    /// Unit price
    pub price: f64,
    pub expiry: NaiveDate,
}

impl Medicine {
    /// True when stock has fallen below the restock threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// True when the expiry date is on or before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry <= today
    }
}

impl_record!(Medicine, "medicine",
    required: [name, category, company],
    amounts: [price],
    search: [name, category, company]);

/// A pharmacy counter bill
///
/// One medicine per row, the way the counter form captures it. The total
/// is whatever the form computed; there is no ledger behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineBill {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub medicine: String,
    pub quantity: u32,
    pub total: f64,
    pub date: NaiveDate,
}

impl_record!(MedicineBill, "medicine bill",
    required: [patient, medicine],
    amounts: [total],
    search: [patient, medicine]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    fn medicine(stock: u32, expiry: NaiveDate) -> Medicine {
        Medicine {
            id: 0,
            name: "Amoxicillin 500".to_string(),
            category: "Antibiotic".to_string(),
            company: "Cipla".to_string(),
            stock,
            price: 4.5,
            expiry,
        }
    }

    #[test]
    fn test_low_stock_flag() {
        let expiry = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
        assert!(medicine(3, expiry).is_low_stock());
        assert!(!medicine(50, expiry).is_low_stock());
    }

    #[test]
    fn test_expiry_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(medicine(10, today).is_expired(today));
        assert!(!medicine(10, NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()).is_expired(today));
    }

    #[test]
    fn test_bill_requires_patient() {
        let bill = MedicineBill {
            id: 0,
            patient: String::new(),
            medicine: "Amoxicillin 500".to_string(),
            quantity: 2,
            total: 9.0,
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };
        assert!(bill.validate().is_err());
    }
}
