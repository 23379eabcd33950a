//! Finance records: transactions, invoices, and the hospital charge sheet
//!
//! All figures here are plain `f64` sums displayed on dashboards. There is
//! no ledger, no audit trail, and no precision guarantee; the numbers are
//! whatever the forms submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// Direction of a finance transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: u32,
    pub kind: TransactionKind,
    /// Amount as submitted; always recorded positive
    pub amount: f64,
    pub description: String,
    /// "Consultation", "Equipment", "Salaries", ...
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Amount with expense entries negated, for balance sums
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl_record!(Transaction, "transaction",
    required: [description, category],
    amounts: [amount],
    search: [description, category]);

/// Invoice payment state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Unpaid => write!(f, "unpaid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// A patient invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub description: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl_record!(Invoice, "invoice",
    required: [patient, description],
    amounts: [amount],
    search: [patient, description]);

/// A line on the hospital charge sheet ("OPD consultation", "Ward bed/day")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalCharge {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    pub amount: f64,
}

impl_record!(HospitalCharge, "hospital charge",
    required: [name, category],
    amounts: [amount],
    search: [name, category]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    fn txn(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: 0,
            kind,
            amount,
            description: "ward supplies".to_string(),
            category: "Equipment".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(txn(TransactionKind::Income, 250.0).signed_amount(), 250.0);
        assert_eq!(txn(TransactionKind::Expense, 250.0).signed_amount(), -250.0);
    }

    #[test]
    fn test_transaction_rejects_nan_amount() {
        let t = txn(TransactionKind::Income, f64::NAN);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_transaction_requires_description() {
        let mut t = txn(TransactionKind::Income, 100.0);
        t.description = "  ".to_string();
        assert!(t.validate().is_err());
    }
}
