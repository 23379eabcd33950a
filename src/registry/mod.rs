//! In-memory hospital registry
//!
//! The registry is the console's entire data layer: one [`Collection`] per
//! feature domain, all resident in RAM. Binaries start from
//! [`Registry::seeded`], which loads the literal sample data in
//! [`seed`]; nothing is ever written to disk, so every restart begins from
//! the same seed state.

pub mod error;
pub mod seed;
pub mod store;

pub use error::{require, RegistryError, RegistryResult};
pub use store::{Collection, Record};

use crate::model::{
    Appointment, BloodIssue, Doctor, Document, Donor, Enquiry, HospitalCharge, Invoice,
    LabReport, MailMessage, MarketingVisit, Medicine, MedicineBill, Meeting, Notice,
    PathologyTest, Patient, Prescription, RfidTag, SmartCard, SmsMessage, StaffUser,
    Transaction,
};

/// Every collection the console knows about
///
/// Collections are independent: no operation touches more than one, and
/// the free-text person fields in one collection never resolve against
/// another.
pub struct Registry {
    pub doctors: Collection<Doctor>,
    pub users: Collection<StaffUser>,
    pub patients: Collection<Patient>,
    pub smart_cards: Collection<SmartCard>,
    pub documents: Collection<Document>,
    pub appointments: Collection<Appointment>,
    pub prescriptions: Collection<Prescription>,
    pub lab_reports: Collection<LabReport>,
    pub pathology_tests: Collection<PathologyTest>,
    pub donors: Collection<Donor>,
    pub blood_issues: Collection<BloodIssue>,
    pub medicines: Collection<Medicine>,
    pub medicine_bills: Collection<MedicineBill>,
    pub transactions: Collection<Transaction>,
    pub invoices: Collection<Invoice>,
    pub charges: Collection<HospitalCharge>,
    pub notices: Collection<Notice>,
    pub meetings: Collection<Meeting>,
    pub enquiries: Collection<Enquiry>,
    pub sms_outbox: Collection<SmsMessage>,
    pub mail_outbox: Collection<MailMessage>,
    pub rfid_tags: Collection<RfidTag>,
    pub marketing_visits: Collection<MarketingVisit>,
}

impl Registry {
    /// Create an empty registry (tests start here)
    pub fn new() -> Self {
        Self {
            doctors: Collection::new(),
            users: Collection::new(),
            patients: Collection::new(),
            smart_cards: Collection::new(),
            documents: Collection::new(),
            appointments: Collection::new(),
            prescriptions: Collection::new(),
            lab_reports: Collection::new(),
            pathology_tests: Collection::new(),
            donors: Collection::new(),
            blood_issues: Collection::new(),
            medicines: Collection::new(),
            medicine_bills: Collection::new(),
            transactions: Collection::new(),
            invoices: Collection::new(),
            charges: Collection::new(),
            notices: Collection::new(),
            meetings: Collection::new(),
            enquiries: Collection::new(),
            sms_outbox: Collection::new(),
            mail_outbox: Collection::new(),
            rfid_tags: Collection::new(),
            marketing_visits: Collection::new(),
        }
    }

    /// Create a registry populated with the sample data set
    pub async fn seeded() -> RegistryResult<Self> {
        let registry = Self::new();
        seed::populate(&registry).await?;
        Ok(registry)
    }

    /// Record counts across all collections
    pub async fn stats(&self) -> RegistryStats {
        RegistryStats {
            doctors: self.doctors.len().await,
            users: self.users.len().await,
            patients: self.patients.len().await,
            smart_cards: self.smart_cards.len().await,
            documents: self.documents.len().await,
            appointments: self.appointments.len().await,
            prescriptions: self.prescriptions.len().await,
            lab_reports: self.lab_reports.len().await,
            pathology_tests: self.pathology_tests.len().await,
            donors: self.donors.len().await,
            blood_issues: self.blood_issues.len().await,
            medicines: self.medicines.len().await,
            medicine_bills: self.medicine_bills.len().await,
            transactions: self.transactions.len().await,
            invoices: self.invoices.len().await,
            charges: self.charges.len().await,
            notices: self.notices.len().await,
            meetings: self.meetings.len().await,
            enquiries: self.enquiries.len().await,
            sms_outbox: self.sms_outbox.len().await,
            mail_outbox: self.mail_outbox.len().await,
            rfid_tags: self.rfid_tags.len().await,
            marketing_visits: self.marketing_visits.len().await,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Record counts per collection, for the demo binary and health output
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RegistryStats {
    pub doctors: usize,
    pub users: usize,
    pub patients: usize,
    pub smart_cards: usize,
    pub documents: usize,
    pub appointments: usize,
    pub prescriptions: usize,
    pub lab_reports: usize,
    pub pathology_tests: usize,
    pub donors: usize,
    pub blood_issues: usize,
    pub medicines: usize,
    pub medicine_bills: usize,
    pub transactions: usize,
    pub invoices: usize,
    pub charges: usize,
    pub notices: usize,
    pub meetings: usize,
    pub enquiries: usize,
    pub sms_outbox: usize,
    pub mail_outbox: usize,
    pub rfid_tags: usize,
    pub marketing_visits: usize,
}

impl RegistryStats {
    /// Sum of all records in the registry
    pub fn total(&self) -> usize {
        self.doctors
            + self.users
            + self.patients
            + self.smart_cards
            + self.documents
            + self.appointments
            + self.prescriptions
            + self.lab_reports
            + self.pathology_tests
            + self.donors
            + self.blood_issues
            + self.medicines
            + self.medicine_bills
            + self.transactions
            + self.invoices
            + self.charges
            + self.notices
            + self.meetings
            + self.enquiries
            + self.sms_outbox
            + self.mail_outbox
            + self.rfid_tags
            + self.marketing_visits
    }
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records ({} patients, {} doctors, {} appointments, {} transactions)",
            self.total(),
            self.patients,
            self.doctors,
            self.appointments,
            self.transactions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_registry_is_empty() {
        let registry = Registry::new();
        let stats = registry.stats().await;
        assert_eq!(stats.total(), 0);
    }

    #[tokio::test]
    async fn test_seeded_registry_has_every_collection_populated() {
        let registry = Registry::seeded().await.unwrap();
        let stats = registry.stats().await;

        assert!(stats.doctors > 0);
        assert!(stats.users > 0);
        assert!(stats.patients > 0);
        assert!(stats.smart_cards > 0);
        assert!(stats.documents > 0);
        assert!(stats.appointments > 0);
        assert!(stats.prescriptions > 0);
        assert!(stats.lab_reports > 0);
        assert!(stats.pathology_tests > 0);
        assert!(stats.donors > 0);
        assert!(stats.blood_issues > 0);
        assert!(stats.medicines > 0);
        assert!(stats.medicine_bills > 0);
        assert!(stats.transactions > 0);
        assert!(stats.invoices > 0);
        assert!(stats.charges > 0);
        assert!(stats.notices > 0);
        assert!(stats.meetings > 0);
        assert!(stats.enquiries > 0);
        assert!(stats.sms_outbox > 0);
        assert!(stats.mail_outbox > 0);
        assert!(stats.rfid_tags > 0);
        assert!(stats.marketing_visits > 0);
    }
}
