//! Sample data set
//!
//! The literal records every collection starts from. This is the only data
//! source the console has: the arrays below are loaded at startup and
//! everything added at runtime disappears with the process.

use chrono::NaiveDate;

use crate::model::{
    Appointment, AppointmentStatus, Audience, Availability, BloodGroup, BloodIssue, CardStatus,
    Doctor, Document, Donor, Enquiry, HospitalCharge, Invoice, InvoiceStatus, LabReport,
    MailMessage, MarketingVisit, Medicine, MedicineBill, Meeting, Notice, PathologyTest,
    Patient, Prescription, ReportStatus, RfidTag, Role, SmartCard, SmsMessage, StaffUser,
    Transaction, TransactionKind,
};

use super::{Registry, RegistryResult};

/// Load every sample array into the registry
pub async fn populate(registry: &Registry) -> RegistryResult<()> {
    for record in sample_doctors() {
        registry.doctors.insert(record).await?;
    }
    for record in sample_users() {
        registry.users.insert(record).await?;
    }
    for record in sample_patients() {
        registry.patients.insert(record).await?;
    }
    for record in sample_smart_cards() {
        registry.smart_cards.insert(record).await?;
    }
    for record in sample_documents() {
        registry.documents.insert(record).await?;
    }
    for record in sample_appointments() {
        registry.appointments.insert(record).await?;
    }
    for record in sample_prescriptions() {
        registry.prescriptions.insert(record).await?;
    }
    for record in sample_lab_reports() {
        registry.lab_reports.insert(record).await?;
    }
    for record in sample_pathology_tests() {
        registry.pathology_tests.insert(record).await?;
    }
    for record in sample_donors() {
        registry.donors.insert(record).await?;
    }
    for record in sample_blood_issues() {
        registry.blood_issues.insert(record).await?;
    }
    for record in sample_medicines() {
        registry.medicines.insert(record).await?;
    }
    for record in sample_medicine_bills() {
        registry.medicine_bills.insert(record).await?;
    }
    for record in sample_transactions() {
        registry.transactions.insert(record).await?;
    }
    for record in sample_invoices() {
        registry.invoices.insert(record).await?;
    }
    for record in sample_charges() {
        registry.charges.insert(record).await?;
    }
    for record in sample_notices() {
        registry.notices.insert(record).await?;
    }
    for record in sample_meetings() {
        registry.meetings.insert(record).await?;
    }
    for record in sample_enquiries() {
        registry.enquiries.insert(record).await?;
    }
    for record in sample_sms() {
        registry.sms_outbox.insert(record).await?;
    }
    for record in sample_mail() {
        registry.mail_outbox.insert(record).await?;
    }
    for record in sample_rfid_tags() {
        registry.rfid_tags.insert(record).await?;
    }
    for record in sample_marketing_visits() {
        registry.marketing_visits.insert(record).await?;
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 0,
            name: "Asha Verma".to_string(),
            specialty: "Cardiology".to_string(),
            consultation_time: "09:00 - 13:00".to_string(),
            availability: Availability::Available,
            phone: "555-0102".to_string(),
        },
        Doctor {
            id: 0,
            name: "Vikram Nair".to_string(),
            specialty: "Orthopedics".to_string(),
            consultation_time: "10:00 - 16:00".to_string(),
            availability: Availability::Busy,
            phone: "555-0114".to_string(),
        },
        Doctor {
            id: 0,
            name: "Meera Pillai".to_string(),
            specialty: "Pediatrics".to_string(),
            consultation_time: "08:30 - 12:30".to_string(),
            availability: Availability::Available,
            phone: "555-0131".to_string(),
        },
        Doctor {
            id: 0,
            name: "Tomas Okafor".to_string(),
            specialty: "General Medicine".to_string(),
            consultation_time: "14:00 - 19:00".to_string(),
            availability: Availability::OnLeave,
            phone: "555-0147".to_string(),
        },
    ]
}

fn sample_users() -> Vec<StaffUser> {
    vec![
        StaffUser {
            id: 0,
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@medboard.example".to_string(),
            role: Role::Admin,
            active: true,
        },
        StaffUser {
            id: 0,
            name: "Asha Verma".to_string(),
            email: "asha.verma@medboard.example".to_string(),
            role: Role::Doctor,
            active: true,
        },
        StaffUser {
            id: 0,
            name: "Rohan Mehta".to_string(),
            email: "rohan.mehta@medboard.example".to_string(),
            role: Role::Patient,
            active: true,
        },
        StaffUser {
            id: 0,
            name: "Devika Rao".to_string(),
            email: "devika.rao@medboard.example".to_string(),
            role: Role::Admin,
            active: false,
        },
    ]
}

fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 0,
            name: "Rohan Mehta".to_string(),
            age: 34,
            gender: "male".to_string(),
            blood_group: BloodGroup::OPos,
            phone: "555-2201".to_string(),
            address: "12 Lake Road".to_string(),
        },
        Patient {
            id: 0,
            name: "Sara Khan".to_string(),
            age: 28,
            gender: "female".to_string(),
            blood_group: BloodGroup::APos,
            phone: "555-2214".to_string(),
            address: "4 Hill View".to_string(),
        },
        Patient {
            id: 0,
            name: "Arjun Iyer".to_string(),
            age: 61,
            gender: "male".to_string(),
            blood_group: BloodGroup::BNeg,
            phone: "555-2230".to_string(),
            address: "88 Station Street".to_string(),
        },
        Patient {
            id: 0,
            name: "Nina Thomas".to_string(),
            age: 8,
            gender: "female".to_string(),
            blood_group: BloodGroup::AbPos,
            phone: "555-2245".to_string(),
            address: "21 Garden Lane".to_string(),
        },
    ]
}

fn sample_smart_cards() -> Vec<SmartCard> {
    vec![
        SmartCard {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            card_number: "SC-10021".to_string(),
            issued_on: date(2025, 11, 3),
            status: CardStatus::Active,
        },
        SmartCard {
            id: 0,
            patient: "Sara Khan".to_string(),
            card_number: "SC-10022".to_string(),
            issued_on: date(2025, 12, 18),
            status: CardStatus::Active,
        },
        SmartCard {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            card_number: "SC-09914".to_string(),
            issued_on: date(2024, 6, 2),
            status: CardStatus::Expired,
        },
    ]
}

fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            title: "Chest X-Ray".to_string(),
            category: "X-Ray".to_string(),
            uploaded_on: date(2026, 1, 9),
        },
        Document {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            title: "Discharge Summary".to_string(),
            category: "Discharge Summary".to_string(),
            uploaded_on: date(2026, 2, 21),
        },
        Document {
            id: 0,
            patient: "Sara Khan".to_string(),
            title: "Insurance Claim Form".to_string(),
            category: "Insurance".to_string(),
            uploaded_on: date(2026, 3, 5),
        },
    ]
}

fn sample_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            doctor: "Asha Verma".to_string(),
            date: date(2026, 8, 10),
            time: "10:30".to_string(),
            reason: "chest pain follow-up".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 0,
            patient: "Nina Thomas".to_string(),
            doctor: "Meera Pillai".to_string(),
            date: date(2026, 8, 11),
            time: "09:00".to_string(),
            reason: "vaccination".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            doctor: "Vikram Nair".to_string(),
            date: date(2026, 7, 28),
            time: "11:15".to_string(),
            reason: "knee replacement review".to_string(),
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: 0,
            patient: "Sara Khan".to_string(),
            doctor: "Tomas Okafor".to_string(),
            date: date(2026, 8, 3),
            time: "15:00".to_string(),
            reason: "fever".to_string(),
            status: AppointmentStatus::Cancelled,
        },
    ]
}

fn sample_prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            doctor: "Asha Verma".to_string(),
            medication: "Atorvastatin".to_string(),
            dosage: "10mg nightly".to_string(),
            instructions: "take after dinner".to_string(),
            date: date(2026, 7, 30),
        },
        Prescription {
            id: 0,
            patient: "Nina Thomas".to_string(),
            doctor: "Meera Pillai".to_string(),
            medication: "Paracetamol syrup".to_string(),
            dosage: "5ml three times daily".to_string(),
            instructions: "with food".to_string(),
            date: date(2026, 8, 1),
        },
        Prescription {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            doctor: "Vikram Nair".to_string(),
            medication: "Ibuprofen".to_string(),
            dosage: "400mg as needed".to_string(),
            instructions: "max three per day".to_string(),
            date: date(2026, 7, 28),
        },
    ]
}

fn sample_lab_reports() -> Vec<LabReport> {
    vec![
        LabReport {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            test_name: "Lipid Profile".to_string(),
            result: "LDL slightly elevated".to_string(),
            status: ReportStatus::Completed,
            date: date(2026, 7, 25),
        },
        LabReport {
            id: 0,
            patient: "Sara Khan".to_string(),
            test_name: "Complete Blood Count".to_string(),
            result: String::new(),
            status: ReportStatus::Pending,
            date: date(2026, 8, 5),
        },
        LabReport {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            test_name: "Uric Acid".to_string(),
            result: "within range".to_string(),
            status: ReportStatus::Completed,
            date: date(2026, 7, 20),
        },
    ]
}

fn sample_pathology_tests() -> Vec<PathologyTest> {
    vec![
        PathologyTest {
            id: 0,
            name: "Complete Blood Count".to_string(),
            category: "Hematology".to_string(),
            sample: "blood".to_string(),
            charge: 350.0,
        },
        PathologyTest {
            id: 0,
            name: "Lipid Profile".to_string(),
            category: "Biochemistry".to_string(),
            sample: "blood".to_string(),
            charge: 600.0,
        },
        PathologyTest {
            id: 0,
            name: "Urine Routine".to_string(),
            category: "Clinical Pathology".to_string(),
            sample: "urine".to_string(),
            charge: 200.0,
        },
        PathologyTest {
            id: 0,
            name: "Thyroid Panel".to_string(),
            category: "Biochemistry".to_string(),
            sample: "blood".to_string(),
            charge: 750.0,
        },
    ]
}

fn sample_donors() -> Vec<Donor> {
    vec![
        Donor {
            id: 0,
            name: "Kabir Singh".to_string(),
            blood_group: BloodGroup::ONeg,
            phone: "555-3301".to_string(),
            last_donation: Some(date(2026, 5, 14)),
        },
        Donor {
            id: 0,
            name: "Lata Desai".to_string(),
            blood_group: BloodGroup::BPos,
            phone: "555-3318".to_string(),
            last_donation: Some(date(2026, 6, 30)),
        },
        Donor {
            id: 0,
            name: "Omar Farouk".to_string(),
            blood_group: BloodGroup::APos,
            phone: "555-3329".to_string(),
            last_donation: None,
        },
    ]
}

fn sample_blood_issues() -> Vec<BloodIssue> {
    vec![
        BloodIssue {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            doctor: "Vikram Nair".to_string(),
            donor: "Kabir Singh".to_string(),
            blood_group: BloodGroup::ONeg,
            amount_ml: 450,
            issue_date: date(2026, 7, 27),
        },
        BloodIssue {
            id: 0,
            patient: "Sara Khan".to_string(),
            doctor: "Tomas Okafor".to_string(),
            donor: "Lata Desai".to_string(),
            blood_group: BloodGroup::BPos,
            amount_ml: 350,
            issue_date: date(2026, 8, 2),
        },
    ]
}

fn sample_medicines() -> Vec<Medicine> {
    vec![
        Medicine {
            id: 0,
            name: "Amoxicillin 500".to_string(),
            category: "Antibiotic".to_string(),
            company: "Cipla".to_string(),
            stock: 120,
            price: 4.5,
            expiry: date(2027, 3, 1),
        },
        Medicine {
            id: 0,
            name: "Paracetamol 650".to_string(),
            category: "Analgesic".to_string(),
            company: "GSK".to_string(),
            stock: 8,
            price: 1.2,
            expiry: date(2026, 12, 1),
        },
        Medicine {
            id: 0,
            name: "Atorvastatin 10".to_string(),
            category: "Statin".to_string(),
            company: "Sun Pharma".to_string(),
            stock: 64,
            price: 6.8,
            expiry: date(2027, 1, 15),
        },
        Medicine {
            id: 0,
            name: "Cetirizine 10".to_string(),
            category: "Antihistamine".to_string(),
            company: "Dr. Reddy's".to_string(),
            stock: 200,
            price: 0.9,
            expiry: date(2026, 10, 20),
        },
    ]
}

fn sample_medicine_bills() -> Vec<MedicineBill> {
    vec![
        MedicineBill {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            medicine: "Atorvastatin 10".to_string(),
            quantity: 30,
            total: 204.0,
            date: date(2026, 7, 30),
        },
        MedicineBill {
            id: 0,
            patient: "Nina Thomas".to_string(),
            medicine: "Paracetamol syrup".to_string(),
            quantity: 1,
            total: 85.0,
            date: date(2026, 8, 1),
        },
        MedicineBill {
            id: 0,
            patient: "Sara Khan".to_string(),
            medicine: "Cetirizine 10".to_string(),
            quantity: 10,
            total: 9.0,
            date: date(2026, 8, 3),
        },
    ]
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 0,
            kind: TransactionKind::Income,
            amount: 1200.0,
            description: "OPD consultations".to_string(),
            category: "Consultation".to_string(),
            date: date(2026, 8, 1),
        },
        Transaction {
            id: 0,
            kind: TransactionKind::Income,
            amount: 850.0,
            description: "Pharmacy counter sales".to_string(),
            category: "Pharmacy".to_string(),
            date: date(2026, 8, 2),
        },
        Transaction {
            id: 0,
            kind: TransactionKind::Expense,
            amount: 700.0,
            description: "Oxygen cylinder refill".to_string(),
            category: "Equipment".to_string(),
            date: date(2026, 8, 2),
        },
        Transaction {
            id: 0,
            kind: TransactionKind::Income,
            amount: 2500.0,
            description: "Ward admissions".to_string(),
            category: "Ward".to_string(),
            date: date(2026, 8, 4),
        },
        Transaction {
            id: 0,
            kind: TransactionKind::Expense,
            amount: 1300.0,
            description: "Housekeeping contract".to_string(),
            category: "Services".to_string(),
            date: date(2026, 8, 5),
        },
    ]
}

fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            description: "Consultation and lipid profile".to_string(),
            amount: 950.0,
            status: InvoiceStatus::Paid,
            date: date(2026, 7, 30),
        },
        Invoice {
            id: 0,
            patient: "Arjun Iyer".to_string(),
            description: "Orthopedic review and X-ray".to_string(),
            amount: 1400.0,
            status: InvoiceStatus::Unpaid,
            date: date(2026, 7, 28),
        },
        Invoice {
            id: 0,
            patient: "Sara Khan".to_string(),
            description: "Blood transfusion".to_string(),
            amount: 3200.0,
            status: InvoiceStatus::Overdue,
            date: date(2026, 6, 15),
        },
    ]
}

fn sample_charges() -> Vec<HospitalCharge> {
    vec![
        HospitalCharge {
            id: 0,
            name: "OPD Consultation".to_string(),
            category: "Consultation".to_string(),
            amount: 300.0,
        },
        HospitalCharge {
            id: 0,
            name: "General Ward Bed / day".to_string(),
            category: "Ward".to_string(),
            amount: 1500.0,
        },
        HospitalCharge {
            id: 0,
            name: "ICU Bed / day".to_string(),
            category: "Ward".to_string(),
            amount: 6000.0,
        },
        HospitalCharge {
            id: 0,
            name: "Ambulance / km".to_string(),
            category: "Transport".to_string(),
            amount: 25.0,
        },
    ]
}

fn sample_notices() -> Vec<Notice> {
    vec![
        Notice {
            id: 0,
            title: "Fire drill on Friday".to_string(),
            body: "All staff must assemble at the east gate at 11:00.".to_string(),
            audience: Audience::Staff,
            date: date(2026, 8, 3),
        },
        Notice {
            id: 0,
            title: "Visiting hours change".to_string(),
            body: "Ward visiting hours are now 16:00 - 18:00 daily.".to_string(),
            audience: Audience::All,
            date: date(2026, 7, 20),
        },
        Notice {
            id: 0,
            title: "Flu vaccination camp".to_string(),
            body: "Free flu shots for registered patients this weekend.".to_string(),
            audience: Audience::Patients,
            date: date(2026, 8, 5),
        },
    ]
}

fn sample_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: 0,
            title: "Monthly department heads".to_string(),
            agenda: "budget review, staffing".to_string(),
            location: "Conference Room A".to_string(),
            date: date(2026, 8, 12),
            time: "14:00".to_string(),
        },
        Meeting {
            id: 0,
            title: "Infection control audit".to_string(),
            agenda: "ward B findings".to_string(),
            location: "Board Room".to_string(),
            date: date(2026, 8, 18),
            time: "10:00".to_string(),
        },
    ]
}

fn sample_enquiries() -> Vec<Enquiry> {
    vec![
        Enquiry {
            id: 0,
            name: "Farid Ahmed".to_string(),
            email: "farid.a@example.com".to_string(),
            subject: "Health checkup packages".to_string(),
            message: "Do you offer an annual full-body checkup?".to_string(),
            date: date(2026, 8, 4),
        },
        Enquiry {
            id: 0,
            name: "Grace Lin".to_string(),
            email: "grace.lin@example.com".to_string(),
            subject: "Insurance tie-ups".to_string(),
            message: "Which insurers do you accept for cashless claims?".to_string(),
            date: date(2026, 8, 6),
        },
    ]
}

fn sample_sms() -> Vec<SmsMessage> {
    vec![
        SmsMessage {
            id: 0,
            recipient: "555-2201".to_string(),
            body: "Your appointment with Dr. Verma is confirmed for 10 Aug, 10:30.".to_string(),
            sent_at: 1_786_012_200_000,
        },
        SmsMessage {
            id: 0,
            recipient: "555-2245".to_string(),
            body: "Vaccination reminder: 11 Aug, 09:00.".to_string(),
            sent_at: 1_786_098_600_000,
        },
    ]
}

fn sample_mail() -> Vec<MailMessage> {
    vec![
        MailMessage {
            id: 0,
            recipient: "rohan.mehta@example.com".to_string(),
            subject: "Your lab report is ready".to_string(),
            body: "Your lipid profile report is available at the front desk.".to_string(),
            sent_at: 1_785_925_800_000,
        },
        MailMessage {
            id: 0,
            recipient: "sara.khan@example.com".to_string(),
            subject: "Invoice reminder".to_string(),
            body: "Invoice #3 is overdue. Please contact billing.".to_string(),
            sent_at: 1_786_012_200_000,
        },
    ]
}

fn sample_rfid_tags() -> Vec<RfidTag> {
    vec![
        RfidTag {
            id: 0,
            tag_code: "RF-00421".to_string(),
            assignee: "Wheelchair 4".to_string(),
            zone: "Ward B".to_string(),
            active: true,
        },
        RfidTag {
            id: 0,
            tag_code: "RF-00433".to_string(),
            assignee: "Infusion pump 2".to_string(),
            zone: "ICU".to_string(),
            active: true,
        },
        RfidTag {
            id: 0,
            tag_code: "RF-00390".to_string(),
            assignee: "Gurney 1".to_string(),
            zone: "Storage".to_string(),
            active: false,
        },
    ]
}

fn sample_marketing_visits() -> Vec<MarketingVisit> {
    vec![
        MarketingVisit {
            id: 0,
            representative: "Kiran Rao".to_string(),
            clinic: "Sunrise Clinic".to_string(),
            notes: "left brochures, follow up next month".to_string(),
            lat: 12.9716,
            lng: 77.5946,
            date: date(2026, 7, 22),
        },
        MarketingVisit {
            id: 0,
            representative: "Kiran Rao".to_string(),
            clinic: "Lakeside Diagnostics".to_string(),
            notes: "interested in referral program".to_string(),
            lat: 12.9352,
            lng: 77.6245,
            date: date(2026, 8, 1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionKind;

    #[tokio::test]
    async fn test_populate_appends_rather_than_replacing() {
        let registry = Registry::seeded().await.unwrap();
        let before = registry.stats().await.total();
        // A fresh registry is the only reset path; re-running populate appends.
        populate(&registry).await.unwrap();
        assert_eq!(registry.stats().await.total(), before * 2);
    }

    #[tokio::test]
    async fn test_seed_transaction_sums() {
        let registry = Registry::seeded().await.unwrap();
        let transactions = registry.transactions.list().await;

        let income: f64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expense: f64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        assert_eq!(income, 4550.0);
        assert_eq!(expense, 2000.0);
    }

    #[test]
    fn test_every_sample_record_passes_validation() {
        use crate::registry::Record;
        for d in sample_doctors() {
            d.validate().unwrap();
        }
        for p in sample_patients() {
            p.validate().unwrap();
        }
        for t in sample_transactions() {
            t.validate().unwrap();
        }
        for m in sample_medicines() {
            m.validate().unwrap();
        }
    }
}
