//! Wire types mirrored from the Medboard API
//!
//! The console keeps these as plain strings where the server uses enums
//! and dates, which is exactly what the form fields bind to; serde bridges
//! the two since the server serializes enums and dates as strings.

use serde::{Deserialize, Serialize};

/// List envelope returned by every list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: usize,
}

/// API error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    pub message: String,
}

// ============ Staff ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub consultation_time: String,
    pub availability: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaffUser {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub active: bool,
}

// ============ Patients ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_group: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmartCard {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub card_number: String,
    pub issued_on: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub title: String,
    pub category: String,
    pub uploaded_on: String,
}

// ============ Clinical ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub reason: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub medication: String,
    pub dosage: String,
    #[serde(default)]
    pub instructions: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabReport {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub test_name: String,
    #[serde(default)]
    pub result: String,
    pub status: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathologyTest {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub sample: String,
    pub charge: f64,
}

// ============ Blood bank ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Donor {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    #[serde(default)]
    pub last_donation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BloodIssue {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub donor: String,
    pub blood_group: String,
    pub amount_ml: u32,
    pub issue_date: String,
}

// ============ Pharmacy ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    pub company: String,
    pub stock: u32,
    pub price: f64,
    pub expiry: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicineBill {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub medicine: String,
    pub quantity: u32,
    pub total: f64,
    pub date: String,
}

// ============ Finance ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: u32,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HospitalCharge {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    pub amount: f64,
}

// ============ Communications ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub body: String,
    pub audience: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub agenda: String,
    pub location: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Enquiry {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmsMessage {
    #[serde(default)]
    pub id: u32,
    pub recipient: String,
    pub body: String,
    #[serde(default)]
    pub sent_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MailMessage {
    #[serde(default)]
    pub id: u32,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub sent_at: i64,
}

// ============ Outreach ============

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RfidTag {
    #[serde(default)]
    pub id: u32,
    pub tag_code: String,
    pub assignee: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketingVisit {
    #[serde(default)]
    pub id: u32,
    pub representative: String,
    pub clinic: String,
    #[serde(default)]
    pub notes: String,
    pub lat: f64,
    pub lng: f64,
    pub date: String,
}

// ============ Dashboards ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminDashboard {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub donors: usize,
    pub medicines: usize,
    pub enquiries: usize,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorDashboard {
    pub appointments: usize,
    pub scheduled_appointments: usize,
    pub prescriptions: usize,
    pub patients: usize,
    pub pending_reports: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientDashboard {
    pub appointments: usize,
    pub prescriptions: usize,
    pub lab_reports: usize,
    pub invoices: usize,
    pub amount_due: f64,
}

// ============ Auth ============

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoginResponse {
    pub role: String,
    pub display_name: String,
    pub token: String,
}
