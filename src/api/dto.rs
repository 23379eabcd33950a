//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Domain records serialize directly as their own wire shape; the types
//! here are the envelopes and the handful of endpoint-specific payloads.

use serde::{Deserialize, Serialize};

use crate::model::Role;

// ============================================
// COLLECTION DTOs
// ============================================

/// Query parameters accepted by every list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Case-insensitive substring filter; omitted or empty returns all
    #[serde(default)]
    pub q: Option<String>,
}

/// List envelope returned by every list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Matching records in insertion order
    pub items: Vec<T>,
    /// Number of records returned
    pub total: usize,
}

// ============================================
// AUTH DTOs
// ============================================

/// Simulated login request
///
/// Credentials are checked for presence only; nothing validates them
/// against any store.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    pub email: String,
    pub password: String,
}

/// Simulated login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub role: Role,
    /// Display name derived from the email local part
    pub display_name: String,
    /// Opaque random token; the server keeps no record of it
    pub token: String,
}

// ============================================
// MESSAGING DTOs
// ============================================

/// Send-SMS request; the outbox row gets its timestamp server-side
#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    pub recipient: String,
    pub body: String,
}

/// Send-mail request; the outbox row gets its timestamp server-side
#[derive(Debug, Deserialize)]
pub struct SendMailRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Admin dashboard stats: collection counts plus finance sums
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub donors: usize,
    pub medicines: usize,
    pub enquiries: usize,
    /// Plain sum over income transactions
    pub income: f64,
    /// Plain sum over expense transactions
    pub expense: f64,
    /// income - expense
    pub balance: f64,
}

/// Doctor dashboard stats
#[derive(Debug, Serialize, Deserialize)]
pub struct DoctorDashboard {
    pub appointments: usize,
    pub scheduled_appointments: usize,
    pub prescriptions: usize,
    pub patients: usize,
    pub pending_reports: usize,
}

/// Patient dashboard stats
#[derive(Debug, Serialize, Deserialize)]
pub struct PatientDashboard {
    pub appointments: usize,
    pub prescriptions: usize,
    pub lab_reports: usize,
    pub invoices: usize,
    /// Sum over unpaid and overdue invoices
    pub amount_due: f64,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Collection name ("doctors", "patients", "transactions", ...)
    pub collection: String,
    /// Format: json or csv
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "json".to_string()
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Total records currently in the registry
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
