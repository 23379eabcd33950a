//! Clinical records: appointments, prescriptions, lab reports, pathology tests

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// Appointment lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A consultation appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    /// Slot as shown on the form ("10:30")
    pub time: String,
    #[serde(default)]
    pub reason: String,
    pub status: AppointmentStatus,
}

impl_record!(Appointment, "appointment",
    required: [patient, doctor, time],
    search: [patient, doctor, reason]);

/// A prescription written by a doctor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub medication: String,
    /// "500mg twice daily"
    pub dosage: String,
    #[serde(default)]
    pub instructions: String,
    pub date: NaiveDate,
}

impl_record!(Prescription, "prescription",
    required: [patient, doctor, medication, dosage],
    search: [patient, doctor, medication]);

/// Lab report completion state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Completed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A lab report row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabReport {
    #[serde(default)]
    pub id: u32,
    pub patient: String,
    pub test_name: String,
    /// Free-text result summary, empty while pending
    #[serde(default)]
    pub result: String,
    pub status: ReportStatus,
    pub date: NaiveDate,
}

impl_record!(LabReport, "lab report",
    required: [patient, test_name],
    search: [patient, test_name]);

/// A pathology test offered by the hospital, with its list charge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathologyTest {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// "Hematology", "Biochemistry", ...
    pub category: String,
    /// Sample type ("blood", "urine")
    #[serde(default)]
    pub sample: String,
    pub charge: f64,
}

impl_record!(PathologyTest, "pathology test",
    required: [name, category],
    amounts: [charge],
    search: [name, category]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    #[test]
    fn test_appointment_requires_doctor() {
        let appt = Appointment {
            id: 0,
            patient: "Rohan Mehta".to_string(),
            doctor: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            time: "10:30".to_string(),
            reason: "follow-up".to_string(),
            status: AppointmentStatus::Scheduled,
        };
        assert!(appt.validate().is_err());
    }

    #[test]
    fn test_pathology_charge_must_be_finite() {
        let mut test = PathologyTest {
            id: 0,
            name: "Complete Blood Count".to_string(),
            category: "Hematology".to_string(),
            sample: "blood".to_string(),
            charge: 350.0,
        };
        assert!(test.validate().is_ok());
        test.charge = f64::NAN;
        assert!(test.validate().is_err());
        test.charge = -10.0;
        assert!(test.validate().is_err());
    }
}
