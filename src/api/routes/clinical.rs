//! Clinical Routes
//!
//! Collection endpoints for appointments, prescriptions, lab reports, and
//! the pathology test catalogue. Mounted with full CRUD in the admin and
//! doctor sections; the patient section gets read access plus appointment
//! booking.

use super::crud_routes;
use super::prelude::*;
use crate::model::{Appointment, LabReport, PathologyTest, Prescription};

crud_routes!(Appointment, appointments:
    list_appointments, create_appointment, get_appointment, update_appointment, delete_appointment);

crud_routes!(Prescription, prescriptions:
    list_prescriptions, create_prescription, get_prescription, update_prescription, delete_prescription);

crud_routes!(LabReport, lab_reports:
    list_lab_reports, create_lab_report, get_lab_report, update_lab_report, delete_lab_report);

crud_routes!(PathologyTest, pathology_tests:
    list_pathology_tests, create_pathology_test, get_pathology_test, update_pathology_test,
    delete_pathology_test);
