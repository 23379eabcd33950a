//! Dashboard Routes
//!
//! Per-role stat endpoints. Every figure is a count or a plain sum over
//! one collection, computed on request, matching the arithmetic the original
//! dashboard cards did client-side.

use super::prelude::*;
use crate::api::dto::{AdminDashboard, DoctorDashboard, PatientDashboard};
use crate::model::{AppointmentStatus, InvoiceStatus, ReportStatus, TransactionKind};

/// GET /api/v1/admin/dashboard
pub async fn admin_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AdminDashboard>> {
    let registry = &state.registry;
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

    Ok(Json(AdminDashboard {
        patients: registry.patients.len().await,
        doctors: registry.doctors.len().await,
        appointments: registry.appointments.len().await,
        donors: registry.donors.len().await,
        medicines: registry.medicines.len().await,
        enquiries: registry.enquiries.len().await,
        income,
        expense,
        balance: income - expense,
    }))
}

/// GET /api/v1/doctor/dashboard
pub async fn doctor_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DoctorDashboard>> {
    let registry = &state.registry;
    let appointments = registry.appointments.list().await;
    let scheduled = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .count();
    let pending_reports = registry
        .lab_reports
        .list()
        .await
        .iter()
        .filter(|r| r.status == ReportStatus::Pending)
        .count();

    Ok(Json(DoctorDashboard {
        appointments: appointments.len(),
        scheduled_appointments: scheduled,
        prescriptions: registry.prescriptions.len().await,
        patients: registry.patients.len().await,
        pending_reports,
    }))
}

/// GET /api/v1/patient/dashboard
pub async fn patient_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PatientDashboard>> {
    let registry = &state.registry;
    let invoices = registry.invoices.list().await;
    let amount_due: f64 = invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Paid)
        .map(|i| i.amount)
        .sum();

    Ok(Json(PatientDashboard {
        appointments: registry.appointments.len().await,
        prescriptions: registry.prescriptions.len().await,
        lab_reports: registry.lab_reports.len().await,
        invoices: invoices.len(),
        amount_due,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::registry::Registry;

    #[tokio::test]
    async fn test_admin_dashboard_sums_match_seed() {
        let registry = Arc::new(Registry::seeded().await.unwrap());
        let state = Arc::new(AppState::new(Arc::clone(&registry), ApiConfig::default()));

        let Json(dashboard) = admin_dashboard(State(state)).await.unwrap();
        assert_eq!(dashboard.income, 4550.0);
        assert_eq!(dashboard.expense, 2000.0);
        assert_eq!(dashboard.balance, 2550.0);
        assert_eq!(dashboard.doctors, registry.doctors.len().await);
    }

    #[tokio::test]
    async fn test_patient_dashboard_amount_due_excludes_paid() {
        let registry = Arc::new(Registry::seeded().await.unwrap());
        let state = Arc::new(AppState::new(registry, ApiConfig::default()));

        let Json(dashboard) = patient_dashboard(State(state)).await.unwrap();
        // Seeded invoices: 950 paid, 1400 unpaid, 3200 overdue
        assert_eq!(dashboard.amount_due, 4600.0);
    }
}
