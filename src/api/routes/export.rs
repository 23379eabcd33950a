//! Export Routes
//!
//! Whole-collection export as JSON or CSV. Export reads the same
//! in-memory lists every other endpoint does; it is a convenience dump,
//! not a backup mechanism (there is nothing to back up).

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::prelude::*;
use crate::api::dto::ExportParams;
use crate::registry::{Collection, RegistryError};

enum Format {
    Json,
    Csv,
}

/// GET /api/v1/admin/export?collection=<name>&format=json|csv
pub async fn export_collection(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::NotFound("Export endpoint is disabled".to_string()));
    }

    let format = match params.format.to_lowercase().as_str() {
        "json" => Format::Json,
        "csv" => Format::Csv,
        other => {
            return Err(ApiError::Validation(format!(
                "Invalid format: {}. Use json or csv",
                other
            )))
        }
    };

    let registry = &state.registry;
    let body = match params.collection.as_str() {
        "doctors" => render(&registry.doctors, &format).await?,
        "users" => render(&registry.users, &format).await?,
        "patients" => render(&registry.patients, &format).await?,
        "smart_cards" => render(&registry.smart_cards, &format).await?,
        "documents" => render(&registry.documents, &format).await?,
        "appointments" => render(&registry.appointments, &format).await?,
        "prescriptions" => render(&registry.prescriptions, &format).await?,
        "lab_reports" => render(&registry.lab_reports, &format).await?,
        "pathology_tests" => render(&registry.pathology_tests, &format).await?,
        "donors" => render(&registry.donors, &format).await?,
        "blood_issues" => render(&registry.blood_issues, &format).await?,
        "medicines" => render(&registry.medicines, &format).await?,
        "medicine_bills" => render(&registry.medicine_bills, &format).await?,
        "transactions" => render(&registry.transactions, &format).await?,
        "invoices" => render(&registry.invoices, &format).await?,
        "charges" => render(&registry.charges, &format).await?,
        "notices" => render(&registry.notices, &format).await?,
        "meetings" => render(&registry.meetings, &format).await?,
        "enquiries" => render(&registry.enquiries, &format).await?,
        "sms" => render(&registry.sms_outbox, &format).await?,
        "mail" => render(&registry.mail_outbox, &format).await?,
        "rfid_tags" => render(&registry.rfid_tags, &format).await?,
        "marketing_visits" => render(&registry.marketing_visits, &format).await?,
        other => {
            return Err(ApiError::Registry(RegistryError::UnknownCollection(
                other.to_string(),
            )))
        }
    };

    let content_type = match format {
        Format::Json => "application/json",
        Format::Csv => "text/csv",
    };

    tracing::info!(collection = %params.collection, content_type, "collection exported");

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

async fn render<T: Record + Serialize>(
    collection: &Collection<T>,
    format: &Format,
) -> ApiResult<String> {
    let records = collection.list().await;
    match format {
        Format::Json => serde_json::to_string_pretty(&records)
            .map_err(|e| ApiError::Internal(format!("JSON export failed: {}", e))),
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in &records {
                writer
                    .serialize(record)
                    .map_err(|e| ApiError::Internal(format!("CSV export failed: {}", e)))?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| ApiError::Internal(format!("CSV export failed: {}", e)))?;
            String::from_utf8(bytes)
                .map_err(|e| ApiError::Internal(format!("CSV export failed: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[tokio::test]
    async fn test_render_csv_has_header_and_rows() {
        let registry = Registry::seeded().await.unwrap();
        let csv = render(&registry.doctors, &Format::Csv).await.unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().contains("name"));
        assert!(csv.contains("Asha Verma"));
    }

    #[tokio::test]
    async fn test_render_json_is_an_array() {
        let registry = Registry::seeded().await.unwrap();
        let json = render(&registry.patients, &Format::Json).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_array());
        assert!(!parsed.as_array().unwrap().is_empty());
    }
}
