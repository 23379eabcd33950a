//! Medboard REST API
//!
//! HTTP API layer for the hospital console, built with Axum. The route
//! tree is the console's routing shell: one subtree per audience role plus
//! the public site, with no guards and no session state. Role scoping is
//! path scoping, exactly as the original router had it.
//!
//! # Endpoints
//!
//! ## Admin (`/api/v1/admin`)
//! Full CRUD over every collection, `/dashboard` stats, `/export`.
//!
//! ## Doctor (`/api/v1/doctor`)
//! - `GET /dashboard`
//! - Appointments, prescriptions, lab reports: full CRUD
//! - Patients, meetings, notices: read-only
//!
//! ## Patient (`/api/v1/patient`)
//! - `GET /dashboard`
//! - Appointments: list and book
//! - Prescriptions, lab reports, invoices, documents, notices: read-only
//!
//! ## Site (`/api/v1/site`)
//! - `GET /doctors` - public doctor directory
//! - `POST /enquiries` - contact form submission
//!
//! ## Auth
//! - `POST /api/v1/auth/login` - simulated login
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use medboard::api::{serve, ApiConfig, AppState};
//! use medboard::registry::Registry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(Registry::seeded().await?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(registry, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        // Index redirects to the default child, as the console shell does
        .route("/", get(|| async { Redirect::temporary("/api/v1/admin/dashboard") }))
        .route("/dashboard", get(routes::dashboard::admin_dashboard))
        // Staff
        .route("/doctors", get(routes::staff::list_doctors).post(routes::staff::create_doctor))
        .route(
            "/doctors/:id",
            get(routes::staff::get_doctor)
                .put(routes::staff::update_doctor)
                .delete(routes::staff::delete_doctor),
        )
        .route("/users", get(routes::staff::list_users).post(routes::staff::create_user))
        .route(
            "/users/:id",
            get(routes::staff::get_user)
                .put(routes::staff::update_user)
                .delete(routes::staff::delete_user),
        )
        // Patients
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route(
            "/patients/:id",
            get(routes::patients::get_patient)
                .put(routes::patients::update_patient)
                .delete(routes::patients::delete_patient),
        )
        .route(
            "/smart-cards",
            get(routes::patients::list_smart_cards).post(routes::patients::create_smart_card),
        )
        .route(
            "/smart-cards/:id",
            get(routes::patients::get_smart_card)
                .put(routes::patients::update_smart_card)
                .delete(routes::patients::delete_smart_card),
        )
        .route(
            "/documents",
            get(routes::patients::list_documents).post(routes::patients::create_document),
        )
        .route(
            "/documents/:id",
            get(routes::patients::get_document)
                .put(routes::patients::update_document)
                .delete(routes::patients::delete_document),
        )
        // Clinical
        .route(
            "/appointments",
            get(routes::clinical::list_appointments).post(routes::clinical::create_appointment),
        )
        .route(
            "/appointments/:id",
            get(routes::clinical::get_appointment)
                .put(routes::clinical::update_appointment)
                .delete(routes::clinical::delete_appointment),
        )
        .route(
            "/prescriptions",
            get(routes::clinical::list_prescriptions).post(routes::clinical::create_prescription),
        )
        .route(
            "/prescriptions/:id",
            get(routes::clinical::get_prescription)
                .put(routes::clinical::update_prescription)
                .delete(routes::clinical::delete_prescription),
        )
        .route(
            "/lab-reports",
            get(routes::clinical::list_lab_reports).post(routes::clinical::create_lab_report),
        )
        .route(
            "/lab-reports/:id",
            get(routes::clinical::get_lab_report)
                .put(routes::clinical::update_lab_report)
                .delete(routes::clinical::delete_lab_report),
        )
        .route(
            "/pathology-tests",
            get(routes::clinical::list_pathology_tests)
                .post(routes::clinical::create_pathology_test),
        )
        .route(
            "/pathology-tests/:id",
            get(routes::clinical::get_pathology_test)
                .put(routes::clinical::update_pathology_test)
                .delete(routes::clinical::delete_pathology_test),
        )
        // Blood bank
        .route(
            "/donors",
            get(routes::blood_bank::list_donors).post(routes::blood_bank::create_donor),
        )
        .route(
            "/donors/:id",
            get(routes::blood_bank::get_donor)
                .put(routes::blood_bank::update_donor)
                .delete(routes::blood_bank::delete_donor),
        )
        .route(
            "/blood-issues",
            get(routes::blood_bank::list_blood_issues)
                .post(routes::blood_bank::create_blood_issue),
        )
        .route(
            "/blood-issues/:id",
            get(routes::blood_bank::get_blood_issue)
                .put(routes::blood_bank::update_blood_issue)
                .delete(routes::blood_bank::delete_blood_issue),
        )
        // Pharmacy
        .route(
            "/medicines",
            get(routes::pharmacy::list_medicines).post(routes::pharmacy::create_medicine),
        )
        .route(
            "/medicines/:id",
            get(routes::pharmacy::get_medicine)
                .put(routes::pharmacy::update_medicine)
                .delete(routes::pharmacy::delete_medicine),
        )
        .route(
            "/medicine-bills",
            get(routes::pharmacy::list_medicine_bills)
                .post(routes::pharmacy::create_medicine_bill),
        )
        .route(
            "/medicine-bills/:id",
            get(routes::pharmacy::get_medicine_bill)
                .put(routes::pharmacy::update_medicine_bill)
                .delete(routes::pharmacy::delete_medicine_bill),
        )
        // Finance
        .route(
            "/transactions",
            get(routes::finance::list_transactions).post(routes::finance::create_transaction),
        )
        .route(
            "/transactions/:id",
            get(routes::finance::get_transaction)
                .put(routes::finance::update_transaction)
                .delete(routes::finance::delete_transaction),
        )
        .route(
            "/invoices",
            get(routes::finance::list_invoices).post(routes::finance::create_invoice),
        )
        .route(
            "/invoices/:id",
            get(routes::finance::get_invoice)
                .put(routes::finance::update_invoice)
                .delete(routes::finance::delete_invoice),
        )
        .route(
            "/charges",
            get(routes::finance::list_charges).post(routes::finance::create_charge),
        )
        .route(
            "/charges/:id",
            get(routes::finance::get_charge)
                .put(routes::finance::update_charge)
                .delete(routes::finance::delete_charge),
        )
        // Communications
        .route(
            "/notices",
            get(routes::comms::list_notices).post(routes::comms::create_notice),
        )
        .route(
            "/notices/:id",
            get(routes::comms::get_notice)
                .put(routes::comms::update_notice)
                .delete(routes::comms::delete_notice),
        )
        .route(
            "/meetings",
            get(routes::comms::list_meetings).post(routes::comms::create_meeting),
        )
        .route(
            "/meetings/:id",
            get(routes::comms::get_meeting)
                .put(routes::comms::update_meeting)
                .delete(routes::comms::delete_meeting),
        )
        .route(
            "/enquiries",
            get(routes::comms::list_enquiries).post(routes::comms::create_enquiry),
        )
        .route(
            "/enquiries/:id",
            get(routes::comms::get_enquiry)
                .put(routes::comms::update_enquiry)
                .delete(routes::comms::delete_enquiry),
        )
        .route("/sms", get(routes::comms::list_sms).post(routes::comms::send_sms))
        .route("/sms/:id", axum::routing::delete(routes::comms::delete_sms))
        .route("/mail", get(routes::comms::list_mail).post(routes::comms::send_mail))
        .route("/mail/:id", axum::routing::delete(routes::comms::delete_mail))
        // Outreach
        .route(
            "/rfid-tags",
            get(routes::outreach::list_rfid_tags).post(routes::outreach::create_rfid_tag),
        )
        .route(
            "/rfid-tags/:id",
            get(routes::outreach::get_rfid_tag)
                .put(routes::outreach::update_rfid_tag)
                .delete(routes::outreach::delete_rfid_tag),
        )
        .route(
            "/marketing-visits",
            get(routes::outreach::list_marketing_visits)
                .post(routes::outreach::create_marketing_visit),
        )
        .route(
            "/marketing-visits/:id",
            get(routes::outreach::get_marketing_visit)
                .put(routes::outreach::update_marketing_visit)
                .delete(routes::outreach::delete_marketing_visit),
        )
        // Export
        .route("/export", get(routes::export::export_collection));

    let doctor_routes = Router::new()
        .route("/", get(|| async { Redirect::temporary("/api/v1/doctor/dashboard") }))
        .route("/dashboard", get(routes::dashboard::doctor_dashboard))
        .route(
            "/appointments",
            get(routes::clinical::list_appointments).post(routes::clinical::create_appointment),
        )
        .route(
            "/appointments/:id",
            get(routes::clinical::get_appointment)
                .put(routes::clinical::update_appointment)
                .delete(routes::clinical::delete_appointment),
        )
        .route(
            "/prescriptions",
            get(routes::clinical::list_prescriptions).post(routes::clinical::create_prescription),
        )
        .route(
            "/prescriptions/:id",
            get(routes::clinical::get_prescription)
                .put(routes::clinical::update_prescription)
                .delete(routes::clinical::delete_prescription),
        )
        .route(
            "/lab-reports",
            get(routes::clinical::list_lab_reports).post(routes::clinical::create_lab_report),
        )
        .route(
            "/lab-reports/:id",
            get(routes::clinical::get_lab_report)
                .put(routes::clinical::update_lab_report)
                .delete(routes::clinical::delete_lab_report),
        )
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients/:id", get(routes::patients::get_patient))
        .route("/meetings", get(routes::comms::list_meetings))
        .route("/notices", get(routes::comms::list_notices));

    let patient_routes = Router::new()
        .route("/", get(|| async { Redirect::temporary("/api/v1/patient/dashboard") }))
        .route("/dashboard", get(routes::dashboard::patient_dashboard))
        .route(
            "/appointments",
            get(routes::clinical::list_appointments).post(routes::clinical::create_appointment),
        )
        .route("/prescriptions", get(routes::clinical::list_prescriptions))
        .route("/lab-reports", get(routes::clinical::list_lab_reports))
        .route("/invoices", get(routes::finance::list_invoices))
        .route("/documents", get(routes::patients::list_documents))
        .route("/notices", get(routes::comms::list_notices));

    let site_routes = Router::new()
        .route("/doctors", get(routes::staff::list_doctors))
        .route("/enquiries", post(routes::comms::create_enquiry));

    let auth_routes = Router::new().route("/login", post(routes::auth::login));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1/admin", admin_routes)
        .nest("/api/v1/doctor", doctor_routes)
        .nest("/api/v1/patient", patient_routes)
        .nest("/api/v1/site", site_routes)
        .nest("/api/v1/auth", auth_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Medboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Medboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    async fn create_test_app() -> Router {
        let registry = Arc::new(Registry::seeded().await.unwrap());
        let config = ApiConfig::default();
        let state = AppState::new(registry, config);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_counts_seed_records() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["records"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_list_doctors_seeded() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/doctors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"].as_u64().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_create_doctor() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/doctors")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"name": "Ira Bose", "specialty": "Dermatology",
                           "consultation_time": "11:00 - 15:00", "availability": "available"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Ira Bose");
        assert!(json["id"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_doctor_empty_name_is_rejected_and_not_stored() {
        let app = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/doctors")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"name": "", "specialty": "Dermatology",
                           "consultation_time": "11:00 - 15:00", "availability": "available"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

        // The rejected record must not appear in the list
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/doctors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"].as_u64().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/doctors?q=CARDIO")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"].as_u64().unwrap(), 1);
        assert_eq!(json["items"][0]["name"], "Asha Verma");
    }

    #[tokio::test]
    async fn test_get_missing_record_is_404() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/patients/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_only_routes_absent_from_patient_section() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/patient/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"role": "admin", "email": "someone@example.com", "password": ""}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_dashboard_balance() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["income"].as_f64().unwrap(), 4550.0);
        assert_eq!(json["expense"].as_f64().unwrap(), 2000.0);
        assert_eq!(json["balance"].as_f64().unwrap(), 2550.0);
    }

    #[tokio::test]
    async fn test_export_csv() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/export?collection=doctors&format=csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/csv"
        );
    }

    #[tokio::test]
    async fn test_export_unknown_collection_is_rejected() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/export?collection=nonsense")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_send_sms_stamps_timestamp() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/sms")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"recipient": "555-2201", "body": "Reminder: bring reports"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert!(json["sent_at"].as_i64().unwrap() > 0);
    }
}
