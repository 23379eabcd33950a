//! HTTP API Client
//!
//! Functions for communicating with the Medboard REST API. Every feature
//! page talks through the generic collection helpers; the named functions
//! cover the endpoints with their own shapes (login, dashboards, sends).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    AdminDashboard, DoctorDashboard, ErrorResponse, ListResponse, LoginResponse,
    PatientDashboard,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8086/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("medboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Generic collection helpers ============

/// Fetch a collection under a role section, optionally filtered by `q`
pub async fn fetch_list<T: DeserializeOwned>(
    section: &str,
    path: &str,
    query: &str,
) -> Result<Vec<T>, String> {
    let url = format!("{}/{}/{}", get_api_base(), section, path);
    let request = if query.trim().is_empty() {
        Request::get(&url)
    } else {
        Request::get(&url).query([("q", query)])
    };

    let response = request.send().await.map_err(|e| e.to_string())?;
    let list: ListResponse<T> = parse_response(response).await?;
    Ok(list.items)
}

/// Create a record under a role section
pub async fn create_record<B: Serialize, T: DeserializeOwned>(
    section: &str,
    path: &str,
    record: &B,
) -> Result<T, String> {
    let url = format!("{}/{}/{}", get_api_base(), section, path);
    let response = Request::post(&url)
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_response(response).await
}

/// Update a record by id under a role section
pub async fn update_record<B: Serialize, T: DeserializeOwned>(
    section: &str,
    path: &str,
    id: u32,
    record: &B,
) -> Result<T, String> {
    let url = format!("{}/{}/{}/{}", get_api_base(), section, path, id);
    let response = Request::put(&url)
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_response(response).await
}

/// Delete a record by id under a role section
pub async fn delete_record(section: &str, path: &str, id: u32) -> Result<(), String> {
    let url = format!("{}/{}/{}/{}", get_api_base(), section, path, id);
    let response = Request::delete(&url).send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(extract_error(response).await)
    }
}

// ============ Endpoint-specific functions ============

/// Simulated login; any non-empty credentials succeed
pub async fn login(role: &str, email: &str, password: &str) -> Result<LoginResponse, String> {
    let url = format!("{}/auth/login", get_api_base());
    let body = serde_json::json!({
        "role": role,
        "email": email,
        "password": password,
    });
    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_response(response).await
}

/// Admin dashboard stats
pub async fn fetch_admin_dashboard() -> Result<AdminDashboard, String> {
    fetch_dashboard("admin").await
}

/// Doctor dashboard stats
pub async fn fetch_doctor_dashboard() -> Result<DoctorDashboard, String> {
    fetch_dashboard("doctor").await
}

/// Patient dashboard stats
pub async fn fetch_patient_dashboard() -> Result<PatientDashboard, String> {
    fetch_dashboard("patient").await
}

async fn fetch_dashboard<T: DeserializeOwned>(section: &str) -> Result<T, String> {
    let url = format!("{}/{}/dashboard", get_api_base(), section);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_response(response).await
}

// ============ Response handling ============

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        Err(extract_error(response).await)
    }
}

/// Pull the message out of the API error envelope, falling back to the
/// HTTP status when the body is not the expected shape
async fn extract_error(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("Request failed with status {}", status),
    }
}
