//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use super::prelude::*;
use crate::api::dto::HealthResponse;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. The registry is in-process memory, so if
/// the handler runs at all the service is ready.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    let _ = state.registry.stats().await;
    StatusCode::OK
}

/// GET /health
///
/// Full health status with record totals.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.registry.stats().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        records: stats.total(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
