use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::observability::get_metrics;

#[derive(Clone)]
pub struct HealthState {
    pub service_name: String,
}

/// Liveness probe.
pub async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe. There are no downstream dependencies to wait on.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
