use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use backend_application::AppState;

pub async fn health_live() -> impl IntoResponse {
    StatusCode::OK
}

/// Ready means the template store answers; that exercises the same disk
/// the schedule store lives on.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.template_repo.list().await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(err) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()).into_response(),
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render_prometheus()
}
